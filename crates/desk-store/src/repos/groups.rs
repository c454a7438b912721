use chrono::Utc;
use desk_core::entities::Group;
use desk_core::ids::PREFIX_GROUP;

use super::fresh_id;
use crate::error::StoreError;
use crate::storage::{Collection, KeyValueStorage};
use crate::store::DeskStore;
use crate::updates::group::{GroupUpdate, dedup_members};

impl<S: KeyValueStorage> DeskStore<S> {
    /// Append a group. Repeated member ids are collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if id generation or the storage write fails.
    pub fn create_group(&mut self, name: &str, member_ids: Vec<String>) -> Result<Group, StoreError> {
        let id = fresh_id(PREFIX_GROUP, self.groups.iter().map(|g| g.id.as_str()))?;
        let group = Group {
            id,
            name: name.to_string(),
            member_ids: dedup_members(member_ids),
            created_at: Utc::now(),
        };
        let mut groups = self.groups.clone();
        groups.push(group.clone());
        self.commit(Collection::Groups, groups, |s| &mut s.groups)?;
        tracing::info!(group_id = %group.id, members = group.member_ids.len(), "created group");
        Ok(group)
    }

    /// Merge `update` into group `id`. Groups carry no update timestamp.
    ///
    /// Returns `Ok(None)` without writing if no group has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn update_group(&mut self, id: &str, update: GroupUpdate) -> Result<Option<Group>, StoreError> {
        let Some(index) = self.groups.iter().position(|g| g.id == id) else {
            return Ok(None);
        };
        let mut groups = self.groups.clone();
        update.apply(&mut groups[index]);
        let updated = groups[index].clone();
        self.commit(Collection::Groups, groups, |s| &mut s.groups)?;
        Ok(Some(updated))
    }

    #[must_use]
    pub fn get_group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    #[must_use]
    pub fn groups_for_user(&self, user_id: &str) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.has_member(user_id)).collect()
    }
}
