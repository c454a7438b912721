//! Group update builder.

use desk_core::entities::Group;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub member_ids: Option<Vec<String>>,
}

impl GroupUpdate {
    pub(crate) fn apply(self, group: &mut Group) {
        if let Some(name) = self.name {
            group.name = name;
        }
        if let Some(member_ids) = self.member_ids {
            group.member_ids = dedup_members(member_ids);
        }
    }
}

/// Drop repeated ids, keeping first occurrences in order.
pub(crate) fn dedup_members(member_ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    member_ids
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[derive(Debug, Default)]
pub struct GroupUpdateBuilder(GroupUpdate);

impl GroupUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(GroupUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn member_ids(mut self, member_ids: Vec<String>) -> Self {
        self.0.member_ids = Some(member_ids);
        self
    }

    #[must_use]
    pub fn build(self) -> GroupUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let ids = vec!["u2".into(), "u1".into(), "u2".into()];
        assert_eq!(dedup_members(ids), vec!["u2".to_string(), "u1".to_string()]);
    }
}
