//! Session gate for page paths and role gates for management actions.
//!
//! Every path outside the public set requires a session; requests without one
//! are redirected to [`SIGN_IN_PATH`]. User and group management additionally
//! require the master-admin role.

use crate::entities::User;
use crate::enums::Role;
use crate::errors::CoreError;
use crate::identity::Session;

/// Where unauthenticated requests for gated paths are sent.
pub const SIGN_IN_PATH: &str = "/api/auth/signin";

/// Paths the gate never inspects (framework assets and API handlers).
const UNGATED_PREFIXES: [&str; 4] = ["/api", "/_next/static", "/_next/image", "/favicon.ico"];

/// Outcome of running a request path through the session gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToSignIn,
}

/// Whether `path` is reachable without a session.
///
/// Public pages live under `/public` (guest ticket submission) plus the
/// login page and the site root.
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    path == "/"
        || path == "/login"
        || path.starts_with("/public")
        || UNGATED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// Decide whether a request for `path` may proceed.
#[must_use]
pub fn route_access(path: &str, session: Option<&Session>) -> RouteDecision {
    if is_public_path(path) || session.is_some() {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectToSignIn
    }
}

/// Require a signed-in user allowed to invite and list accounts.
///
/// # Errors
///
/// `CoreError::Unauthorized` without a user, `CoreError::Forbidden` for any
/// role other than master admin.
pub fn ensure_can_manage_users(user: Option<&User>) -> Result<&User, CoreError> {
    ensure_role(user, "user management", Role::can_manage_users)
}

/// Require a signed-in user allowed to create and edit groups.
///
/// # Errors
///
/// `CoreError::Unauthorized` without a user, `CoreError::Forbidden` for any
/// role other than master admin.
pub fn ensure_can_manage_groups(user: Option<&User>) -> Result<&User, CoreError> {
    ensure_role(user, "group management", Role::can_manage_groups)
}

fn ensure_role<'a>(
    user: Option<&'a User>,
    action: &str,
    allowed: fn(Role) -> bool,
) -> Result<&'a User, CoreError> {
    let user = user.ok_or(CoreError::Unauthorized)?;
    if allowed(user.role) {
        Ok(user)
    } else {
        Err(CoreError::Forbidden {
            action: action.to_string(),
            required: Role::MasterAdmin,
            actual: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::avatar_url;
    use rstest::rstest;

    fn user(role: Role) -> User {
        User {
            id: "u-test".into(),
            name: "Test".into(),
            email: "test@example.com".into(),
            role,
            avatar: avatar_url("Test"),
        }
    }

    #[rstest]
    #[case("/", RouteDecision::Allow)]
    #[case("/login", RouteDecision::Allow)]
    #[case("/public/new-ticket", RouteDecision::Allow)]
    #[case("/api/auth/signin", RouteDecision::Allow)]
    #[case("/favicon.ico", RouteDecision::Allow)]
    #[case("/dashboard", RouteDecision::RedirectToSignIn)]
    #[case("/tickets", RouteDecision::RedirectToSignIn)]
    #[case("/tickets/new", RouteDecision::RedirectToSignIn)]
    #[case("/tickets/t1", RouteDecision::RedirectToSignIn)]
    #[case("/groups", RouteDecision::RedirectToSignIn)]
    #[case("/users", RouteDecision::RedirectToSignIn)]
    #[case("/profile/u1", RouteDecision::RedirectToSignIn)]
    fn anonymous_requests(#[case] path: &str, #[case] expected: RouteDecision) {
        assert_eq!(route_access(path, None), expected, "{path}");
    }

    #[test]
    fn signed_in_requests_pass_everywhere() {
        let session = Session::for_user_id("u1");
        for path in ["/dashboard", "/tickets/t1", "/users", "/login"] {
            assert_eq!(route_access(path, Some(&session)), RouteDecision::Allow);
        }
    }

    #[test]
    fn master_admin_manages_users_and_groups() {
        let admin = user(Role::MasterAdmin);
        assert!(ensure_can_manage_users(Some(&admin)).is_ok());
        assert!(ensure_can_manage_groups(Some(&admin)).is_ok());
    }

    #[test]
    fn support_admin_is_forbidden_from_user_management() {
        let admin = user(Role::Admin);
        let err = ensure_can_manage_users(Some(&admin)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Forbidden {
                actual: Role::Admin,
                ..
            }
        ));
    }

    #[test]
    fn missing_user_is_unauthorized() {
        assert!(matches!(
            ensure_can_manage_groups(None),
            Err(CoreError::Unauthorized)
        ));
    }
}
