use desk_core::access::{RouteDecision, SIGN_IN_PATH, route_access};
use desk_core::identity::Session;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GateArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GateResponse<'a> {
    path: &'a str,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_to: Option<&'static str>,
}

/// Handle `desk gate <PATH>`.
pub fn handle(args: &GateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&evaluate(args), flags.format)
}

fn evaluate(args: &GateArgs) -> GateResponse<'_> {
    let session = args.signed_in.then(|| Session::for_user_id("cli"));
    let decision = route_access(&args.path, session.as_ref());
    GateResponse {
        path: &args.path,
        allowed: decision == RouteDecision::Allow,
        redirect_to: (decision == RouteDecision::RedirectToSignIn).then_some(SIGN_IN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::cli::root_commands::GateArgs;

    fn args(path: &str, signed_in: bool) -> GateArgs {
        GateArgs {
            path: path.into(),
            signed_in,
        }
    }

    #[test]
    fn anonymous_dashboard_redirects() {
        let gate_args = args("/dashboard", false);
        let response = evaluate(&gate_args);
        assert!(!response.allowed);
        assert_eq!(response.redirect_to, Some("/api/auth/signin"));
    }

    #[test]
    fn public_form_needs_no_session() {
        let gate_args = args("/public/new-ticket", false);
        let response = evaluate(&gate_args);
        assert!(response.allowed);
        assert_eq!(response.redirect_to, None);
    }

    #[test]
    fn session_opens_gated_pages() {
        assert!(evaluate(&args("/tickets/t1", true)).allowed);
    }
}
