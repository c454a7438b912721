use serde::de::DeserializeOwned;

/// Parse a `SCREAMING_SNAKE_CASE` enum value, accepting any case and `-` for `_`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use desk_core::enums::{ProblemType, Role, TicketPriority, TicketStatus};

    use super::parse_enum;

    #[test]
    fn accepts_kebab_and_lower_case() {
        let status: TicketStatus = parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, TicketStatus::InProgress);
        let role: Role = parse_enum("master_admin", "role").expect("role should parse");
        assert_eq!(role, Role::MasterAdmin);
        let problem: ProblemType = parse_enum("Wifi", "problem type").expect("problem should parse");
        assert_eq!(problem, ProblemType::Wifi);
    }

    #[test]
    fn rejects_unknown_value_with_field_name() {
        let error = parse_enum::<TicketPriority>("critical", "priority")
            .expect_err("unknown priority should fail");
        assert!(error.to_string().contains("invalid priority 'critical'"));
    }
}
