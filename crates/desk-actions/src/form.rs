//! Ticket creation form and its validation.

use desk_core::enums::TicketPriority;
use serde::Deserialize;

use crate::error::ActionError;

/// Raw ticket form fields as submitted. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TicketForm {
    pub title: Option<String>,
    pub description: Option<String>,
    /// One of `LOW`, `MEDIUM`, `HIGH`, `URGENT`; missing means `MEDIUM`.
    pub priority: Option<String>,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTicket {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
}

impl TicketForm {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            priority: None,
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// # Errors
    ///
    /// `ActionError::InvalidFields` if title or description is blank or the
    /// priority is not a known value.
    pub fn validate(self) -> Result<ValidTicket, ActionError> {
        let title = required("title", self.title)?;
        let description = required("description", self.description)?;
        let priority = match self.priority {
            None => TicketPriority::default(),
            Some(raw) => serde_json::from_value(serde_json::Value::String(raw.clone()))
                .map_err(|_| ActionError::InvalidFields(format!("unknown priority '{raw}'")))?,
        };
        Ok(ValidTicket {
            title,
            description,
            priority,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ActionError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ActionError::InvalidFields(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn missing_priority_defaults_to_medium() {
        let valid = TicketForm::new("Printer", "Jammed").validate().unwrap();
        assert_eq!(valid.priority, TicketPriority::Medium);
    }

    #[rstest]
    #[case("LOW", TicketPriority::Low)]
    #[case("HIGH", TicketPriority::High)]
    #[case("URGENT", TicketPriority::Urgent)]
    fn known_priorities_parse(#[case] raw: &str, #[case] expected: TicketPriority) {
        let valid = TicketForm::new("t", "d").priority(raw).validate().unwrap();
        assert_eq!(valid.priority, expected);
    }

    #[rstest]
    #[case::no_title(TicketForm { title: None, ..TicketForm::new("", "d") })]
    #[case::blank_title(TicketForm::new("   ", "d"))]
    #[case::empty_description(TicketForm::new("t", ""))]
    #[case::bad_priority(TicketForm::new("t", "d").priority("CRITICAL"))]
    #[case::lowercase_priority(TicketForm::new("t", "d").priority("high"))]
    fn invalid_forms(#[case] form: TicketForm) {
        assert!(matches!(form.validate(), Err(ActionError::InvalidFields(_))));
    }
}
