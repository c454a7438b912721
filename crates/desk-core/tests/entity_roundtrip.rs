//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{Duration, Utc};
use desk_core::entities::*;
use desk_core::enums::*;
use desk_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn guest_ticket() -> Ticket {
    let now = Utc::now();
    Ticket {
        id: "tkt-0badf00d".into(),
        title: "PLUMBING Issue - Room 204".into(),
        description: "Sink is leaking".into(),
        status: TicketStatus::Open,
        priority: TicketPriority::Medium,
        created_by: GUEST_CREATOR.into(),
        assigned_to: None,
        assigned_group_id: Some("g1".into()),
        created_at: now,
        updated_at: now,
        is_guest: true,
        guest_name: Some("Ada".into()),
        guest_email: None,
        guest_room: Some("204".into()),
        problem_type: Some(ProblemType::Plumbing),
    }
}

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "u1".into(),
        name: "Master Admin".into(),
        email: "master@example.com".into(),
        role: Role::MasterAdmin,
        avatar: avatar_url("Master"),
    }
);

roundtrip_and_validate!(guest_ticket_roundtrip, Ticket, guest_ticket());

roundtrip_and_validate!(
    assigned_ticket_roundtrip,
    Ticket,
    Ticket {
        status: TicketStatus::InProgress,
        priority: TicketPriority::Urgent,
        created_by: "u3".into(),
        assigned_to: Some("u2".into()),
        updated_at: Utc::now() + Duration::seconds(5),
        is_guest: false,
        guest_name: None,
        guest_room: None,
        problem_type: None,
        ..guest_ticket()
    }
);

roundtrip_and_validate!(
    comment_roundtrip,
    Comment,
    Comment {
        id: "cmt-12345678".into(),
        ticket_id: "t1".into(),
        content: "Looking into it.".into(),
        created_by: "u2".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    group_roundtrip,
    Group,
    Group {
        id: "g1".into(),
        name: "Support Team".into(),
        member_ids: vec!["u1".into(), "u2".into()],
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    empty_group_roundtrip,
    Group,
    Group {
        id: "grp-00000000".into(),
        name: "Night Shift".into(),
        member_ids: Vec::new(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(action_ok_roundtrip, ActionResult, ActionResult::ok());

roundtrip_and_validate!(
    action_error_roundtrip,
    ActionResult,
    ActionResult::error("Failed to add comment")
);

roundtrip_and_validate!(
    ticket_detail_roundtrip,
    TicketDetail,
    TicketDetail {
        ticket: guest_ticket(),
        creator: PersonRef {
            name: "John Doe".into(),
            email: Some("john@example.com".into()),
            image: None,
        },
        assignee: None,
        comments: vec![CommentWithAuthor {
            comment: Comment {
                id: "cmt-1".into(),
                ticket_id: "tkt-0badf00d".into(),
                content: "On my way".into(),
                created_by: "u2".into(),
                created_at: Utc::now(),
            },
            author: PersonRef {
                name: "Support Admin".into(),
                email: None,
                image: Some(avatar_url("Admin")),
            },
        }],
    }
);

roundtrip_and_validate!(
    stats_roundtrip,
    TicketStats,
    TicketStats {
        total: 7,
        open: 3,
        resolved: 2,
    }
);
