//! Repository methods on [`crate::DeskDb`], one module per table.

pub mod comments;
pub mod tickets;
pub mod users;
