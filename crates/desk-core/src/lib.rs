//! # desk-core
//!
//! Core types, ID generation, and error types for the helpdesk.
//!
//! This crate provides the foundational types shared across all helpdesk crates:
//! - Entity structs for users, tickets, comments, and groups
//! - Status, priority, role, and problem-type enums
//! - ID prefix constants and random ID generation
//! - Session identity and the route access gate
//! - Cross-cutting error types
//! - Action and dashboard response types

pub mod access;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
