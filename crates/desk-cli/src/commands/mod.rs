pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod gate;
pub mod group;
pub mod guest;
pub mod profile;
pub mod server;
pub mod shared;
pub mod ticket;
pub mod user;
