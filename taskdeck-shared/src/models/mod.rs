//! Wire-level models shared between pages and the API client.

pub mod auth;
pub mod chat;
pub mod errors;
pub mod task;
pub mod timestamp;
pub mod user;
