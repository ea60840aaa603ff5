#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]

//! Shared data models for the TaskDeck web client.
//!
//! Everything the frontend exchanges with the backend REST API lives here:
//! user and task records, auth and chat payloads, the task list query model,
//! and the pure filtering/sorting/statistics helpers the dashboard views use.

pub mod models;

pub use models::auth::{AuthResponse, SessionResponse, SignInRequest, SignUpRequest};
pub use models::chat::{ChatRequest, ChatResponse};
pub use models::errors::ErrorResponse;
pub use models::task::{
    CreateTaskRequest, SortKey, SortOrder, StatusFilter, Task, TaskQuery, TaskStats,
    ToggleCompleteRequest, UpdateTaskRequest, filter_tasks, sort_tasks,
};
pub use models::timestamp::Timestamp;
pub use models::user::User;
