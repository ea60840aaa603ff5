//! Task records, mutation payloads, and the list query model.
//!
//! The pure helpers at the bottom (`filter_tasks`, `sort_tasks`, `TaskStats`)
//! back the dashboard and task list views; they never touch the network.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::models::timestamp::Timestamp;

/// A user-owned to-do item as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned by the backend.
    pub id: String,

    /// Owner of the task.
    pub user_id: String,

    /// Short label for the task. Non-empty after trimming.
    pub title: String,

    /// Optional free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the task has been completed.
    pub completed: bool,

    /// Creation time, assigned by the backend.
    pub created_at: Timestamp,

    /// Last mutation time, assigned by the backend.
    pub updated_at: Timestamp,
}

impl Task {
    /// Case-insensitive match against the title or description.
    ///
    /// An empty needle matches every task, so views can feed the search box
    /// value through unconditionally.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if self.title.to_lowercase().contains(&needle) {
            return true;
        }
        self.description
            .as_ref()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}

/// Body of `POST /api/{user_id}/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Title for the new task.
    pub title: String,

    /// Optional details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Initial completion state. New tasks start pending.
    #[serde(default)]
    pub completed: bool,
}

impl CreateTaskRequest {
    /// Build a create request from trimmed form input.
    #[must_use]
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description: description.filter(|text| !text.trim().is_empty()),
            completed: false,
        }
    }
}

/// Partial body of `PUT /api/{user_id}/tasks/{task_id}`; absent fields are
/// left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// Replacement title, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replacement description, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement completion state, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body of `PATCH /api/{user_id}/tasks/{task_id}/complete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleCompleteRequest {
    /// The completion state to set.
    pub completed: bool,
}

impl Default for ToggleCompleteRequest {
    fn default() -> Self {
        Self { completed: true }
    }
}

/// Completion filter for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum StatusFilter {
    /// Every task regardless of state.
    #[default]
    All,
    /// Only completed tasks.
    Completed,
    /// Only tasks still open.
    Pending,
}

impl StatusFilter {
    /// Whether a task passes this filter.
    #[must_use]
    pub fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }

    /// Human label for filter controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}

/// Sort key for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic by title, case-insensitive.
    Title,
    /// By creation time.
    #[default]
    CreatedAt,
}

impl SortKey {
    /// Human label for sort controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::CreatedAt => "Created",
        }
    }
}

/// Sort direction for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

/// Query parameters for `GET /api/{user_id}/tasks`.
///
/// Defaults are omitted from the wire so the backend's own defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Completion filter; `All` is the backend default and is not sent.
    pub status: StatusFilter,
    /// Sort key, when the caller wants one.
    pub sort: Option<SortKey>,
    /// Sort direction, when the caller wants one.
    pub order: Option<SortOrder>,
    /// Number of tasks to skip, for pagination.
    pub skip: Option<u32>,
    /// Maximum number of tasks to return.
    pub limit: Option<u32>,
}

impl TaskQuery {
    /// Query-string pairs in the spelling the backend expects.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.status != StatusFilter::All {
            pairs.push(("status", self.status.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks with `completed == true`.
    pub completed: usize,
    /// Tasks still open.
    pub pending: usize,
    /// Completed share as a whole percentage; zero for an empty list.
    pub completion_percent: u32,
}

impl TaskStats {
    /// Compute aggregates over a fetched task list.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let completion_percent = if total == 0 {
            0
        } else {
            u32::try_from(completed * 100 / total).unwrap_or(100)
        };
        Self {
            total,
            completed,
            pending: total - completed,
            completion_percent,
        }
    }
}

/// Apply the status filter and search needle a view holds to a fetched list.
///
/// A task is kept only when it passes the status filter and matches the
/// search in its title or description.
#[must_use]
pub fn filter_tasks(tasks: &[Task], status: StatusFilter, search: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| status.accepts(task) && task.matches_search(search))
        .cloned()
        .collect()
}

/// Sort a task list in place by the given key and direction.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey, order: SortOrder) {
    tasks.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::CreatedAt => a.created_at.0.cmp(&b.created_at.0),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
