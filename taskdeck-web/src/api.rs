use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, RequestBuilder};
use shared::models::auth::{AuthResponse, SessionResponse, SignInRequest, SignUpRequest};
use shared::models::chat::{ChatRequest, ChatResponse};
use shared::models::task::{
    CreateTaskRequest, Task, TaskQuery, ToggleCompleteRequest, UpdateTaskRequest,
};

use crate::config::FrontendConfig;
use crate::cookie;

thread_local! {
    static SHARED_CLIENT: OnceCell<TaskDeckClient> = OnceCell::new();
}

/// Lightweight API client for TaskDeck backend interactions.
///
/// The bearer token is read fresh from the cookie on every call, so the
/// client always reflects the latest login or logout without any cache.
#[derive(Clone, Debug)]
pub struct TaskDeckClient {
    base_url: String,
    client: Client,
}

impl TaskDeckClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-tab client, built from the frontend configuration once.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(request: RequestBuilder) -> RequestBuilder {
        match cookie::read(cookie::TOKEN_COOKIE) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn signin(&self, payload: &SignInRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("auth/signin");
        let response = Self::authorize(self.client.post(url)).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Register a new account.
    pub async fn signup(&self, payload: &SignUpRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("auth/signup");
        let response = Self::authorize(self.client.post(url)).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Terminate the current session on the backend.
    pub async fn signout(&self) -> Result<(), Error> {
        let url = self.api_url("auth/signout");
        let response = Self::authorize(self.client.post(url)).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Resolve the persisted token to a user, if it is still valid.
    pub async fn session(&self) -> Result<SessionResponse, Error> {
        let url = self.api_url("auth/session");
        let response = Self::authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// List tasks for a user, with optional filters and pagination.
    pub async fn list_tasks(&self, user_id: &str, query: &TaskQuery) -> Result<Vec<Task>, Error> {
        let url = self.api_url(&format!("{user_id}/tasks"));
        let mut request = self.client.get(url);
        let pairs = query.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        let response = Self::authorize(request).send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch a single task.
    pub async fn get_task(&self, user_id: &str, task_id: &str) -> Result<Task, Error> {
        let url = self.api_url(&format!("{user_id}/tasks/{task_id}"));
        let response = Self::authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Create a task; the backend assigns id and timestamps.
    pub async fn create_task(
        &self,
        user_id: &str,
        payload: &CreateTaskRequest,
    ) -> Result<Task, Error> {
        let url = self.api_url(&format!("{user_id}/tasks"));
        let response = Self::authorize(self.client.post(url)).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Partially update a task.
    pub async fn update_task(
        &self,
        user_id: &str,
        task_id: &str,
        payload: &UpdateTaskRequest,
    ) -> Result<Task, Error> {
        let url = self.api_url(&format!("{user_id}/tasks/{task_id}"));
        let response = Self::authorize(self.client.put(url)).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Delete a task.
    pub async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("{user_id}/tasks/{task_id}"));
        let response = Self::authorize(self.client.delete(url)).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Set a task's completion state.
    pub async fn toggle_complete(
        &self,
        user_id: &str,
        task_id: &str,
        completed: bool,
    ) -> Result<Task, Error> {
        let url = self.api_url(&format!("{user_id}/tasks/{task_id}/complete"));
        let payload = ToggleCompleteRequest { completed };
        let response = Self::authorize(self.client.patch(url)).json(&payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Send a free-text message to the assistant endpoint.
    pub async fn chat(&self, payload: &ChatRequest) -> Result<ChatResponse, Error> {
        let url = self.api_url("chat");
        let response = Self::authorize(self.client.post(url)).json(payload).send().await?;
        response.error_for_status()?.json().await
    }
}
