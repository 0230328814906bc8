//! This module provides a client to reach the task server over HTTP

use std::error::Error;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::role::Role;
use crate::session::ProjectId;
use crate::task::{Task, TaskFields, TaskId};
use crate::traits::TaskApi;

/// The application-level outcome of an edit or delete
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationStatus {
    Success,
    Error,
}

/// What the mutation endpoints answer.
///
/// On success, `tasks` is the authoritative task collection of the whole project after the mutation: the page re-renders from it instead of patching its own copy. On error, `message` is what gets surfaced to the user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub status: MutationStatus,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn is_success(&self) -> bool {
        self.status == MutationStatus::Success
    }
}

#[derive(Deserialize)]
struct RoleResponse {
    role: Role,
}

/// A task source that fetches its data from the HTTP API
pub struct ApiClient {
    base_url: Url,
}

impl ApiClient {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, Box<dyn Error>> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Box<dyn Error>> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_text(&self, url: Url) -> Result<String, Box<dyn Error>> {
        let res = reqwest::Client::new()
            .get(url)
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", res.status()).into());
        }
        Ok(res.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Box<dyn Error>> {
        let res = reqwest::Client::new()
            .get(url)
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", res.status()).into());
        }
        Ok(res.json().await?)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(&self, url: Url, body: Option<&B>) -> Result<T, Box<dyn Error>> {
        let mut request = reqwest::Client::new().post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let res = request.send().await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", res.status()).into());
        }
        Ok(res.json().await?)
    }
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn fetch_role(&self) -> Result<Role, Box<dyn Error>> {
        let url = self.endpoint("/api/user/role")?;
        let response: RoleResponse = self.get_json(url).await?;
        Ok(response.role)
    }

    async fn fetch_project_page(&self, project: ProjectId) -> Result<String, Box<dyn Error>> {
        let url = self.endpoint(&format!("/project/{}", project))?;
        self.get_text(url).await
    }

    async fn fetch_task(&self, task: TaskId) -> Result<TaskFields, Box<dyn Error>> {
        let url = self.endpoint(&format!("/api/tasks/{}", task))?;
        self.get_json(url).await
    }

    async fn fetch_tasks(&self, project: ProjectId) -> Result<Vec<Task>, Box<dyn Error>> {
        let mut url = self.endpoint("/api/tasks")?;
        url.query_pairs_mut().append_pair("project_id", &project.to_string());
        self.get_json(url).await
    }

    async fn edit_task(&self, task: TaskId, fields: &TaskFields) -> Result<MutationResponse, Box<dyn Error>> {
        let url = self.endpoint(&format!("/task/edit/{}", task))?;
        self.post_json(url, Some(fields)).await
    }

    async fn delete_task(&self, task: TaskId) -> Result<MutationResponse, Box<dyn Error>> {
        let url = self.endpoint(&format!("/task/delete/{}", task))?;
        self.post_json::<TaskFields, _>(url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_joined_on_the_base_url() {
        let client = ApiClient::new("https://tracker.example.com/app/").unwrap();
        let url = client.endpoint("/api/user/role").unwrap();
        assert_eq!(url.as_str(), "https://tracker.example.com/api/user/role");

        let mut url = client.endpoint("/api/tasks").unwrap();
        url.query_pairs_mut().append_pair("project_id", "12");
        assert_eq!(url.as_str(), "https://tracker.example.com/api/tasks?project_id=12");
    }

    #[test]
    fn mutation_responses_parse_both_outcomes() {
        let success: MutationResponse = serde_json::from_str(r#"{
            "status": "success",
            "task": {"id": 5, "title": "Draft", "deadline": "2024-01-02", "priority": "Low", "status": "Open"},
            "tasks": [{"id": 5, "title": "Draft", "deadline": "2024-01-02", "priority": "Low", "status": "Open"}]
        }"#).unwrap();
        assert!(success.is_success());
        assert_eq!(success.tasks.len(), 1);
        assert_eq!(success.message, None);

        let error: MutationResponse = serde_json::from_str(
            r#"{"status": "error", "message": "Task not found"}"#
        ).unwrap();
        assert!(error.is_success() == false);
        assert!(error.tasks.is_empty());
        assert_eq!(error.message.as_deref(), Some("Task not found"));
    }
}
