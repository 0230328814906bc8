use std::error::Error;

use async_trait::async_trait;

use crate::calendar::CalendarEvent;
use crate::client::MutationResponse;
use crate::role::Role;
use crate::session::ProjectId;
use crate::task::{Task, TaskFields, TaskId};

/// The task server, as seen from the page.
///
/// The real implementor is the HTTP [`ApiClient`](crate::client::ApiClient); tests substitute an in-memory server that implements the same contract.
#[async_trait]
pub trait TaskApi {
    /// Returns the role of the current viewer (`GET /api/user/role`)
    async fn fetch_role(&self) -> Result<Role, Box<dyn Error>>;

    /// Returns the project page fragment (`GET /project/{id}`), an XHTML snippet containing a `tasksList` element
    async fn fetch_project_page(&self, project: ProjectId) -> Result<String, Box<dyn Error>>;

    /// Returns the editable fields of a single task (`GET /api/tasks/{id}`)
    async fn fetch_task(&self, task: TaskId) -> Result<TaskFields, Box<dyn Error>>;

    /// Returns every task of a project (`GET /api/tasks?project_id={id}`)
    async fn fetch_tasks(&self, project: ProjectId) -> Result<Vec<Task>, Box<dyn Error>>;

    /// Submits edited fields (`POST /task/edit/{id}`).
    /// A `Result::Ok` only means the server answered; the payload still carries an application-level success-or-error status
    async fn edit_task(&self, task: TaskId, fields: &TaskFields) -> Result<MutationResponse, Box<dyn Error>>;

    /// Deletes a task (`POST /task/delete/{id}`).
    /// Same contract as [`Self::edit_task`] regarding the payload status
    async fn delete_task(&self, task: TaskId) -> Result<MutationResponse, Box<dyn Error>>;
}

/// The calendar rendering widget, a black box that consumes an event list.
///
/// This crate never draws anything itself: it clears and re-feeds the widget whenever the server state changes, and asks it to render.
pub trait CalendarWidget {
    fn add_events(&mut self, events: Vec<CalendarEvent>);
    fn remove_all_events(&mut self);
    fn render(&mut self);
}

/// Blocking user prompts (the browser's `confirm`/`alert` pair).
///
/// Only two flows go through this: the delete confirmation, and the alert raised when an edit or delete comes back with a server-side error message.
pub trait UiPrompt {
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
}
