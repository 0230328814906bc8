//! The page controller.
//!
//! This module ties the pieces together: one [`PageController`] per page load owns the session, the rendered list, the calendar synchronizer and the edit modal, and runs every user-triggered flow against the task server.
//!
//! All entry points swallow their failures after logging them. A failed request never takes the page down, it just leaves the current view state as it was.

use crate::calendar::CalendarSync;
use crate::list::TaskListView;
use crate::modal::EditModal;
use crate::role::Role;
use crate::session::{PageSession, ProjectId};
use crate::task::{Task, TaskId};
use crate::traits::{CalendarWidget, TaskApi, UiPrompt};

/// The controller of one task-board page.
///
/// `A` is the task server (the HTTP [`ApiClient`](crate::client::ApiClient), or a mock in tests), `W` the calendar rendering widget, `P` the confirm/alert sink.
pub struct PageController<A, W, P>
where
    A: TaskApi,
    W: CalendarWidget,
    P: UiPrompt,
{
    api: A,
    prompt: P,
    session: PageSession,
    list: TaskListView,
    calendar: CalendarSync<W>,
    modal: EditModal,
}

impl<A, W, P> PageController<A, W, P>
where
    A: TaskApi,
    W: CalendarWidget,
    P: UiPrompt,
{
    pub fn new(api: A, widget: W, prompt: P, project: ProjectId) -> Self {
        Self {
            api,
            prompt,
            session: PageSession::new(project),
            list: TaskListView::new(),
            calendar: CalendarSync::new(widget),
            modal: EditModal::new(),
        }
    }

    /// Boot a controller for a page path.
    ///
    /// Only `/project/{id}` pages have a task board; for any other path this returns `None` and nothing runs.
    pub fn for_path(api: A, widget: W, prompt: P, path: &str) -> Option<Self> {
        let project = ProjectId::from_path(path)?;
        Some(Self::new(api, widget, prompt, project))
    }

    pub fn session(&self) -> &PageSession {
        &self.session
    }
    /// The task server this controller talks to.
    ///
    /// Apart from tests, there are very few (if any) reasons to reach it directly: every flow the page needs goes through the controller methods below.
    pub fn api(&self) -> &A {
        &self.api
    }
    /// The confirm/alert sink. Same remark as for [`Self::api`]
    pub fn prompt(&self) -> &P {
        &self.prompt
    }
    pub fn list(&self) -> &TaskListView {
        &self.list
    }
    pub fn modal(&self) -> &EditModal {
        &self.modal
    }
    /// The modal form, for typing and focus events
    pub fn modal_mut(&mut self) -> &mut EditModal {
        &mut self.modal
    }
    pub fn calendar_widget(&self) -> &W {
        self.calendar.widget()
    }

    /// Initial load of the page.
    ///
    /// Fetches the server-rendered project fragment and rebuilds the list from it, refreshes the calendar, then resolves the role and applies it to the rendered rows. The role is fetched last and nothing waits for it: rows can be rendered control-less first and corrected when it arrives.
    pub async fn load_page(&mut self) {
        let project = self.session.project();

        match self.api.fetch_project_page(project).await {
            Err(err) => {
                log::error!("Error fetching task list: {}", err);
                return;
            }
            Ok(fragment) => {
                if let Err(err) = self.list.replace_from_fragment(self.session.role(), &fragment) {
                    log::error!("Error rendering task list: {}", err);
                    return;
                }
            }
        }

        if let Err(err) = self.calendar.refresh(&self.api, project).await {
            log::error!("Error updating calendar: {}", err);
        }

        match self.api.fetch_role().await {
            Err(err) => log::error!("Error fetching user role: {}", err),
            Ok(role) => {
                self.session.set_role(role);
                self.list.apply_role(role);
            }
        }
    }

    /// Force a role re-fetch and re-apply the controls of every rendered row
    pub async fn refresh_role(&mut self) {
        match self.api.fetch_role().await {
            Err(err) => log::error!("Error fetching user role: {}", err),
            Ok(role) => {
                self.session.set_role(role);
                self.list.apply_role(role);
            }
        }
    }

    /// The cached role, fetched on demand when it is not resolved yet.
    ///
    /// A mutation can complete before the initial role fetch does; re-rendering then retries the fetch rather than rendering control-less rows forever.
    async fn ensure_role(&mut self) -> Option<Role> {
        if let Some(role) = self.session.role() {
            return Some(role);
        }

        match self.api.fetch_role().await {
            Err(err) => {
                log::error!("Error fetching user role: {}", err);
                None
            }
            Ok(role) => {
                self.session.set_role(role);
                Some(role)
            }
        }
    }

    /// Open the edit modal on a task, with the form populated from its current server values.
    /// If the task cannot be fetched, the error is logged and the modal stays as it was
    pub async fn open_edit_modal(&mut self, task: TaskId) {
        log::debug!("Edit requested for task {}", task);

        match self.api.fetch_task(task).await {
            Err(err) => log::error!("Error fetching task {}: {}", task, err),
            Ok(fields) => self.modal.open(task, fields),
        }
    }

    /// Close the modal without saving, on cancel or a click outside of it.
    /// The underlying list is left untouched
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Submit the modal form.
    ///
    /// On a success payload, both views are re-rendered from the returned task collection and the modal closes. On an error payload, the server message is alerted and the modal stays open. On a transport error, the failure is only logged and the modal stays open.
    pub async fn save_edit(&mut self) {
        let (task_id, fields) = match (self.modal.current_task(), self.modal.fields()) {
            (Some(task_id), Some(fields)) => (task_id, fields.clone()),
            _ => {
                log::warn!("Save requested but the edit modal is not open");
                return;
            }
        };

        let response = match self.api.edit_task(task_id, &fields).await {
            Err(err) => {
                log::error!("Error saving task {}: {}", task_id, err);
                return;
            }
            Ok(response) => response,
        };

        if response.is_success() {
            log::debug!("Edit successful for task {}", task_id);
            self.apply_tasks(&response.tasks).await;
            self.modal.close();
        } else {
            let message = response.message.unwrap_or_default();
            log::error!("Edit failed: {}", message);
            self.prompt.alert(&format!("Error: {}", message));
        }
    }

    /// Delete a task, after asking the user to confirm.
    ///
    /// A declined confirmation sends nothing. On a success payload both views are re-rendered from the returned collection; on an error payload the server message is alerted.
    pub async fn request_delete(&mut self, task: TaskId) {
        if self.prompt.confirm("Are you sure you want to delete this task?") == false {
            return;
        }

        let response = match self.api.delete_task(task).await {
            Err(err) => {
                log::error!("Error deleting task {}: {}", task, err);
                return;
            }
            Ok(response) => response,
        };

        if response.is_success() {
            log::debug!("Task {} deleted", task);
            self.apply_tasks(&response.tasks).await;
        } else {
            let message = response.message.unwrap_or_default();
            log::error!("Delete failed: {}", message);
            self.prompt.alert(&format!("Error deleting task: {}", message));
        }
    }

    /// Re-render both views from the authoritative task collection a mutation returned.
    ///
    /// Rendering needs the role, which may still be unresolved at this point; [`Self::ensure_role`] retries the fetch then. The calendar is refreshed from the server rather than from the response payload, which is the same data since mutation responses return the full post-mutation collection.
    async fn apply_tasks(&mut self, tasks: &[Task]) {
        let role = self.ensure_role().await;
        self.list.replace_with_tasks(role, tasks);

        if let Err(err) = self.calendar.refresh(&self.api, self.session.project()).await {
            log::error!("Error updating calendar: {}", err);
        }
    }
}
