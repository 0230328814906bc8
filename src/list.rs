//! The rendered task list.
//!
//! Rows are plain values, computed by [`task_row`] from a role and a task. There are no event listeners to re-bind after a re-render: user actions all enter through the controller, which is a stable dispatch surface.

use std::error::Error;

use minidom::Element;

use crate::role::{ControlSet, Role};
use crate::task::{Task, TaskId};
use crate::utils::{find_elem_by_id, find_elems_by_class};

/// The detail text of a task row, exactly as the page displays it
pub fn details_line(task: &Task) -> String {
    format!(
        "{} - Deadline: {} - Priority: {} - Status: {}",
        task.title(),
        task.deadline().format("%Y-%m-%d"),
        task.priority(),
        task.status()
    )
}

/// The declarative view function: what row does a given role get for a given task.
///
/// This is where role gating happens, and the only place that decides which controls exist.
pub fn task_row(role: Option<Role>, task: &Task) -> TaskRow {
    TaskRow {
        task_id: task.id(),
        details: details_line(task),
        controls: ControlSet::for_role(role),
    }
}

/// One rendered task row: detail text plus the action controls the current role unlocks
#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow {
    task_id: TaskId,
    details: String,
    controls: ControlSet,
}

impl TaskRow {
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }
    pub fn details(&self) -> &str {
        &self.details
    }
    pub fn controls(&self) -> ControlSet {
        self.controls
    }
}

/// The `tasksList` element of the page.
///
/// Every update replaces the whole row set, either from an authoritative task array (after a mutation) or from the server-rendered page fragment (on page load).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskListView {
    rows: Vec<TaskRow>,
}

impl TaskListView {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    /// Replace every row, rendering the given tasks for the given role
    pub fn replace_with_tasks(&mut self, role: Option<Role>, tasks: &[Task]) {
        self.rows = tasks.iter().map(|task| task_row(role, task)).collect();
    }

    /// Replace every row from the `GET /project/{id}` fragment.
    ///
    /// The fragment is well-formed XHTML. Rows are read from the `task-item` children of the `tasksList` element: the task id from their `data-task-id` attribute, the detail text from their `task-details` child. Controls are computed for the given role, not taken from the markup.
    pub fn replace_from_fragment(&mut self, role: Option<Role>, fragment: &str) -> Result<(), Box<dyn Error>> {
        let root: Element = fragment.parse()?;
        let tasks_list = match find_elem_by_id(&root, "tasksList") {
            None => return Err("The fragment has no tasksList element".into()),
            Some(el) => el,
        };

        let mut rows = Vec::new();
        for item in find_elems_by_class(tasks_list, "task-item") {
            let task_id: TaskId = match item.attr("data-task-id").map(|id| id.parse()) {
                Some(Ok(id)) => id,
                _ => {
                    log::warn!("Task item without a usable data-task-id attribute, ignoring it");
                    continue;
                }
            };

            let details = match find_elems_by_class(item, "task-details").first() {
                None => {
                    log::warn!("Task item {} has no task-details element, ignoring it", task_id);
                    continue;
                }
                Some(el) => el.text().trim().to_string(),
            };

            rows.push(TaskRow {
                task_id,
                details,
                controls: ControlSet::for_role(role),
            });
        }

        self.rows = rows;
        Ok(())
    }

    /// Recompute the controls of every row for a newly resolved role, keeping the detail text.
    ///
    /// This is the correction pass that runs once the role fetch resolves, since the list may have been rendered before it did.
    pub fn apply_role(&mut self, role: Role) {
        for row in self.rows.iter_mut() {
            row.controls = ControlSet::for_role(Some(role));
        }
    }
}
