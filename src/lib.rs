//! This crate provides the client-side controller of a project task-tracking page.
//!
//! It talks to the task server in the [`client`] module, that can be used as a stand-alone module.
//!
//! A page shows the same task set twice (a task list and a calendar view), and both must keep matching the server after every edit or delete. \
//! The [`PageController`](controller::PageController) ties the pieces together: it re-fetches data, rebuilds the rendered list, refreshes the calendar through a widget you provide, and drives the shared edit modal. \
//! The rendering widget, the HTTP API and the user prompts are external collaborators, reached through the traits in [`traits`].

pub mod traits;

mod task;
pub use task::{Priority, Task, TaskFields, TaskId};
mod role;
pub use role::{ControlSet, Role};
mod session;
pub use session::{PageSession, ProjectId};

pub mod list;
pub use list::TaskListView;
pub mod calendar;
pub use calendar::{CalendarEvent, CalendarSync};
pub mod modal;
pub use modal::EditModal;
pub mod controller;
pub use controller::PageController;

pub mod client;
pub mod reports;

pub mod mock_behaviour;
pub mod utils;
