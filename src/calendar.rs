//! Keeping the calendar view in sync with the server.
//!
//! The widget that actually draws the calendar is a black box behind [`CalendarWidget`]; this module feeds it. Refreshing always goes back to the server, so the calendar never shows a task set the list does not.

use std::error::Error;

use chrono::NaiveDate;
use csscolorparser::Color;
use once_cell::sync::Lazy;

use crate::session::ProjectId;
use crate::task::{Priority, Task};
use crate::traits::{CalendarWidget, TaskApi};

static HIGH_PRIORITY_COLOR: Lazy<Color> = Lazy::new(|| csscolorparser::parse("red").expect("cannot parse a fixed CSS color name."));
static MEDIUM_PRIORITY_COLOR: Lazy<Color> = Lazy::new(|| csscolorparser::parse("blue").expect("cannot parse a fixed CSS color name."));
static DEFAULT_PRIORITY_COLOR: Lazy<Color> = Lazy::new(|| csscolorparser::parse("green").expect("cannot parse a fixed CSS color name."));

/// The display color of a calendar event: red for high-priority tasks, blue for medium ones, green for everything else
pub fn event_color(priority: &Priority) -> Color {
    match priority {
        Priority::High => HIGH_PRIORITY_COLOR.clone(),
        Priority::Medium => MEDIUM_PRIORITY_COLOR.clone(),
        _ => DEFAULT_PRIORITY_COLOR.clone(),
    }
}

/// One entry of the event list the widget consumes
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarEvent {
    title: String,
    start: NaiveDate,
    color: Color,
}

impl CalendarEvent {
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn start(&self) -> NaiveDate {
        self.start
    }
    pub fn color(&self) -> &Color {
        &self.color
    }
}

/// How a task shows up on the calendar: its deadline is the event date, its priority sets the color
pub fn event_for_task(task: &Task) -> CalendarEvent {
    CalendarEvent {
        title: format!("{} (Priority: {})", task.title(), task.priority()),
        start: task.deadline(),
        color: event_color(task.priority()),
    }
}

/// Wraps the rendering widget and acts as its event source
pub struct CalendarSync<W: CalendarWidget> {
    widget: W,
}

impl<W: CalendarWidget> CalendarSync<W> {
    pub fn new(widget: W) -> Self {
        Self { widget }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Clear the widget and reload it with the project's current tasks.
    ///
    /// This runs on page load and after every successful edit or delete. The task set is always re-fetched: the server is the single source of truth after a mutation
    pub async fn refresh<A: TaskApi>(&mut self, api: &A, project: ProjectId) -> Result<(), Box<dyn Error>> {
        let tasks = api.fetch_tasks(project).await?;
        let events = tasks.iter().map(event_for_task).collect();

        self.widget.remove_all_events();
        self.widget.add_events(events);
        self.widget.render();
        Ok(())
    }
}
