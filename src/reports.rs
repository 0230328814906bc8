//! The week-ahead deadline report.
//!
//! A small, pure summary over a task collection: how many tasks come due on each of the next days. A chart widget consumes the labels and counts; nothing here fetches or renders.

use chrono::{Duration, NaiveDate};

use crate::task::Task;

/// The report covers today plus the seven following days
const REPORT_DAYS: i64 = 8;

/// The tasks due on one day of the report window
#[derive(Clone, Debug, PartialEq)]
pub struct DaySlot {
    date: NaiveDate,
    tasks: Vec<Task>,
}

impl DaySlot {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Deadlines of the week ahead, bucketed by day
#[derive(Clone, Debug, PartialEq)]
pub struct WeekReport {
    days: Vec<DaySlot>,
}

/// Bucket a task collection into the 8-day window starting at `today`.
/// Deadlines outside the window are ignored
pub fn week_report(today: NaiveDate, tasks: &[Task]) -> WeekReport {
    let mut days: Vec<DaySlot> = (0..REPORT_DAYS)
        .map(|offset| DaySlot {
            date: today + Duration::days(offset),
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        let offset = (task.deadline() - today).num_days();
        if offset >= 0 && offset < REPORT_DAYS {
            days[offset as usize].tasks.push(task.clone());
        }
    }

    WeekReport { days }
}

impl WeekReport {
    pub fn days(&self) -> &[DaySlot] {
        &self.days
    }

    /// One ISO date label per day, for a chart widget
    pub fn chart_labels(&self) -> Vec<String> {
        self.days.iter().map(|day| day.date.format("%Y-%m-%d").to_string()).collect()
    }

    /// Per-day task counts, aligned with [`Self::chart_labels`]
    pub fn chart_data(&self) -> Vec<usize> {
        self.days.iter().map(|day| day.tasks.len()).collect()
    }
}
