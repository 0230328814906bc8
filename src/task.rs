//! Tasks, as the server hands them out

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The server-assigned identifier of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
impl FromStr for TaskId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s.parse()?;
        Ok(Self(id))
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(TaskId(id))
    }
}

/// The priority of a task.
///
/// The server speaks plain strings. The three known levels are parsed into their own variants; anything else is kept verbatim, so that it can be displayed and posted back unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Other(text) => text,
        }
    }
}

impl From<String> for Priority {
    fn from(text: String) -> Self {
        match text.as_str() {
            "Low" => Priority::Low,
            "Medium" => Priority::Medium,
            "High" => Priority::High,
            _ => Priority::Other(text),
        }
    }
}
impl From<&str> for Priority {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}
impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// Used to support serde
impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Priority, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Priority::from(text))
    }
}

/// (De)serialization of the `deadline` field.
///
/// The server usually sends a plain ISO date, but some serializers append a time part. Only what comes before a `T` is relevant here.
pub(crate) mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let date_part = text.split('T').next().unwrap_or(&text);
        NaiveDate::parse_from_str(date_part, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A task of the current project.
///
/// Tasks are owned by the server; this is a transient read/render copy. Nothing here mutates it, an edit goes through [`TaskFields`] and comes back as a fresh collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(with = "iso_date")]
    deadline: NaiveDate,
    priority: Priority,
    /// Free-form status tag ("Pending", "Open"...). The server owns the vocabulary
    status: String,
}

impl Task {
    pub fn new(id: TaskId, title: String, deadline: NaiveDate, priority: Priority, status: String) -> Self {
        Self { id, title, deadline, priority, status }
    }

    pub fn id(&self) -> TaskId          { self.id }
    pub fn title(&self) -> &str         { &self.title }
    pub fn deadline(&self) -> NaiveDate { self.deadline }
    pub fn priority(&self) -> &Priority { &self.priority }
    pub fn status(&self) -> &str        { &self.status }

    /// The editable subset of this task, e.g. to pre-fill an edit form
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            deadline: self.deadline,
            priority: self.priority.clone(),
            status: self.status.clone(),
        }
    }
}

/// The four editable fields of a task.
///
/// This is at the same time the payload of `GET /api/tasks/{id}`, the body of `POST /task/edit/{id}`, and what the edit modal holds while the user types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(with = "iso_date")]
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_keeps_unknown_values() {
        assert_eq!(Priority::from("High"), Priority::High);
        assert_eq!(Priority::from("Urgent"), Priority::Other("Urgent".to_string()));
        assert_eq!(Priority::from("Urgent").as_str(), "Urgent");

        let serialized = serde_json::to_string(&Priority::Other("Urgent".to_string())).unwrap();
        assert_eq!(serialized, "\"Urgent\"");
    }

    #[test]
    fn deadline_tolerates_a_time_part() {
        let task: Task = serde_json::from_str(
            r#"{"id": 5, "title": "Draft", "deadline": "2024-01-01T00:00:00", "priority": "High", "status": "Open"}"#,
        ).unwrap();
        assert_eq!(task.deadline(), NaiveDate::from_ymd(2024, 1, 1));

        // And it is serialized back without one
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["deadline"], "2024-01-01");
    }

    #[test]
    fn task_fields_round_trip() {
        let task: Task = serde_json::from_str(
            r#"{"id": 5, "title": "Draft", "deadline": "2024-01-01", "priority": "High", "status": "Open"}"#,
        ).unwrap();
        let fields = task.fields();
        assert_eq!(fields.title, "Draft");
        assert_eq!(fields.priority, Priority::High);

        let body = serde_json::to_value(&fields).unwrap();
        assert_eq!(body["deadline"], "2024-01-01");
        assert_eq!(body["status"], "Open");
    }
}
