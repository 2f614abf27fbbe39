// Task model and wire encoding

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
///
/// Serialized with camelCase field names; `created_at` travels as an
/// RFC 3339 timestamp string under the wire name `createdAt` and is parsed
/// back into a `DateTime<Utc>` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a new task with a fresh id and the current time.
    ///
    /// The id is a UUID v7, so ids stay ordered by creation time without the
    /// collision risk of a raw timestamp. Title and description are stored
    /// trimmed; rejecting an empty trimmed title is the store's job.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let before = Utc::now();
        let task = Task::new("Buy milk", "Half gallon");
        let after = Utc::now();

        assert!(!task.id.is_empty());
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "Half gallon");
        assert!(!task.completed);
        assert!(task.created_at >= before && task.created_at <= after);
    }

    #[test]
    fn test_new_task_trims_fields() {
        let task = Task::new("  Buy milk  ", "  corner store\n");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "corner store");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("A", "");
        let b = Task::new("B", "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let task = Task::new("Buy milk", "");
        let json = serde_json::to_string(&task).unwrap();

        assert!(json.contains("\"createdAt\":\""));
        assert!(json.contains("\"completed\":false"));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_round_trip_preserves_created_at() {
        let task = Task::new("Buy milk", "Half gallon");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back, task);
        assert_eq!(back.created_at, task.created_at);
    }

    #[test]
    fn test_decodes_millisecond_timestamp_strings() {
        // createdAt strings may carry millisecond precision and a Z offset
        let json = r#"{
            "id": "1755000000000",
            "title": "Buy milk",
            "description": "",
            "completed": false,
            "createdAt": "2025-01-15T12:30:45.123Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "1755000000000");
        assert_eq!(task.created_at.to_rfc3339(), "2025-01-15T12:30:45.123+00:00");
    }
}
