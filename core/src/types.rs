//! Request and response contracts for the to-do API.
//!
//! # Design
//! These are the shapes that cross the HTTP boundary. The server deserializes
//! requests into them and serializes responses from them; the client does the
//! reverse. Field names match the wire format exactly, so no renames are needed
//! beyond the upper-case `order` values.

use serde::{Deserialize, Serialize};

use crate::model::ToDo;

/// Body of `POST /todos`. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateToDoRequest {
    pub contents: String,
    pub is_done: bool,
}

/// Client-visible sort order of the list endpoint, applied to `id`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Order {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Query string of `GET /todos`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub order: Order,
}

/// A persisted to-do as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToDoSchema {
    pub id: i64,
    pub contents: String,
    pub is_done: bool,
}

/// Returned when an unsaved `ToDo` is turned into a response.
#[derive(Debug, thiserror::Error)]
#[error("to-do has no id; it was never persisted")]
pub struct UnpersistedToDo;

impl TryFrom<ToDo> for ToDoSchema {
    type Error = UnpersistedToDo;

    fn try_from(todo: ToDo) -> Result<Self, Self::Error> {
        let id = todo.id.ok_or(UnpersistedToDo)?;
        Ok(Self {
            id,
            contents: todo.contents,
            is_done: todo.is_done,
        })
    }
}

/// Body of `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToDoListSchema {
    pub todos: Vec<ToDoSchema>,
}

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_both_fields() {
        let ok: CreateToDoRequest =
            serde_json::from_str(r#"{"contents":"test","is_done":false}"#).unwrap();
        assert_eq!(ok.contents, "test");
        assert!(!ok.is_done);

        let missing_flag: Result<CreateToDoRequest, _> =
            serde_json::from_str(r#"{"contents":"test"}"#);
        assert!(missing_flag.is_err());

        let missing_contents: Result<CreateToDoRequest, _> =
            serde_json::from_str(r#"{"is_done":true}"#);
        assert!(missing_contents.is_err());
    }

    #[test]
    fn order_uses_upper_case_names() {
        let q: ListQuery = serde_json::from_str(r#"{"order":"DESC"}"#).unwrap();
        assert_eq!(q.order, Order::Desc);
        assert_eq!(serde_json::to_value(Order::Asc).unwrap(), "ASC");
    }

    #[test]
    fn order_defaults_to_ascending() {
        let q: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.order, Order::Asc);
    }

    #[test]
    fn order_rejects_lower_case() {
        let q: Result<ListQuery, _> = serde_json::from_str(r#"{"order":"desc"}"#);
        assert!(q.is_err());
    }

    #[test]
    fn schema_from_persisted_todo() {
        let todo = ToDo {
            id: Some(3),
            contents: "string".to_string(),
            is_done: true,
        };
        let schema = ToDoSchema::try_from(todo).unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "contents": "string", "is_done": true}));
    }

    #[test]
    fn schema_from_unsaved_todo_fails() {
        let todo = ToDo {
            id: None,
            contents: "draft".to_string(),
            is_done: false,
        };
        assert!(ToDoSchema::try_from(todo).is_err());
    }
}
