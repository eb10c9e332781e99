//! The to-do entity.
//!
//! # Design
//! `ToDo` is plain data. It knows how to build itself from a creation request
//! and how to flip its own state, but nothing about rows or SQL; the server's
//! repository owns the row mapping. `id` stays `None` until the store assigns
//! one on insert.

use std::fmt;

use crate::types::CreateToDoRequest;

/// Upper bound on `contents`, enforced by the store schema.
pub const MAX_CONTENTS_LEN: usize = 256;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDo {
    pub id: Option<i64>,
    pub contents: String,
    pub is_done: bool,
}

impl ToDo {
    /// Build an unsaved item, copying the request fields verbatim.
    pub fn create(request: &CreateToDoRequest) -> Self {
        Self {
            id: None,
            contents: request.contents.clone(),
            is_done: request.is_done,
        }
    }

    /// Mark the item as not done, whatever its current state.
    pub fn undone(&mut self) {
        self.is_done = false;
    }
}

impl fmt::Display for ToDo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "ToDo(id={id}, ")?,
            None => write!(f, "ToDo(id=None, ")?,
        }
        write!(f, "contents={}, is_done={})", self.contents, self.is_done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(contents: &str, is_done: bool) -> CreateToDoRequest {
        CreateToDoRequest {
            contents: contents.to_string(),
            is_done,
        }
    }

    #[test]
    fn create_copies_request_and_leaves_id_unset() {
        let todo = ToDo::create(&request("test", false));
        assert_eq!(todo.id, None);
        assert_eq!(todo.contents, "test");
        assert!(!todo.is_done);
    }

    #[test]
    fn create_keeps_is_done_true() {
        let todo = ToDo::create(&request("already finished", true));
        assert!(todo.is_done);
    }

    #[test]
    fn undone_clears_done_flag() {
        let mut todo = ToDo {
            id: Some(1),
            contents: "string".to_string(),
            is_done: true,
        };
        todo.undone();
        assert!(!todo.is_done);
        assert_eq!(todo.id, Some(1));
    }

    #[test]
    fn undone_on_open_item_stays_open() {
        let mut todo = ToDo::create(&request("open", false));
        todo.undone();
        assert!(!todo.is_done);
    }

    #[test]
    fn display_matches_log_format() {
        let todo = ToDo {
            id: Some(7),
            contents: "walk dog".to_string(),
            is_done: false,
        };
        assert_eq!(todo.to_string(), "ToDo(id=7, contents=walk dog, is_done=false)");

        let unsaved = ToDo::create(&request("new", true));
        assert_eq!(unsaved.to_string(), "ToDo(id=None, contents=new, is_done=true)");
    }
}
