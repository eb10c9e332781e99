//! Stateless HTTP request builder and response parser for the to-do API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`; the caller performs the round-trip in between.
//! Error responses carry a `{"detail": ...}` body which is surfaced in the
//! matching `ApiError` variant.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateToDoRequest, ErrorDetail, Order, ToDoListSchema, ToDoSchema};

/// Synchronous, stateless client for the to-do API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/")
    }

    pub fn build_list_todos(&self, order: Order) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todos?order={}", order.as_str()))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &CreateToDoRequest) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut req = self.request(HttpMethod::Post, "/todos");
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }

    /// PATCH carries no body; the server always marks the item undone.
    pub fn build_undone_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Patch, &format!("/todos/{id}"))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<ToDoSchema>, ApiError> {
        check_status(&response, 200)?;
        let list: ToDoListSchema = decode(&response.body)?;
        Ok(list.todos)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<ToDoSchema, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<ToDoSchema, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_undone_todo(&self, response: HttpResponse) -> Result<ToDoSchema, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    let detail = || {
        serde_json::from_str::<ErrorDetail>(&response.body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| response.body.clone())
    };
    match response.status {
        404 => Err(ApiError::NotFound { detail: detail() }),
        422 => Err(ApiError::Validation { detail: detail() }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
