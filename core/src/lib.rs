//! Shared core of the to-do service.
//!
//! # Overview
//! Holds everything that does not depend on a web framework or a database
//! driver: the `ToDo` entity, the request/response contracts, the route table
//! and a stateless API client (host-does-IO pattern).
//!
//! # Design
//! - `ToDo` is plain data; row mapping lives in the server's repository.
//! - `ROUTES` describes dispatch as method + path pattern → `Endpoint`; the
//!   server turns it into an axum router.
//! - `TodoClient` splits each endpoint into `build_*` and `parse_*`, so the
//!   I/O boundary stays with the caller.

pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod routes;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use model::{ToDo, MAX_CONTENTS_LEN};
pub use routes::{match_route, Endpoint, Route, RouteMatch, ROUTES};
pub use types::{
    CreateToDoRequest, ErrorDetail, ListQuery, Order, ToDoListSchema, ToDoSchema, UnpersistedToDo,
};
