//! Framework-independent route table.
//!
//! # Design
//! Every endpoint of the API is one row in `ROUTES`: a method, a path pattern
//! and the `Endpoint` that serves it. Patterns use `{name}` for a single path
//! segment capture, the same syntax axum 0.8 accepts, so the server can build
//! its router by walking this table while the client and tests can resolve
//! paths without a web framework in the loop.

use crate::http::HttpMethod;

/// Logical endpoints of the to-do API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    ListTodos,
    GetTodo,
    CreateTodo,
    UndoneTodo,
    DeleteTodo,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub pattern: &'static str,
    pub endpoint: Endpoint,
}

pub const ROUTES: &[Route] = &[
    Route {
        method: HttpMethod::Get,
        pattern: "/",
        endpoint: Endpoint::Health,
    },
    Route {
        method: HttpMethod::Get,
        pattern: "/todos",
        endpoint: Endpoint::ListTodos,
    },
    Route {
        method: HttpMethod::Post,
        pattern: "/todos",
        endpoint: Endpoint::CreateTodo,
    },
    Route {
        method: HttpMethod::Get,
        pattern: "/todos/{id}",
        endpoint: Endpoint::GetTodo,
    },
    Route {
        method: HttpMethod::Patch,
        pattern: "/todos/{id}",
        endpoint: Endpoint::UndoneTodo,
    },
    Route {
        method: HttpMethod::Delete,
        pattern: "/todos/{id}",
        endpoint: Endpoint::DeleteTodo,
    },
];

/// Distinct patterns in table order, each with the routes registered on it.
pub fn routes_by_pattern() -> Vec<(&'static str, Vec<Route>)> {
    let mut grouped: Vec<(&'static str, Vec<Route>)> = Vec::new();
    for route in ROUTES {
        match grouped.iter_mut().find(|(pattern, _)| *pattern == route.pattern) {
            Some((_, routes)) => routes.push(*route),
            None => grouped.push((route.pattern, vec![*route])),
        }
    }
    grouped
}

/// Result of resolving a method and path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Resolve `method` and `path` to an endpoint. A query string, if present, is
/// ignored.
pub fn match_route(method: HttpMethod, path: &str) -> Option<RouteMatch> {
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    ROUTES
        .iter()
        .filter(|route| route.method == method)
        .find_map(|route| {
            match_pattern(route.pattern, path).map(|params| RouteMatch {
                endpoint: route.endpoint,
                params,
            })
        })
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    let mut params = Vec::new();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    if actual.is_empty() {
                        return None;
                    }
                    params.push((name, actual.to_string()));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_matches('/').split('/').filter(|s| !s.is_empty())
}
