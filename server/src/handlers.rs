//! Request handlers. Each one takes a session, makes its data-access calls
//! and maps the outcome to a status code; a missing row is always 404.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use todo_core::{CreateToDoRequest, ListQuery, Order, ToDo, ToDoListSchema, ToDoSchema};
use tracing::info;

use crate::{
    db::Session,
    error::AppError,
    extract::{TodoId, ValidJson, ValidQuery},
    repository, AppState,
};

/// GET /
pub async fn health() -> Json<Value> {
    Json(json!({ "ping": "pong" }))
}

/// GET /todos?order=ASC|DESC
pub async fn list_todos(
    ValidQuery(query): ValidQuery<ListQuery>,
    mut session: Session,
) -> Result<Json<ToDoListSchema>, AppError> {
    let todos = repository::get_todos(&mut session).await?;
    let mut todos = todos
        .into_iter()
        .map(ToDoSchema::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    sort_by_id(&mut todos, query.order);

    info!(count = todos.len(), order = query.order.as_str(), "listed todos");
    Ok(Json(ToDoListSchema { todos }))
}

/// GET /todos/{id}
pub async fn get_todo(
    TodoId(id): TodoId,
    mut session: Session,
) -> Result<Json<ToDoSchema>, AppError> {
    let todo = repository::get_todo_by_id(&mut session, id)
        .await?
        .ok_or(AppError::TodoNotFound)?;
    Ok(Json(ToDoSchema::try_from(todo)?))
}

/// POST /todos
///
/// The body is parsed before a session is taken from the pool, so a rejected
/// payload never holds a connection.
pub async fn create_todo(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateToDoRequest>,
) -> Result<(StatusCode, Json<ToDoSchema>), AppError> {
    let mut session = Session::acquire(state.pool()).await?;
    let todo = ToDo::create(&request);
    let todo = repository::create_todo(&mut session, todo).await?;

    info!(%todo, "created todo");
    Ok((StatusCode::CREATED, Json(ToDoSchema::try_from(todo)?)))
}

/// PATCH /todos/{id}
///
/// Always marks the item undone, whatever its current state.
pub async fn undone_todo(
    TodoId(id): TodoId,
    mut session: Session,
) -> Result<Json<ToDoSchema>, AppError> {
    let mut todo = repository::get_todo_by_id(&mut session, id)
        .await?
        .ok_or(AppError::TodoNotFound)?;
    todo.undone();
    let todo = repository::update_todo(&mut session, todo).await?;

    info!(id, "marked todo undone");
    Ok(Json(ToDoSchema::try_from(todo)?))
}

/// DELETE /todos/{id}
pub async fn delete_todo(TodoId(id): TodoId, mut session: Session) -> Result<StatusCode, AppError> {
    repository::get_todo_by_id(&mut session, id)
        .await?
        .ok_or(AppError::TodoNotFound)?;
    repository::delete_todo(&mut session, id).await?;

    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Any path with no route.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

fn sort_by_id(todos: &mut [ToDoSchema], order: Order) {
    match order {
        Order::Asc => todos.sort_by_key(|t| t.id),
        Order::Desc => todos.sort_by_key(|t| std::cmp::Reverse(t.id)),
    }
}
