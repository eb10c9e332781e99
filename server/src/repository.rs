//! Data access for the `todos` table.
//!
//! Every function takes the request's session and issues one statement;
//! `create_todo` and `update_todo` follow their write with a reload so the
//! caller sees exactly what the store holds. Absence is `Ok(None)`, never an
//! error. Nothing here retries.

use sqlx::{FromRow, SqliteConnection};
use todo_core::ToDo;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("to-do has no id; it must be created before it can be updated")]
    Unpersisted,
}

/// Row image of `todos`. Kept separate from `ToDo` so the entity carries no
/// persistence code.
#[derive(Debug, FromRow)]
struct ToDoRow {
    id: i64,
    contents: String,
    is_done: bool,
}

impl From<ToDoRow> for ToDo {
    fn from(row: ToDoRow) -> Self {
        Self {
            id: Some(row.id),
            contents: row.contents,
            is_done: row.is_done,
        }
    }
}

/// All rows in store order.
pub async fn get_todos(session: &mut SqliteConnection) -> Result<Vec<ToDo>, DbError> {
    let rows = sqlx::query_as::<_, ToDoRow>("SELECT id, contents, is_done FROM todos")
        .fetch_all(&mut *session)
        .await?;
    tracing::debug!(count = rows.len(), "fetched todos");
    Ok(rows.into_iter().map(ToDo::from).collect())
}

pub async fn get_todo_by_id(
    session: &mut SqliteConnection,
    todo_id: i64,
) -> Result<Option<ToDo>, DbError> {
    let row = sqlx::query_as::<_, ToDoRow>("SELECT id, contents, is_done FROM todos WHERE id = ?")
        .bind(todo_id)
        .fetch_optional(&mut *session)
        .await?;
    Ok(row.map(ToDo::from))
}

/// Insert `todo` and return it as stored, with its generated id.
pub async fn create_todo(session: &mut SqliteConnection, todo: ToDo) -> Result<ToDo, DbError> {
    let result = sqlx::query("INSERT INTO todos (contents, is_done) VALUES (?, ?)")
        .bind(&todo.contents)
        .bind(todo.is_done)
        .execute(&mut *session)
        .await?;
    let id = result.last_insert_rowid();
    tracing::debug!(id, "inserted todo");
    reload(session, id).await
}

/// Write every mutable field of `todo` back to its row and return the row.
pub async fn update_todo(session: &mut SqliteConnection, todo: ToDo) -> Result<ToDo, DbError> {
    let id = todo.id.ok_or(DbError::Unpersisted)?;
    sqlx::query("UPDATE todos SET contents = ?, is_done = ? WHERE id = ?")
        .bind(&todo.contents)
        .bind(todo.is_done)
        .bind(id)
        .execute(&mut *session)
        .await?;
    tracing::debug!(id, is_done = todo.is_done, "updated todo");
    reload(session, id).await
}

pub async fn delete_todo(session: &mut SqliteConnection, todo_id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(todo_id)
        .execute(&mut *session)
        .await?;
    tracing::debug!(id = todo_id, rows = result.rows_affected(), "deleted todo");
    Ok(())
}

async fn reload(session: &mut SqliteConnection, id: i64) -> Result<ToDo, DbError> {
    let row = sqlx::query_as::<_, ToDoRow>("SELECT id, contents, is_done FROM todos WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *session)
        .await?;
    Ok(row.into())
}
