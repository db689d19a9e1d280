// --------------------------------------------------
// Handles API endpoints for todo CRUD operations.
//
// Responsibilities:
// - List / read / create / update / delete todos
// - 404 for anything that is not a todo route
// -------------------------------------------------

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::models::{CreateTodoInput, CreatedTodo, Todo, UpdateTodoInput};
use crate::repository::TodoRepository;

#[derive(Clone)]
pub struct AppState {
    pub todos: TodoRepository,
}

// -----------------------------
// GET /todos
// Returns every todo in storage order
// -----------------------------
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    Ok(Json(state.todos.list().await?))
}

// -----------------------------
// GET /todos/:id
// -----------------------------
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Todo>> {
    Ok(Json(state.todos.get(&id).await?))
}

// -----------------------------
// POST /todos
// Creates a todo (completed = false) and returns its id.
// A missing body creates a todo with empty title/description.
// -----------------------------
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodoInput>,
) -> AppResult<(StatusCode, Json<CreatedTodo>)> {
    let id = state.todos.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedTodo { id })))
}

// -----------------------------
// PUT /todos/:id
// Overwrites only the supplied fields.
// Unknown ids are 404 even when the body is unreadable.
// -----------------------------
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonBody<UpdateTodoInput>, AppError>,
) -> AppResult<StatusCode> {
    let input = match body {
        Ok(JsonBody(input)) => input,
        Err(e) => {
            state.todos.get(&id).await?;
            return Err(e);
        }
    };
    state.todos.update(&id, input).await?;
    Ok(StatusCode::OK)
}

// -----------------------------
// DELETE /todos/:id
// Removes a todo permanently
// -----------------------------
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.todos.delete(&id).await?;
    Ok(StatusCode::OK)
}

// Unknown paths and unsupported methods
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
