/*
Collection operations on todos.
Module was independently written from HTTP / file storage for testing
*/

use crate::models::{CreateTodoInput, Todo, UpdateTodoInput};

// Exact string match on id: no trimming, no case folding.
pub fn find_todo<'a>(todos: &'a [Todo], id: &str) -> Option<&'a Todo> {
    todos.iter().find(|t| t.id == id)
}

pub fn find_todo_mut<'a>(todos: &'a mut [Todo], id: &str) -> Option<&'a mut Todo> {
    todos.iter_mut().find(|t| t.id == id)
}

// Append a new todo under `id`. Missing title/description are stored empty.
pub fn create_todo(todos: &mut Vec<Todo>, id: String, input: CreateTodoInput) {
    todos.push(Todo {
        id,
        title: input.title.unwrap_or_default(),
        description: input.description.unwrap_or_default(),
        completed: false,
    });
}

// Overwrite only the fields the client supplied.
pub fn apply_update(todo: &mut Todo, input: UpdateTodoInput) {
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(description) = input.description {
        todo.description = description;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
}

// Returns false when nothing matched.
pub fn remove_todo(todos: &mut Vec<Todo>, id: &str) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}
