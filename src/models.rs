use serde::{Deserialize, Deserializer, Serialize};

// Single stored record. Key order matches the on-disk file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

// Body of POST /todos. `completed` is never taken from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

// Body of PUT /todos/:id. Absent or null keys leave the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

// Response body of POST /todos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTodo {
    pub id: String,
}

// Older writers stored `null` (or nothing) for a missing title/description.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_the_four_file_keys() {
        let todo = Todo {
            id: "abc".to_string(),
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: false,
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "abc",
                "title": "Buy milk",
                "description": "2%",
                "completed": false
            })
        );
    }

    #[test]
    fn todo_reads_missing_and_null_fields_as_defaults() {
        let todo: Todo = serde_json::from_str(r#"{"id":"x","title":null}"#).unwrap();
        assert_eq!(todo.title, "");
        assert_eq!(todo.description, "");
        assert!(!todo.completed);
    }

    #[test]
    fn update_input_treats_null_as_not_supplied() {
        let input: UpdateTodoInput =
            serde_json::from_str(r#"{"title":null,"completed":true}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.description.is_none());
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn create_input_ignores_completed() {
        let input: CreateTodoInput =
            serde_json::from_str(r#"{"title":"t","completed":true}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("t"));
        assert!(input.description.is_none());
    }
}
