// --------------------------------------------------
// Load -> mutate -> save cycle over the Store.
//
// Every call holds one lock for its whole file round trip, so two
// requests never interleave their reads and writes.
// --------------------------------------------------

use std::io;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::logic;
use crate::models::{CreateTodoInput, Todo, UpdateTodoInput};
use crate::store::Store;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

// Random v4 UUID, hyphenated lowercase
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Ids;

impl IdGenerator for UuidV4Ids {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Clone)]
pub struct TodoRepository {
    store: Store,
    ids: Arc<dyn IdGenerator>,
    lock: Arc<Mutex<()>>,
}

impl TodoRepository {
    pub fn new(store: Store, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // Runs `op` on the blocking pool while holding the file lock, so
    // std::fs never stalls a runtime worker.
    async fn with_store<T, F>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&Store) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.lock.lock().await;
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| AppError::Io(io::Error::other(e)))?
    }

    pub async fn list(&self) -> AppResult<Vec<Todo>> {
        self.with_store(|store| store.load()).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Todo> {
        let id = id.to_string();
        self.with_store(move |store| {
            let todos = store.load()?;
            logic::find_todo(&todos, &id)
                .cloned()
                .ok_or(AppError::NotFound(id))
        })
        .await
    }

    pub async fn create(&self, input: CreateTodoInput) -> AppResult<String> {
        let ids = Arc::clone(&self.ids);
        self.with_store(move |store| {
            let mut todos = store.load()?;

            let id = ids.next_id();
            logic::create_todo(&mut todos, id.clone(), input);
            store.save(&todos)?;

            tracing::info!(%id, total = todos.len(), "todo created");
            Ok(id)
        })
        .await
    }

    pub async fn update(&self, id: &str, input: UpdateTodoInput) -> AppResult<()> {
        let id = id.to_string();
        self.with_store(move |store| {
            let mut todos = store.load()?;

            let Some(todo) = logic::find_todo_mut(&mut todos, &id) else {
                return Err(AppError::NotFound(id));
            };
            logic::apply_update(todo, input);
            store.save(&todos)?;

            tracing::debug!(%id, "todo updated");
            Ok(())
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.with_store(move |store| {
            let mut todos = store.load()?;

            if !logic::remove_todo(&mut todos, &id) {
                return Err(AppError::NotFound(id));
            }
            store.save(&todos)?;

            tracing::info!(%id, total = todos.len(), "todo deleted");
            Ok(())
        })
        .await
    }
}
