//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoId, TodoPriority, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
///
/// Deletion is soft: rows keep their data and gain a `deleted_at` marker
/// taken from the repository clock, and every read ignores marked rows.
/// `find_all` orders by creation time.
pub struct PostgresTodoRepository<C = DefaultClock> {
    pool: TodoPgPool,
    clock: Arc<C>,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool, stamping
    /// soft deletes with the system clock.
    #[must_use]
    pub fn new(pool: TodoPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }
}

impl<C> PostgresTodoRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new repository that stamps soft deletes with `clock`.
    #[must_use]
    pub const fn with_clock(pool: TodoPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| TodoRepositoryError::unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

impl<C> Clone for PostgresTodoRepository<C> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for PostgresTodoRepository<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresTodoRepository")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C> TodoRepository for PostgresTodoRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn save(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let row = to_new_row(todo);
        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&row)
                .on_conflict(todos::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Todo> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.into_inner()))
                .filter(todos::deleted_at.is_null())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map_or(Err(TodoRepositoryError::NotFound(id)), row_to_todo)
        })
        .await
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .filter(todos::deleted_at.is_null())
                .order(todos::created_at.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let deleted_at = self.clock.utc();
        self.run_blocking(move |connection| {
            let affected = diesel::update(
                todos::table
                    .filter(todos::id.eq(id.into_inner()))
                    .filter(todos::deleted_at.is_null()),
            )
            .set(todos::deleted_at.eq(Some(deleted_at)))
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(todo: &Todo) -> NewTodoRow {
    NewTodoRow {
        id: todo.id().into_inner(),
        title: todo.title().to_owned(),
        description: todo.description().to_owned(),
        priority: todo.priority().as_str().to_owned(),
        status: todo.status().as_str().to_owned(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
        completed_at: todo.completed_at(),
        deleted_at: None,
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title,
        description,
        priority: persisted_priority,
        status: persisted_status,
        created_at,
        updated_at,
        completed_at,
    } = row;

    let priority = TodoPriority::try_from(persisted_priority.as_str())
        .map_err(TodoRepositoryError::persistence)?;
    let status =
        TodoStatus::try_from(persisted_status.as_str()).map_err(TodoRepositoryError::persistence)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::from_uuid(id),
        title,
        description,
        priority,
        status,
        created_at,
        updated_at,
        completed_at,
    }))
}
