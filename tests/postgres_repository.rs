//! Integration tests for [`PostgresTodoRepository`] against a live database.
//!
//! Set `TEST_DATABASE_URL` to a disposable database to run them; the `todos`
//! table is dropped and recreated. Without it the tests return early.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::{Nullable, Timestamptz, Uuid as SqlUuid};
use mockable::Clock;
use std::sync::Arc;
use todo_ddd::todo::{
    adapters::postgres::{PostgresTodoRepository, TodoPgPool},
    domain::{PersistedTodoData, Todo, TodoId, TodoPriority, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError},
};

const CREATE_SCHEMA_SQL: &str = include_str!("../migrations/2026-01-10-000000_create_todos/up.sql");
const DROP_SCHEMA_SQL: &str = include_str!("../migrations/2026-01-10-000000_create_todos/down.sql");

/// Tests that recreate the `todos` table hold this for their whole run.
static SCHEMA_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

fn database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL").ok()
}

fn fresh_pool(url: &str) -> TodoPgPool {
    let mut connection = PgConnection::establish(url).expect("connect to test database");
    connection
        .batch_execute(DROP_SCHEMA_SQL)
        .expect("drop todos table");
    connection
        .batch_execute(CREATE_SCHEMA_SQL)
        .expect("create todos table");

    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("build pool");
    pool
}

fn fresh_repository(url: &str) -> PostgresTodoRepository {
    PostgresTodoRepository::new(fresh_pool(url))
}

/// Clock pinned to a single instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(QueryableByName)]
struct DeletionMarker {
    #[diesel(sql_type = Nullable<Timestamptz>)]
    deleted_at: Option<DateTime<Utc>>,
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0)
        .single()
        .expect("valid instant")
}

/// Timestamps are whole seconds so they survive the microsecond column
/// precision unchanged.
fn todo_at(title: &str, offset_minutes: i64, status: TodoStatus) -> Todo {
    let created_at = base_time() + Duration::minutes(offset_minutes);
    Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(),
        title: title.to_owned(),
        description: format!("{title} description"),
        priority: TodoPriority::High,
        status,
        created_at,
        updated_at: created_at,
        completed_at: (status == TodoStatus::Completed).then_some(created_at),
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn postgres_repository_honours_the_contract() {
    let Some(url) = database_url() else {
        return;
    };
    let _schema = SCHEMA_LOCK.lock().await;
    let repo = fresh_repository(&url);

    let later = todo_at("Later", 5, TodoStatus::Pending);
    let earlier = todo_at("Earlier", 1, TodoStatus::Pending);
    repo.save(&later).await.expect("save later");
    repo.save(&earlier).await.expect("save earlier");

    assert_eq!(
        repo.find_by_id(earlier.id()).await.expect("find earlier"),
        earlier
    );
    assert_eq!(
        repo.find_all().await.expect("list todos"),
        vec![earlier.clone(), later.clone()],
        "todos are listed by creation time"
    );

    let completed = Todo::from_persisted(PersistedTodoData {
        id: earlier.id(),
        title: earlier.title().to_owned(),
        description: earlier.description().to_owned(),
        priority: TodoPriority::Low,
        status: TodoStatus::Completed,
        created_at: earlier.created_at(),
        updated_at: earlier.created_at() + Duration::minutes(30),
        completed_at: Some(earlier.created_at() + Duration::minutes(30)),
    });
    repo.save(&completed).await.expect("upsert completed");
    assert_eq!(
        repo.find_by_id(earlier.id()).await.expect("find completed"),
        completed
    );

    repo.delete(later.id()).await.expect("delete later");
    assert!(matches!(
        repo.find_by_id(later.id()).await,
        Err(TodoRepositoryError::NotFound(id)) if id == later.id()
    ));
    assert!(matches!(
        repo.delete(later.id()).await,
        Err(TodoRepositoryError::NotFound(_))
    ));
    assert_eq!(
        repo.find_all().await.expect("list after delete"),
        vec![completed]
    );

    assert!(matches!(
        repo.find_by_id(TodoId::new()).await,
        Err(TodoRepositoryError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_database_is_unavailable() {
    if database_url().is_none() {
        return;
    }
    let manager = ConnectionManager::<PgConnection>::new("postgres://nobody@127.0.0.1:1/none");
    let pool = Pool::builder()
        .max_size(1)
        .min_idle(Some(0))
        .connection_timeout(std::time::Duration::from_millis(200))
        .build_unchecked(manager);
    let repo = PostgresTodoRepository::new(pool);

    assert!(matches!(
        repo.find_all().await,
        Err(TodoRepositoryError::Unavailable(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn soft_delete_is_stamped_from_the_repository_clock() {
    let Some(url) = database_url() else {
        return;
    };
    let _schema = SCHEMA_LOCK.lock().await;
    let pool = fresh_pool(&url);
    let deleted_at = base_time() + Duration::days(3);
    let repo = PostgresTodoRepository::with_clock(pool.clone(), Arc::new(FixedClock(deleted_at)));

    let todo = todo_at("Ephemeral", 0, TodoStatus::Pending);
    repo.save(&todo).await.expect("save todo");
    repo.delete(todo.id()).await.expect("delete todo");

    let mut connection = pool.get().expect("pooled connection");
    let marker = diesel::sql_query("SELECT deleted_at FROM todos WHERE id = $1")
        .bind::<SqlUuid, _>(todo.id().into_inner())
        .get_result::<DeletionMarker>(&mut connection)
        .expect("soft-deleted row is kept");
    assert_eq!(marker.deleted_at, Some(deleted_at));
}
