//! Repository contract tests for [`InMemoryTodoRepository`].

use super::helpers::repo;
use mockable::DefaultClock;
use rstest::rstest;
use todo_ddd::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId, TodoPriority},
    ports::{TodoRepository, TodoRepositoryError},
};

fn new_todo(title: &str) -> Todo {
    Todo::new(title, "", TodoPriority::Medium, &DefaultClock).expect("valid todo")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_find_returns_equal_todo(repo: InMemoryTodoRepository) {
    let todo = new_todo("Stored");

    repo.save(&todo).await.expect("save succeeds");
    let found = repo.find_by_id(todo.id()).await.expect("todo found");

    assert_eq!(found, todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_overwrites_existing_todo(repo: InMemoryTodoRepository) {
    let mut todo = new_todo("Original");
    repo.save(&todo).await.expect("first save");

    todo.update_title("Renamed", &DefaultClock).expect("valid title");
    repo.save(&todo).await.expect("second save");

    let all = repo.find_all().await.expect("list succeeds");
    assert_eq!(all.len(), 1);
    assert_eq!(
        repo.find_by_id(todo.id()).await.expect("todo found").title(),
        "Renamed"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_missing_todo_is_not_found(repo: InMemoryTodoRepository) {
    let id = TodoId::new();
    let result = repo.find_by_id(id).await;
    assert!(matches!(result, Err(TodoRepositoryError::NotFound(missing)) if missing == id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_only_the_named_todo(repo: InMemoryTodoRepository) {
    let keep = new_todo("Keep");
    let removed = new_todo("Removed");
    repo.save(&keep).await.expect("save keep");
    repo.save(&removed).await.expect("save removed");

    repo.delete(removed.id()).await.expect("delete succeeds");

    let remaining = repo.find_all().await.expect("list succeeds");
    assert_eq!(remaining, vec![keep]);
    assert!(matches!(
        repo.delete(removed.id()).await,
        Err(TodoRepositoryError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_storage(repo: InMemoryTodoRepository) {
    let other = repo.clone();
    let todo = new_todo("Shared");

    repo.save(&todo).await.expect("save succeeds");

    assert!(other.find_by_id(todo.id()).await.is_ok());
}
