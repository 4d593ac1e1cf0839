//! In-memory integration tests for todo use-case flows.

use super::helpers::{InMemoryService, service};
use eyre::ensure;
use rstest::rstest;
use std::collections::HashSet;
use std::sync::Arc;
use todo_ddd::todo::{
    domain::{ErrorKind, TodoPriority, TodoStatus},
    ports::TodoUseCase,
    services::{CreateTodoRequest, UpdateTodoRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buy_milk_walks_the_full_lifecycle(service: InMemoryService) -> eyre::Result<()> {
    let request = CreateTodoRequest::new("Buy milk")
        .with_description("2 liters")
        .with_priority("high");
    let id = service.create_todo(request).await?;

    let created = service.get_todo(id).await?;
    ensure!(created.title == "Buy milk", "title mismatch");
    ensure!(created.status == TodoStatus::Pending, "should start pending");
    ensure!(created.priority == TodoPriority::High, "priority mismatch");
    ensure!(created.completed_at.is_none(), "no completion yet");

    service.complete_todo(id).await?;
    let completed = service.get_todo(id).await?;
    ensure!(completed.status == TodoStatus::Completed, "should be completed");
    let completed_at = completed
        .completed_at
        .ok_or_else(|| eyre::eyre!("completion time missing"))?;
    ensure!(
        completed_at >= created.created_at,
        "completion cannot precede creation"
    );

    service.archive_todo(id).await?;
    let archived = service.get_todo(id).await?;
    ensure!(archived.status == TodoStatus::Archived, "should be archived");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_requested_fields(service: InMemoryService) -> eyre::Result<()> {
    let id = service
        .create_todo(CreateTodoRequest::new("Draft").with_priority("low"))
        .await?;

    service
        .update_todo(
            UpdateTodoRequest::new(id)
                .with_title("Final")
                .with_description("Reviewed")
                .with_priority("high"),
        )
        .await?;

    let todo = service.get_todo(id).await?;
    ensure!(todo.title == "Final", "title not updated");
    ensure!(todo.description == "Reviewed", "description not updated");
    ensure!(todo.priority == TodoPriority::High, "priority not updated");
    ensure!(todo.updated_at >= todo.created_at, "updated_at moves forward");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archived_todos_stay_listed(service: InMemoryService) -> eyre::Result<()> {
    let kept = service.create_todo(CreateTodoRequest::new("Kept")).await?;
    let archived = service
        .create_todo(CreateTodoRequest::new("Archived"))
        .await?;
    service.archive_todo(archived).await?;

    let list = service.list_todos().await?;
    ensure!(list.count == 2, "expected two todos, found {}", list.count);
    let ids: HashSet<String> = list.todos.into_iter().map(|todo| todo.id).collect();
    ensure!(ids.contains(&kept.to_string()), "kept todo missing");
    ensure!(ids.contains(&archived.to_string()), "archived todo missing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_create_reports_validation_error(service: InMemoryService) -> eyre::Result<()> {
    let err = service
        .create_todo(CreateTodoRequest::new("x".repeat(101)))
        .await
        .expect_err("title too long");
    ensure!(err.is(ErrorKind::TitleTooLong), "unexpected {err:?}");
    ensure!(err.http_status() == 400, "validation maps to 400");
    ensure!(service.list_todos().await?.count == 0, "nothing stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_all_succeed(service: InMemoryService) -> eyre::Result<()> {
    let service = Arc::new(service);
    let handles: Vec<_> = (0..10)
        .map(|index| {
            let worker = Arc::clone(&service);
            tokio::spawn(async move {
                worker
                    .create_todo(CreateTodoRequest::new(format!("Concurrent {index}")))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await??);
    }

    let list = service.list_todos().await?;
    ensure!(ids.len() == 10, "expected 10 distinct ids, got {}", ids.len());
    ensure!(list.count == 10, "expected 10 listed todos, got {}", list.count);
    Ok(())
}
