//! Then steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::then;
use todo_ddd::todo::{domain::TodoStatus, ports::TodoUseCase, services::TodoResponse};

fn current_todo(world: &TodoWorld) -> Result<TodoResponse, eyre::Report> {
    let id = world.current_id()?;
    Ok(run_async(world.service.get_todo(id))?)
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TodoWorld) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err:?}")),
        None => Err(eyre::eyre!("no operation was attempted")),
    }
}

#[then("the operation fails with error code {code:u16}")]
fn operation_fails_with(world: &TodoWorld, code: u16) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Err(err)) if err.code() == code => Ok(()),
        Some(other) => Err(eyre::eyre!("expected error code {code}, got {other:?}")),
        None => Err(eyre::eyre!("no operation was attempted")),
    }
}

#[then(r#"the todo status is "{status}""#)]
fn todo_status_is(world: &TodoWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TodoStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let todo = current_todo(world)?;
    if todo.status != expected {
        return Err(eyre::eyre!("expected status {expected}, found {}", todo.status));
    }
    Ok(())
}

#[then("the todo has a completion time")]
fn todo_has_completion_time(world: &TodoWorld) -> Result<(), eyre::Report> {
    let todo = current_todo(world)?;
    eyre::ensure!(todo.completed_at.is_some(), "completion time missing");
    Ok(())
}

#[then("the todo has no completion time")]
fn todo_has_no_completion_time(world: &TodoWorld) -> Result<(), eyre::Report> {
    let todo = current_todo(world)?;
    eyre::ensure!(
        todo.completed_at.is_none(),
        "unexpected completion time {:?}",
        todo.completed_at
    );
    Ok(())
}

#[then(r#"the todo title is "{title}""#)]
fn todo_title_is(world: &TodoWorld, title: String) -> Result<(), eyre::Report> {
    let todo = current_todo(world)?;
    eyre::ensure!(
        todo.title == title,
        "expected title {title}, found {}",
        todo.title
    );
    Ok(())
}

#[then("no todos are stored")]
fn no_todos_are_stored(world: &TodoWorld) -> Result<(), eyre::Report> {
    let list = run_async(world.service.list_todos())?;
    eyre::ensure!(list.count == 0, "expected no todos, found {}", list.count);
    Ok(())
}
