//! Given steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_ddd::todo::{ports::TodoUseCase, services::CreateTodoRequest};

#[given(r#"a todo titled "{title}" with priority "{priority}""#)]
fn todo_exists(
    world: &mut TodoWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let request = CreateTodoRequest::new(title).with_priority(priority);
    let id = run_async(world.service.create_todo(request)).wrap_err("create scenario todo")?;
    world.current_id = Some(id);
    Ok(())
}

#[given("the todo has been completed")]
fn todo_has_been_completed(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    run_async(world.service.complete_todo(id)).wrap_err("complete scenario todo")?;
    Ok(())
}

#[given("the todo has been archived")]
fn todo_has_been_archived(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    run_async(world.service.archive_todo(id)).wrap_err("archive scenario todo")?;
    Ok(())
}
