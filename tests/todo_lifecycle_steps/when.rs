//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::when;
use todo_ddd::todo::{
    ports::TodoUseCase,
    services::{CreateTodoRequest, UpdateTodoRequest},
};

#[when("the todo is completed")]
fn complete_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    world.last_result = Some(run_async(world.service.complete_todo(id)));
    Ok(())
}

#[when("the todo is archived")]
fn archive_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    world.last_result = Some(run_async(world.service.archive_todo(id)));
    Ok(())
}

#[when(r#"a todo titled "{title}" is created with priority "{priority}""#)]
fn create_todo(world: &mut TodoWorld, title: String, priority: String) {
    let request = CreateTodoRequest::new(title).with_priority(priority);
    let result = run_async(world.service.create_todo(request));
    if let Ok(id) = result {
        world.current_id = Some(id);
    }
    world.last_result = Some(result.map(|_| ()));
}

#[when("the todo is updated with a blank title")]
fn update_with_blank_title(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let request = UpdateTodoRequest::new(id).with_title("");
    world.last_result = Some(run_async(world.service.update_todo(request)));
    Ok(())
}

#[when("the todo title is updated to {length:usize} characters")]
fn update_with_long_title(world: &mut TodoWorld, length: usize) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let request = UpdateTodoRequest::new(id).with_title("t".repeat(length));
    world.last_result = Some(run_async(world.service.update_todo(request)));
    Ok(())
}
