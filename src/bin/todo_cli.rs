//! Interactive todo shell over the in-memory backend.
//!
//! Todos live only for the lifetime of the process.

use mockable::DefaultClock;
use std::io;
use std::sync::Arc;
use todo_ddd::telemetry::init_tracing;
use todo_ddd::todo::{
    adapters::{cli::TodoCli, memory::InMemoryTodoRepository},
    services::TodoService,
    validation::DefaultTodoValidator,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    init_tracing();
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultTodoValidator::new()),
        Arc::new(DefaultClock),
    );
    let cli = TodoCli::new(Arc::new(service));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli.run(stdin.lock(), &mut stdout).await
}
