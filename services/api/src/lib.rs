mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use holland_inventory::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
