mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
mod server;
pub mod store;
pub mod telemetry;

pub use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
