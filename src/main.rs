mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let mission_files = startup::prepare_mission_files(&config).await?;

    let state = AppState::new(
        db,
        mission_files,
        config.parse_mode,
        config.transition_policy,
    );

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, router::router().with_state(state)).await?;

    Ok(())
}
