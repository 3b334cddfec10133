use employee_manager::app::create_app;
use employee_manager::app::employee::handler::AppState;
use employee_manager::app::employee::view::PageRenderer;
use employee_manager::config::load_config;
use employee_manager::infrastructure::logger::Logger;
use employee_manager::{EmployeeManager, RestEmployeeApi};
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    match &config.source {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => info!("no config file found, using defaults"),
    }

    let api = RestEmployeeApi::new(&config.backend.base_url, config.backend.timeout())?;
    info!(backend = api.base_url(), "employee backend configured");

    let mut manager = EmployeeManager::new(Arc::new(api));
    manager.mount().await;

    let state = AppState::new(manager, PageRenderer::new()?);
    let app = create_app(state, config.http.request_timeout());

    let address = config.http.address();
    let listener = TcpListener::bind(&address).await?;
    info!("🚀 Employee manager running at http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
