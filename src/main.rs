use dotenvy::dotenv;
use roster_config::ServerConfig;
use tracing::{error, info, warn};
use vano_roster::router::init_router;
use vano_roster::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    roster_observability::init_tracing(env!("CARGO_CRATE_NAME"));

    let state = match init_app_state() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to initialize application state");
            std::process::exit(1);
        }
    };

    if state.gemini_config.api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; requests must send the x-gemini-api-key header");
    }

    let server_config = ServerConfig::from_env();
    let app = init_router(state);

    let listener = match tokio::net::TcpListener::bind(&server_config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %server_config.addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %server_config.addr, "🚀 Server running");
    info!("📚 Swagger UI available at /swagger-ui");
    info!("📖 Scalar UI available at /scalar");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
