use crate::{config::Config, error, info, server};

pub async fn serve(config: Config) {
    info!(
        "Starting with {:?} store, guarding {}",
        config.store,
        config.auth_required_paths.join(", ")
    );

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped. Err: {}", e);
    }
}
