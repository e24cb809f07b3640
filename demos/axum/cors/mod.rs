use std::sync::Arc;

use cors_policy_rs::{ConfigError, Cors, CorsConfig};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    /// Kept as supplied so the index route can report it.
    pub config: Arc<CorsConfig>,
}

pub fn build_state(config: CorsConfig) -> Result<AppState, ConfigError> {
    let cors = Arc::new(Cors::new(config.clone())?);

    Ok(AppState {
        cors,
        config: Arc::new(config),
    })
}

pub mod middleware;
