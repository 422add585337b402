use tracing::debug;

pub const HEALTH_PATH: &str = "/v1/health";
pub const HEALTHY: &str = "Healthy";

/// Handler for GET /v1/health
pub async fn health_handler() -> &'static str {
    debug!("Health check requested");
    HEALTHY
}
