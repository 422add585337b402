mod router;
pub mod server;
mod state;
pub mod tracing;

pub use router::main_router;
pub use state::AppState;

use crate::adapter::AlfrescoClient;
use crate::config;
use crate::error::ServiceError;

/// Application entry point. Handles subcommands, then initializes tracing,
/// configuration, and starts the server.
pub async fn run() -> Result<(), ServiceError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if args.first().map(String::as_str) == Some("healthcheck") {
        let port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok());
        let result = match port {
            Some(port) => crate::healthcheck_with_port(port).await,
            None => crate::healthcheck().await,
        };
        match result {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!("Loaded settings");

    if let Some(command) = args.first().map(String::as_str) {
        if command == "create-html" || command == "create-txt" {
            let Some(name) = args.get(1) else {
                return Err(ServiceError::Config(format!(
                    "Usage: {command} <file name>"
                )));
            };
            return create_file(&settings, command, name).await;
        }
    }

    let app_state = AppState::from_settings(&settings);
    ::tracing::info!(
        "Registered {} event handler(s)",
        app_state.dispatcher.handler_count()
    );

    let app = router::main_router(app_state);
    server::serve(app, settings.http_port).await
}

/// Create a node in Alfresco so the repository emits a creation event.
async fn create_file(
    settings: &config::Settings,
    command: &str,
    name: &str,
) -> Result<(), ServiceError> {
    let client = AlfrescoClient::new(settings.alfresco_config())
        .map_err(|e| ServiceError::Config(format!("{e:#}")))?;

    let created = if command == "create-html" {
        client.create_html_file(name).await
    } else {
        client.create_txt_file(name).await
    };

    match created {
        Ok(node_name) => {
            ::tracing::info!("Created node {node_name}");
            Ok(())
        }
        Err(e) => Err(ServiceError::Client(format!("{e:#}"))),
    }
}
