use std::env;
use std::fs;
use std::time::Duration;

use crate::adapter::AlfrescoConfig;
use crate::adapter::html_content::DEFAULT_MIME_TYPE;
use crate::error::ServiceError;

const DEFAULT_HTTP_PORT: u16 = 9600;
const DEFAULT_ALFRESCO_URL: &str = "http://localhost:8080/alfresco";
const DEFAULT_ALFRESCO_USER: &str = "admin";
const DEFAULT_ALFRESCO_PASSWORD: &str = "admin";

#[derive(Debug)]
pub struct Settings {
    /// Event ingress + health port
    pub http_port: u16,
    /// Mime type the content-created handler reacts to
    pub content_mime_type: String,
    pub alfresco_url: String,
    pub alfresco_user: String,
    pub alfresco_password: String,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_port(self.http_port)?;
        validate_mime_type(&self.content_mime_type)?;
        validate_url(&self.alfresco_url)?;
        Ok(())
    }

    pub fn alfresco_config(&self) -> AlfrescoConfig {
        AlfrescoConfig {
            base_url: self.alfresco_url.clone(),
            user: self.alfresco_user.clone(),
            password: self.alfresco_password.clone(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ServiceError> {
    if port == 0 {
        return Err(ServiceError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_mime_type(mime_type: &str) -> Result<(), ServiceError> {
    if mime_type.trim().is_empty() {
        return Err(ServiceError::Config("Mime type cannot be empty".into()));
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<(), ServiceError> {
    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| ServiceError::Config(format!("Invalid Alfresco URL {url}: {e}")))
}

/// Read a value from environment variable, with support for _FILE suffix (Docker Secrets)
fn get_env_or_file(env_name: &str) -> Result<Option<String>, ServiceError> {
    let file_env = format!("{env_name}_FILE");
    if let Ok(file_path) = env::var(&file_env) {
        return fs::read_to_string(&file_path)
            .map(|content| Some(content.trim().to_string()))
            .map_err(|e| ServiceError::Config(format!("Failed to read {file_env}: {e}")));
    }

    Ok(env::var(env_name).ok())
}

pub fn get_configuration() -> Result<Settings, ServiceError> {
    let http_port = match env::var("HTTP_PORT") {
        Ok(port) => port
            .parse::<u16>()
            .map_err(|e| ServiceError::Config(format!("Invalid HTTP_PORT {port}: {e}")))?,
        Err(_) => DEFAULT_HTTP_PORT,
    };
    let content_mime_type =
        env::var("APP_CONTENT_MIME_TYPE").unwrap_or_else(|_| DEFAULT_MIME_TYPE.to_string());
    let alfresco_url =
        env::var("APP_ALFRESCO_URL").unwrap_or_else(|_| DEFAULT_ALFRESCO_URL.to_string());
    let alfresco_user =
        env::var("APP_ALFRESCO_USER").unwrap_or_else(|_| DEFAULT_ALFRESCO_USER.to_string());
    let alfresco_password = get_env_or_file("APP_ALFRESCO_PASSWORD")?
        .unwrap_or_else(|| DEFAULT_ALFRESCO_PASSWORD.to_string());

    let settings = Settings {
        http_port,
        content_mime_type,
        alfresco_url,
        alfresco_user,
        alfresco_password,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
