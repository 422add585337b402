//! Minimal Alfresco REST API client.
//!
//! Only what is needed to provoke repository events: obtain a ticket, then
//! create a content node in the shared folder.

use std::time::Duration;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const AUTH_PATH: &str = "api/-default-/public/authentication/versions/1/tickets";
const FILE_CREATION_PATH: &str = "api/-default-/public/alfresco/versions/1/nodes/-shared-/children";

#[derive(Debug, Clone)]
pub struct AlfrescoConfig {
    /// Base URL including the web application context, e.g. `http://localhost:8080/alfresco`.
    pub base_url: String,
    pub user: String,
    pub password: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct EntryResponse {
    entry: Entry,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AlfrescoClient {
    client: Client,
    base_url: Url,
    user: String,
    password: String,
}

impl AlfrescoClient {
    /// # Errors
    /// Fails when the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: AlfrescoConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build Alfresco HTTP client")?;

        // Url::join drops the last segment unless the base ends with '/'
        let mut base = config.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).context("invalid Alfresco base URL")?;

        Ok(Self {
            client,
            base_url,
            user: config.user,
            password: config.password,
        })
    }

    /// Obtain an authentication ticket for the configured user.
    pub async fn authenticate(&self) -> Result<String> {
        let url = self
            .base_url
            .join(AUTH_PATH)
            .context("failed to build tickets URL")?;

        let response = self
            .client
            .post(url)
            .json(&json!({ "userId": self.user, "password": self.password }))
            .send()
            .await
            .context("Alfresco ticket request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to obtain Alfresco auth ticket: {status} {body}");
        }

        let body: EntryResponse = response
            .json()
            .await
            .context("failed to deserialize Alfresco ticket response")?;
        body.entry
            .id
            .context("Alfresco ticket response has no entry.id")
    }

    pub async fn create_html_file(&self, name: &str) -> Result<String> {
        self.create_file(name, "Test HTML File").await
    }

    pub async fn create_txt_file(&self, name: &str) -> Result<String> {
        self.create_file(name, "Test TXT File").await
    }

    /// Create a `cm:content` node in the shared folder and return its name.
    pub async fn create_file(&self, name: &str, title: &str) -> Result<String> {
        let ticket = self.authenticate().await?;
        let url = self
            .base_url
            .join(FILE_CREATION_PATH)
            .context("failed to build node creation URL")?;

        debug!(name, "creating node in Alfresco");
        let response = self
            .client
            .post(url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", encode_ticket(&ticket)),
            )
            .json(&json!({
                "name": name,
                "nodeType": "cm:content",
                "properties": { "cm:title": title }
            }))
            .send()
            .await
            .context("Alfresco node creation request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to create file in Alfresco: {status} {body}");
        }

        let body: EntryResponse = response
            .json()
            .await
            .context("failed to deserialize Alfresco node response")?;
        body.entry
            .name
            .context("Alfresco node response has no entry.name")
    }
}

fn encode_ticket(ticket: &str) -> String {
    STANDARD.encode(ticket.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TICKET: &str = "TICKET_4c6f5e2f3c1e8a1b2d9e0f7a6b5c4d3e2f1a0b9c";

    fn test_config(base_url: String) -> AlfrescoConfig {
        AlfrescoConfig {
            base_url: format!("{base_url}/alfresco"),
            user: "admin".to_string(),
            password: "admin".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    async fn mount_ticket(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(
                "/alfresco/api/-default-/public/authentication/versions/1/tickets",
            ))
            .and(body_json(json!({ "userId": "admin", "password": "admin" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "entry": { "id": TICKET, "userId": "admin" } })),
            )
            .mount(server)
            .await;
    }

    #[test]
    fn encode_ticket_is_plain_base64() {
        assert_eq!(encode_ticket("TICKET_abc"), "VElDS0VUX2FiYw==");
    }

    #[tokio::test]
    async fn authenticate_returns_ticket() {
        let server = MockServer::start().await;
        mount_ticket(&server).await;

        let client = AlfrescoClient::new(test_config(server.uri())).unwrap();
        assert_eq!(client.authenticate().await.unwrap(), TICKET);
    }

    #[tokio::test]
    async fn authenticate_fails_on_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(
                "/alfresco/api/-default-/public/authentication/versions/1/tickets",
            ))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = AlfrescoClient::new(test_config(server.uri())).unwrap();
        let err = client.authenticate().await.unwrap_err();
        assert!(err.to_string().contains("Failed to obtain Alfresco auth ticket"));
    }

    #[tokio::test]
    async fn create_html_file_sends_ticket_and_returns_name() {
        let server = MockServer::start().await;
        mount_ticket(&server).await;
        Mock::given(method("POST"))
            .and(path(
                "/alfresco/api/-default-/public/alfresco/versions/1/nodes/-shared-/children",
            ))
            .and(header(
                "authorization",
                format!("Basic {}", encode_ticket(TICKET)).as_str(),
            ))
            .and(body_json(json!({
                "name": "test.html",
                "nodeType": "cm:content",
                "properties": { "cm:title": "Test HTML File" }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "entry": { "id": "d71dd823", "name": "test.html", "nodeType": "cm:content" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AlfrescoClient::new(test_config(server.uri())).unwrap();
        assert_eq!(client.create_html_file("test.html").await.unwrap(), "test.html");
    }

    #[tokio::test]
    async fn create_txt_file_fails_on_conflict() {
        let server = MockServer::start().await;
        mount_ticket(&server).await;
        Mock::given(method("POST"))
            .and(path(
                "/alfresco/api/-default-/public/alfresco/versions/1/nodes/-shared-/children",
            ))
            .respond_with(ResponseTemplate::new(409).set_body_string("duplicate name"))
            .mount(&server)
            .await;

        let client = AlfrescoClient::new(test_config(server.uri())).unwrap();
        let err = client.create_txt_file("test.txt").await.unwrap_err();
        assert!(err.to_string().contains("Failed to create file in Alfresco"));
        assert!(err.to_string().contains("409"));
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let config = AlfrescoConfig {
            base_url: "not a url".to_string(),
            user: "admin".to_string(),
            password: "admin".to_string(),
            timeout: Duration::from_secs(1),
        };
        assert!(AlfrescoClient::new(config).is_err());
    }
}
