//! Thin client over the portfolio API: one method per server operation, no
//! caching, no retry. 2xx bodies come back as decoded JSON; anything else is
//! surfaced as an error carrying the server's message.

use serde_json::Value;

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Projects,
    Experiences,
    Certifications,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Projects,
        EntityKind::Experiences,
        EntityKind::Certifications,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Projects => "/api/projects",
            EntityKind::Experiences => "/api/experiences",
            EntityKind::Certifications => "/api/certifications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Projects => "project",
            EntityKind::Experiences => "experience",
            EntityKind::Certifications => "certification",
        }
    }

    pub fn tab_name(&self) -> &'static str {
        match self {
            EntityKind::Projects => "projects",
            EntityKind::Experiences => "experiences",
            EntityKind::Certifications => "certifications",
        }
    }

    pub fn from_tab_name(name: &str) -> Option<EntityKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tab_name() == name.trim().to_lowercase())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

pub struct ApiClient {
    base_url: String,
    admin_token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, admin_token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token,
            http: reqwest::Client::new(),
        }
    }

    pub async fn list(&self, kind: EntityKind) -> Result<Vec<Value>, ApiError> {
        let resp = self.http.get(self.url(kind.path())).send().await?;
        let body = decode(resp).await?;
        Ok(body.as_array().cloned().unwrap_or_default())
    }

    pub async fn create(&self, kind: EntityKind, record: &Value) -> Result<Value, ApiError> {
        let req = self.http.post(self.url(kind.path())).json(record);
        decode(self.with_token(req).send().await?).await
    }

    pub async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        record: &Value,
    ) -> Result<Value, ApiError> {
        let req = self
            .http
            .put(self.url(&format!("{}/{}", kind.path(), id)))
            .json(record);
        decode(self.with_token(req).send().await?).await
    }

    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<Value, ApiError> {
        let req = self.http.delete(self.url(&format!("{}/{}", kind.path(), id)));
        decode(self.with_token(req).send().await?).await
    }

    pub async fn send_contact(&self, message: &Value) -> Result<Value, ApiError> {
        let req = self.http.post(self.url("/api/contact")).json(message);
        decode(req.send().await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.admin_token {
            Some(token) => req.header(ADMIN_TOKEN_HEADER, token),
            None => req,
        }
    }
}

async fn decode(resp: reqwest::Response) -> Result<Value, ApiError> {
    let status = resp.status();

    if status.is_success() {
        return Ok(resp.json().await?);
    }

    // Error bodies are {"message": ...}; fall back to the status line when
    // the body is not what we expect.
    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());

    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_paths_match_server_routes() {
        assert_eq!(EntityKind::Projects.path(), "/api/projects");
        assert_eq!(EntityKind::Experiences.path(), "/api/experiences");
        assert_eq!(EntityKind::Certifications.path(), "/api/certifications");
    }

    #[test]
    fn tab_names_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_tab_name(kind.tab_name()), Some(kind));
        }
        assert_eq!(EntityKind::from_tab_name("  Projects "), Some(EntityKind::Projects));
        assert_eq!(EntityKind::from_tab_name("nope"), None);
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5000/", None);
        assert_eq!(
            client.url(EntityKind::Projects.path()),
            "http://localhost:5000/api/projects"
        );
        assert_eq!(
            client.url(&format!("{}/{}", EntityKind::Projects.path(), "abc")),
            "http://localhost:5000/api/projects/abc"
        );
    }
}
