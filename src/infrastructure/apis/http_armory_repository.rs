use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::domain::errors::DomainError;
use crate::domain::models::character::CharacterKey;
use crate::domain::models::config::Config;
use crate::domain::repositories::armory_repository::{
    ArmoryRepository, ArmoryReputation, ArmorySummary,
};

/// Product token sent with every armory request.
pub const ARMORY_USER_AGENT: &str = concat!("WowTracker/", env!("CARGO_PKG_VERSION"));

/// Armory client for the Blizzard character profile API.
pub struct HttpArmoryRepository {
    client: Client,
    base_url: Url,
    api_key: String,
    locale: String,
}

impl HttpArmoryRepository {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(ARMORY_USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.update_timeout.max(1)))
            .build()
            .map_err(|error| {
                DomainError::InternalError(format!("Failed to build HTTP client: {error}"))
            })?;

        let base_url = Url::parse(config.api_base_url.trim()).map_err(|error| {
            DomainError::InvalidData(format!(
                "Invalid API base URL {:?}: {error}",
                config.api_base_url
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::InvalidData(format!(
                "API base URL cannot be a base: {}",
                config.api_base_url
            )));
        }

        if config.api_key.trim().is_empty() {
            tracing::warn!("No API key configured; armory requests will likely be rejected");
        }

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.trim().to_string(),
            locale: config.locale.clone(),
        })
    }

    /// `{base}/wow/character/{realm}/{name}` with each segment percent-encoded
    fn character_url(&self, key: &CharacterKey) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["wow", "character", key.realm.as_str(), key.name.as_str()]);
        }
        url
    }

    async fn get_profile<T: DeserializeOwned>(
        &self,
        key: &CharacterKey,
        fields: Option<&str>,
    ) -> Result<T, DomainError> {
        let mut request = self
            .client
            .get(self.character_url(key))
            .header(ACCEPT, "application/json")
            .query(&[("locale", self.locale.as_str()), ("apikey", self.api_key.as_str())]);

        if let Some(fields) = fields {
            request = request.query(&[("fields", fields)]);
        }

        let response = request.send().await.map_err(|error| {
            DomainError::InternalError(format!("Armory request for {key} failed: {error}"))
        })?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(key, response).await);
        }

        response.json::<T>().await.map_err(|error| {
            DomainError::InternalError(format!("Failed to parse armory JSON for {key}: {error}"))
        })
    }

    async fn map_error_response(key: &CharacterKey, response: reqwest::Response) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body, "Armory request failed");

        match status {
            StatusCode::NOT_FOUND => {
                DomainError::NotFound(format!("{key} not found on the armory: {message}"))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                DomainError::AuthenticationError(message)
            }
            _ => DomainError::InternalError(format!(
                "Armory request for {key} failed with status {}: {message}",
                status.as_u16()
            )),
        }
    }
}

#[async_trait]
impl ArmoryRepository for HttpArmoryRepository {
    async fn fetch_summary(&self, key: &CharacterKey) -> Result<ArmorySummary, DomainError> {
        self.get_profile(key, None).await
    }

    async fn fetch_reputation(&self, key: &CharacterKey) -> Result<ArmoryReputation, DomainError> {
        self.get_profile(key, Some("reputation")).await
    }
}

fn extract_error_message(body: &str, default_message: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return default_message.to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for field in ["reason", "detail", "message"] {
            if let Some(message) = value
                .get(field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
            {
                return message.to_string();
            }
        }
    }

    body.to_string()
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;

    /// Answer a single request with a canned response; the thread yields the raw request head.
    fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut request: Vec<u8> = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    fn thrall() -> CharacterKey {
        CharacterKey::new("Area-52", "Thrall")
    }

    fn repository(base_url: &str) -> HttpArmoryRepository {
        HttpArmoryRepository::new(&Config {
            api_base_url: base_url.to_string(),
            api_key: "key".to_string(),
            ..Config::default()
        })
        .expect("build repository")
    }

    #[test]
    fn character_url_encodes_realm_and_name_segments() {
        let repository = repository("https://us.api.battle.net/");
        let url = repository.character_url(&CharacterKey::new("argent dawn", "ællanis"));

        assert_eq!(
            url.as_str(),
            "https://us.api.battle.net/wow/character/Argent%20Dawn/%C3%86llanis"
        );
    }

    #[test]
    fn character_url_keeps_base_path_prefix() {
        let repository = repository("http://127.0.0.1:8080/proxy");
        let url = repository.character_url(&CharacterKey::new("Area-52", "Thrall"));

        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/proxy/wow/character/Area-52/Thrall"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HttpArmoryRepository::new(&Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        });

        assert!(matches!(result, Err(DomainError::InvalidData(_))));
    }

    #[test]
    fn error_message_prefers_armory_reason() {
        assert_eq!(
            extract_error_message(r#"{"status":"nok","reason":"Character not found."}"#, "x"),
            "Character not found."
        );
        assert_eq!(extract_error_message("  ", "fallback"), "fallback");
        assert_eq!(extract_error_message("Bad Gateway", "fallback"), "Bad Gateway");
    }

    #[test]
    fn reputation_profile_parses_armory_payload() {
        let profile: ArmoryReputation = serde_json::from_str(
            r#"{
                "lastModified": 1500000000000,
                "name": "Thrall",
                "realm": "Area 52",
                "reputation": [
                    {"id": 1828, "name": "Highmountain Tribe", "standing": 7, "value": 0, "max": 0},
                    {"id": 1859, "name": "The Nightfallen", "standing": 3, "value": 0, "max": 3000}
                ]
            }"#,
        )
        .expect("parse profile");

        assert_eq!(profile.last_modified, 1_500_000_000_000);
        assert_eq!(profile.reputation.len(), 2);
        assert_eq!(profile.reputation[0].name, "Highmountain Tribe");
    }

    #[tokio::test]
    async fn summary_request_carries_query_and_user_agent() {
        let (base_url, server) =
            serve_once(200, r#"{"lastModified":1500000000000,"name":"Thrall"}"#);

        let summary = repository(&base_url)
            .fetch_summary(&thrall())
            .await
            .expect("fetch summary");
        let request = server.join().expect("server thread");

        assert_eq!(summary.last_modified, 1_500_000_000_000);
        assert!(request.starts_with("GET /wow/character/Area-52/Thrall?"));
        assert!(request.contains("locale=en_US"));
        assert!(request.contains("apikey=key"));
        assert!(!request.contains("fields="));
        let user_agent = format!("user-agent: {}", ARMORY_USER_AGENT).to_ascii_lowercase();
        assert!(request.to_ascii_lowercase().contains(&user_agent));
    }

    #[tokio::test]
    async fn reputation_request_asks_for_reputation_field() {
        let (base_url, server) = serve_once(
            200,
            r#"{"lastModified":1500000000000,
                "reputation":[{"id":1948,"standing":6,"value":5000}]}"#,
        );

        let profile = repository(&base_url)
            .fetch_reputation(&thrall())
            .await
            .expect("fetch reputation");
        let request = server.join().expect("server thread");

        assert_eq!(profile.reputation.len(), 1);
        assert_eq!(profile.reputation[0].id, 1948);
        assert!(request.contains("fields=reputation"));
    }

    #[tokio::test]
    async fn error_statuses_map_to_domain_errors() {
        let (base_url, server) =
            serve_once(404, r#"{"status":"nok","reason":"Character not found."}"#);
        let result = repository(&base_url).fetch_summary(&thrall()).await;
        server.join().expect("server thread");
        match result {
            Err(DomainError::NotFound(message)) => {
                assert!(message.contains("Character not found."))
            }
            other => panic!("expected NotFound, got {:?}", other),
        }

        for status in [401, 403] {
            let (base_url, server) =
                serve_once(status, r#"{"status":"nok","reason":"Invalid key"}"#);
            let result = repository(&base_url).fetch_reputation(&thrall()).await;
            server.join().expect("server thread");
            match result {
                Err(DomainError::AuthenticationError(message)) => {
                    assert_eq!(message, "Invalid key")
                }
                other => panic!("expected AuthenticationError for {status}, got {:?}", other),
            }
        }

        let (base_url, server) = serve_once(503, r#"{"status":"nok","reason":"Service busy"}"#);
        let result = repository(&base_url).fetch_summary(&thrall()).await;
        server.join().expect("server thread");
        match result {
            Err(DomainError::InternalError(message)) => {
                assert!(message.contains("503"));
                assert!(message.contains("Service busy"));
            }
            other => panic!("expected InternalError, got {:?}", other),
        }
    }
}
