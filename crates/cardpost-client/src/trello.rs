use crate::api::CardApi;
use async_trait::async_trait;
use cardpost_core::{CardPostError, CardPostResult, TrelloConfig};
use cardpost_domain::{CreateCardRequest, CreatedCard};
use reqwest::StatusCode;

/// Client for Trello's `POST /cards` endpoint.
///
/// Credentials and the target list travel as query parameters alongside the
/// card fields; the request has no body.
pub struct TrelloClient {
    config: TrelloConfig,
    client: reqwest::Client,
}

impl TrelloClient {
    pub fn new(config: TrelloConfig) -> CardPostResult<Self> {
        let missing = config.missing_credentials();
        if !missing.is_empty() {
            tracing::warn!(
                "Trello configuration is missing {}; requests will be rejected by the API",
                missing.join(", ")
            );
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CardPostError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn cards_url(&self) -> String {
        format!("{}/cards", self.config.effective_api_base_url())
    }

    fn auth_params(&self) -> [(&'static str, &str); 3] {
        [
            ("key", self.config.api_key.as_str()),
            ("token", self.config.api_token.as_str()),
            ("idList", self.config.list_id.as_str()),
        ]
    }
}

#[async_trait]
impl CardApi for TrelloClient {
    async fn create_card(&self, request: &CreateCardRequest) -> CardPostResult<CreatedCard> {
        let url = self.cards_url();
        tracing::debug!("POST {} (list {})", url, self.config.list_id);

        let response = self
            .client
            .post(&url)
            .query(&self.auth_params())
            .query(&request.query_params())
            .send()
            .await
            // The URL carries the API key and token; keep them out of messages.
            .map_err(|e| CardPostError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CardPostError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            let detail = error_detail(status, &body);
            tracing::warn!("Create card rejected with {}: {}", status, detail);
            return Err(CardPostError::Remote {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_str::<CreatedCard>(&body).map_err(|e| CardPostError::Remote {
            status: status.as_u16(),
            detail: format!("unexpected response body: {}", e),
        })
    }
}

/// Picks the most useful text out of an error response: a JSON `message`
/// (or `error`) string, else the raw body, else the status line.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(text)) = fields.get(key) {
                if !text.trim().is_empty() {
                    return text.clone();
                }
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_json_message() {
        let detail = error_detail(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Unauthorized","error":"ignored"}"#,
        );
        assert_eq!(detail, "Unauthorized");
    }

    #[test]
    fn test_error_detail_falls_back_to_error_key() {
        let detail = error_detail(StatusCode::BAD_REQUEST, r#"{"error":"invalid list id"}"#);
        assert_eq!(detail, "invalid list id");
    }

    #[test]
    fn test_error_detail_uses_plain_text_body() {
        assert_eq!(error_detail(StatusCode::UNAUTHORIZED, "invalid key\n"), "invalid key");
    }

    #[test]
    fn test_error_detail_without_body_uses_status() {
        assert_eq!(
            error_detail(StatusCode::SERVICE_UNAVAILABLE, ""),
            "HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn test_cards_url_trims_trailing_slash() {
        let client = TrelloClient::new(
            TrelloConfig::new("k", "t", "l").with_api_base_url("http://localhost:8080/1/"),
        )
        .unwrap();
        assert_eq!(client.cards_url(), "http://localhost:8080/1/cards");
    }
}
