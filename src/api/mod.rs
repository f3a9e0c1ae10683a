use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(StatusCode),
}

#[derive(Deserialize, Debug)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct SearchRequest {
    pub user_word: String,
}

/// One similarity candidate as returned by the search endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SimilarWord {
    pub word: String,
    pub score: f64,
    pub reason: String,
}

/// Health report of the backend's vector store. The backend returns a sparse
/// object on error (`status` plus `message`), so everything else is optional.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DbStatus {
    pub status: String,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub points_count: Option<u64>,
    #[serde(default)]
    pub vectors_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DbStatus {
    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }
}

pub struct ApiHandler;

impl ApiHandler {
    /// Fetches the full quick-select vocabulary.
    pub async fn fetch_words(base_url: &str) -> Result<Vec<String>, ApiError> {
        let response = reqwest::get(format!("{base_url}/words")).await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: WordsResponse = response.json().await?;
        debug!("fetched {} words from {base_url}", body.words.len());
        Ok(body.words)
    }

    /// Submits a word and returns the scored candidates. The term is sent
    /// exactly as typed; callers are responsible for the empty-input guard.
    pub async fn search(base_url: &str, user_word: &str) -> Result<Vec<SimilarWord>, ApiError> {
        let response = reqwest::Client::new()
            .post(format!("{base_url}/search"))
            .json(&SearchRequest {
                user_word: user_word.to_string(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn db_status(base_url: &str) -> Result<DbStatus, ApiError> {
        let response = reqwest::get(format!("{base_url}/db-status")).await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_wire_shape() {
        let body = serde_json::to_string(&SearchRequest {
            user_word: "  cat ".to_string(),
        })
        .unwrap();
        // The raw input goes on the wire, whitespace included.
        assert_eq!(body, r#"{"user_word":"  cat "}"#);
    }

    #[test]
    fn words_response_decodes() {
        let parsed: WordsResponse = serde_json::from_str(r#"{"words":["cat","dog"]}"#).unwrap();
        assert_eq!(parsed.words, vec!["cat", "dog"]);
    }

    #[test]
    fn similar_words_decode_in_any_field_order() {
        let parsed: Vec<SimilarWord> = serde_json::from_str(
            r#"[{"word":"feline","reason":"synonym","score":0.9},
                {"score":0.42,"word":"lion","reason":"both are cats"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].word, "feline");
        assert_eq!(parsed[0].score, 0.9);
        assert_eq!(parsed[0].reason, "synonym");
        assert_eq!(parsed[1].word, "lion");
    }

    #[test]
    fn status_error_message_carries_the_code() {
        let err = ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn db_status_decodes_healthy_and_error_shapes() {
        let healthy: DbStatus = serde_json::from_str(
            r#"{"status":"connected","collection":"words_collection","points_count":25,"vectors_count":25}"#,
        )
        .unwrap();
        assert!(healthy.is_connected());
        assert_eq!(healthy.points_count, Some(25));

        let broken: DbStatus =
            serde_json::from_str(r#"{"status":"error","message":"no collection"}"#).unwrap();
        assert!(!broken.is_connected());
        assert_eq!(broken.message.as_deref(), Some("no collection"));
    }
}
