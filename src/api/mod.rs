//! Remote Table Client
//!
//! PostgREST calls against the hosted `cats` and `bookings` tables,
//! organized by table.

mod bookings;
mod cats;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::config::BackendConfig;
use crate::models::{Booking, Cat, NewBooking};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Адрес сервера каталога не настроен")]
    NotConfigured,
    #[error("Ошибка сети: {0}")]
    Network(String),
    #[error("Ошибка сервера ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// The operations the page needs from the hosted backend
#[async_trait(?Send)]
pub trait CatalogBackend {
    /// All cats, wholesale
    async fn list_cats(&self) -> Result<Vec<Cat>, ApiError>;

    /// Existing booking for this cat and email, if any
    async fn find_booking(&self, cat_id: u32, email: &str) -> Result<Option<Booking>, ApiError>;

    async fn insert_booking(&self, booking: &NewBooking) -> Result<(), ApiError>;
}

/// Supabase REST (PostgREST) client
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    config: BackendConfig,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    fn request(&self, method: Method, table: &str) -> Result<RequestBuilder, ApiError> {
        if !self.config.is_configured() {
            return Err(ApiError::NotConfigured);
        }
        Ok(self
            .http
            .request(method, self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key)))
    }
}

#[async_trait(?Send)]
impl CatalogBackend for SupabaseClient {
    async fn list_cats(&self) -> Result<Vec<Cat>, ApiError> {
        self.fetch_cats().await
    }

    async fn find_booking(&self, cat_id: u32, email: &str) -> Result<Option<Booking>, ApiError> {
        self.select_booking(cat_id, email).await
    }

    async fn insert_booking(&self, booking: &NewBooking) -> Result<(), ApiError> {
        self.create_booking(booking).await
    }
}

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// Pass 2xx responses through, turn the rest into `ApiError::Api`
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(decode_error(status.as_u16(), &body))
}

fn decode_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<PostgrestError>(body) {
        Ok(PostgrestError { message, details: Some(details) }) if !details.is_empty() => {
            format!("{} ({})", message, details)
        }
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => "пустой ответ".to_string(),
        Err(_) => body.trim().to_string(),
    };
    ApiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> SupabaseClient {
        SupabaseClient::new(BackendConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: "anon".to_string(),
        })
    }

    #[test]
    fn test_table_url() {
        assert_eq!(configured().table_url("cats"), "https://demo.supabase.co/rest/v1/cats");
    }

    #[test]
    fn test_decode_postgrest_error() {
        let body = r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.bookings\" does not exist"}"#;
        assert_eq!(
            decode_error(404, body),
            ApiError::Api {
                status: 404,
                message: "relation \"public.bookings\" does not exist".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_error_with_details() {
        let body = r#"{"message":"duplicate key","details":"Key (id)=(1) already exists."}"#;
        let ApiError::Api { message, .. } = decode_error(409, body) else {
            panic!("expected Api error");
        };
        assert_eq!(message, "duplicate key (Key (id)=(1) already exists.)");
    }

    #[test]
    fn test_decode_non_json_error() {
        assert_eq!(
            decode_error(502, " Bad Gateway\n"),
            ApiError::Api { status: 502, message: "Bad Gateway".to_string() }
        );
        assert_eq!(
            decode_error(500, ""),
            ApiError::Api { status: 500, message: "пустой ответ".to_string() }
        );
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_request() {
        let client = SupabaseClient::new(BackendConfig::default());
        assert_eq!(client.list_cats().await, Err(ApiError::NotConfigured));
        assert_eq!(client.find_booking(1, "a@b.co").await, Err(ApiError::NotConfigured));
    }
}
