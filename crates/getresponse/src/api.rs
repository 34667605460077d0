use crate::error::{ApiError, ApiResult};
use crate::types::CustomField;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

pub const GETRESPONSE_API_BASE: &str = "https://api.getresponse.com/v3";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Anything that can list the custom fields of an account.
#[async_trait]
pub trait FieldSource: Send + Sync {
    async fn list_custom_fields(&self, api_key: &str) -> ApiResult<Vec<CustomField>>;
}

#[derive(Clone)]
pub struct GetResponseApi {
    client: Client,
    base_url: String,
}

impl Default for GetResponseApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GetResponseApi {
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("gr-fields/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client)
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: GETRESPONSE_API_BASE.to_string(),
        }
    }

    /// Points the client at another API root, e.g. a GetResponse MAX host.
    pub fn with_base_url(mut self, base_url: &str) -> ApiResult<Self> {
        Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn custom_fields_url(&self) -> String {
        format!("{}/custom-fields", self.base_url)
    }

    /// Single page only; the whole body is decoded as the field list.
    pub async fn list_custom_fields(&self, api_key: &str) -> ApiResult<Vec<CustomField>> {
        if api_key.is_empty() {
            return Err(ApiError::MissingCredential);
        }

        let response = self
            .client
            .get(self.custom_fields_url())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let fields: Vec<CustomField> = serde_json::from_str(&body)?;
        tracing::debug!(count = fields.len(), "Decoded custom fields");
        Ok(fields)
    }
}

#[async_trait]
impl FieldSource for GetResponseApi {
    async fn list_custom_fields(&self, api_key: &str) -> ApiResult<Vec<CustomField>> {
        GetResponseApi::list_custom_fields(self, api_key).await
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.expect("read request");
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{}/v3/", addr), handle)
    }

    fn api_for(base_url: &str) -> GetResponseApi {
        let client = Client::builder().no_proxy().build().expect("client");
        GetResponseApi::with_client(client)
            .with_base_url(base_url)
            .expect("valid base url")
    }

    #[tokio::test]
    async fn test_sends_bearer_and_content_type_headers() {
        let (base, server) = serve_once("200 OK", "[]").await;
        let api = api_for(&base);

        let fields = api.list_custom_fields("abc123").await.expect("fetch");
        let request = server.await.expect("server task").to_lowercase();

        assert!(fields.is_empty());
        assert!(request.starts_with("get /v3/custom-fields http/1.1"));
        assert!(request.contains("authorization: bearer abc123"));
        assert!(request.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_decodes_success_body_in_order() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"customFieldId":"1","name":"Foo","type":"text","fieldType":"text","valueType":"string"},{"customFieldId":"2","name":"Bar","type":"number","fieldType":"number","valueType":"number"}]"#,
        )
        .await;
        let api = api_for(&base);

        let fields = api.list_custom_fields("abc123").await.expect("fetch");
        let _ = server.await;

        assert_eq!(
            fields,
            vec![
                CustomField::new("1", "Foo", "text", "text", "string"),
                CustomField::new("2", "Bar", "number", "number", "number"),
            ]
        );
    }

    #[tokio::test]
    async fn test_maps_401_to_unauthorized() {
        let (base, server) = serve_once(
            "401 Unauthorized",
            r#"{"httpStatus":401,"code":1014,"codeDescription":"Problem during authentication process"}"#,
        )
        .await;
        let api = api_for(&base);

        let err = api.list_custom_fields("wrong").await.unwrap_err();
        let _ = server.await;

        assert!(matches!(err, ApiError::Unauthorized { status: 401 }));
    }

    #[tokio::test]
    async fn test_maps_server_error_to_status() {
        let (base, server) = serve_once("503 Service Unavailable", "maintenance").await;
        let api = api_for(&base);

        let err = api.list_custom_fields("abc123").await.unwrap_err();
        let _ = server.await;

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base, server) = serve_once("200 OK", r#"{"not":"an array"}"#).await;
        let api = api_for(&base);

        let err = api.list_custom_fields("abc123").await.unwrap_err();
        let _ = server.await;

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let api = api_for(&format!("http://{}/v3", addr));
        let err = api.list_custom_fields("abc123").await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_empty_key_never_hits_the_network() {
        let api = api_for("http://127.0.0.1:9/v3");
        let err = api.list_custom_fields("").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingCredential));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = api_for("https://api3.getresponse360.com/v3/");
        assert_eq!(api.base_url(), "https://api3.getresponse360.com/v3");
        assert_eq!(
            api.custom_fields_url(),
            "https://api3.getresponse360.com/v3/custom-fields"
        );
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let result = GetResponseApi::new().with_base_url("not a url");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_truncate_body_caps_length() {
        let long = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), MAX_ERROR_BODY_CHARS + 3);
        assert!(truncated.ends_with("..."));
    }
}
