//! Native catalog client (reqwest)
//!
//! The browser build performs requests through `fetch`; this client is for
//! native consumers such as the CLI. Both feed the same reducer.

use std::time::Duration;

use crate::decode::decode_games_text;
use crate::error::FetchError;
use crate::game::Game;
use crate::query::FetchRequest;

pub struct CatalogClient {
    client: reqwest::Client,
}

impl CatalogClient {
    const USER_AGENT: &'static str = concat!("Freeplay/", env!("CARGO_PKG_VERSION"));

    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    /// Run one request issued by the reducer
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Game>, FetchError> {
        tracing::debug!(seq = request.seq, url = %request.url, "GET");

        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_games_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with a canned HTTP/1.1 response
    async fn serve_once(status: &'static str, body: &'static str) -> FetchRequest {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        FetchRequest {
            seq: 1,
            url: format!("http://{}/api/games", addr),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let request = serve_once("500 Internal Server Error", "{}").await;
        let client = CatalogClient::new().unwrap();
        let err = client.fetch(&request).await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn test_object_body_is_unexpected_shape() {
        let request = serve_once("200 OK", r#"{"status":"ok"}"#).await;
        let client = CatalogClient::new().unwrap();
        let err = client.fetch(&request).await.unwrap_err();
        assert_eq!(err, FetchError::UnexpectedShape { kind: "object", message: None });
    }

    #[tokio::test]
    async fn test_array_body_decodes() {
        let request = serve_once(
            "200 OK",
            r#"[{"id":540,"title":"Overwatch 2","short_description":"Hero shooter","thumbnail":"https://www.freetogame.com/g/540/thumbnail.jpg","platform":"PC (Windows)","game_url":"https://www.freetogame.com/open/overwatch-2"}]"#,
        )
        .await;
        let client = CatalogClient::new().unwrap();
        let games = client.fetch(&request).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, 540);
        assert_eq!(games[0].title, "Overwatch 2");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = CatalogClient::new().unwrap();
        let request = FetchRequest {
            seq: 1,
            url: "http://127.0.0.1:9/api/games".to_string(),
        };
        let err = client.fetch(&request).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "{:?}", err);
    }
}
