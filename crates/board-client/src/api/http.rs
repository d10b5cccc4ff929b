use async_trait::async_trait;
use board_core::Post;
use board_shared::{ErrorBody, PostTextRequest};
use reqwest::{Client, Response, StatusCode, Url};

use super::{ApiError, BoardApi};

/// Talks to the board API server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: Client,
    base_url: Url,
}

impl HttpBoardApi {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:4000`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Build `<base>/api/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(rejection(status, &body))
    }

    async fn read_post(response: Response) -> Result<Post, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Turn an error response into [`ApiError::Rejected`], preferring the `{error}` body.
fn rejection(status: StatusCode, body: &str) -> ApiError {
    let message = error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_lowercase()
    });
    ApiError::Rejected {
        status: status.as_u16(),
        message,
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.send(self.client.get(self.endpoint(&["posts"]))).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, text: &str) -> Result<Post, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["posts"]))
            .json(&PostTextRequest::new(text));
        Self::read_post(self.send(request).await?).await
    }

    async fn update(&self, id: &str, text: &str) -> Result<Post, ApiError> {
        let request = self
            .client
            .put(self.endpoint(&["posts", id]))
            .json(&PostTextRequest::new(text));
        Self::read_post(self.send(request).await?).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.endpoint(&["posts", id])))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let api = HttpBoardApi::new("http://localhost:4000").unwrap();
        assert_eq!(
            api.endpoint(&["posts"]).as_str(),
            "http://localhost:4000/api/posts"
        );

        let api = HttpBoardApi::new("http://example.com/board/").unwrap();
        assert_eq!(
            api.endpoint(&["posts", "a b/c"]).as_str(),
            "http://example.com/board/api/posts/a%20b%2Fc"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpBoardApi::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpBoardApi::new("mailto:someone@example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejection_prefers_error_body() {
        let err = rejection(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#);
        assert!(matches!(
            err,
            ApiError::Rejected { status: 404, ref message } if message == "not found"
        ));

        let err = rejection(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(err.user_message(), "bad gateway");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let api = HttpBoardApi::new("http://127.0.0.1:1").unwrap();
        let err = api.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.user_message(), "could not reach the board server");
    }
}
