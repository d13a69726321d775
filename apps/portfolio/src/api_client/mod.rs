//! API client: the single point of entry for calls to the portfolio API.
//!
//! Every payload goes through `crate::normalize` before it leaves this module,
//! so callers only ever see the canonical model types. Requests are issued
//! once: no retry, no de-duplication.

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{truncate_body, ApiError};
use crate::models::{Article, ArticleListItem, Profile};
use crate::normalize::{normalize_article, normalize_article_list, normalize_profile};

#[derive(Debug, Serialize)]
struct CvRequest<'a> {
    token: &'a str,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            base_url: config.api_base_url.clone(),
        })
    }

    /// `GET {base}/api/profile`, deep-normalized.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let raw = self.get_json("Profile", self.endpoint(&["api", "profile"])).await?;
        let profile = normalize_profile(&raw);
        debug!(
            "Profile normalized: {} experience entries",
            profile.experience.len()
        );
        Ok(profile)
    }

    /// `GET {base}/api/articles`, accepting any of the list envelopes.
    pub async fn get_articles(&self) -> Result<Vec<ArticleListItem>, ApiError> {
        let raw = self.get_json("Articles", self.endpoint(&["api", "articles"])).await?;
        let articles = normalize_article_list(&raw);
        debug!("Articles normalized: {} items", articles.len());
        Ok(articles)
    }

    /// `GET {base}/api/articles/{slug}` with the slug percent-encoded as a
    /// single path segment.
    pub async fn get_article(&self, slug: &str) -> Result<Article, ApiError> {
        // The URL parser would drop or resolve these, hitting another endpoint.
        if matches!(slug, "" | "." | "..") {
            return Err(ApiError::InvalidSlug {
                slug: slug.to_string(),
            });
        }
        let raw = self
            .get_json("Article", self.endpoint(&["api", "articles", slug]))
            .await?;
        Ok(normalize_article(&raw))
    }

    /// `POST {base}/api/cv` with a bot-verification token. Returns the PDF bytes.
    pub async fn download_cv(&self, token: &str) -> Result<Bytes, ApiError> {
        let url = self.endpoint(&["api", "cv"]);
        debug!("POST {url}");
        let response = self
            .client
            .post(url.clone())
            .json(&CvRequest { token })
            .send()
            .await
            .map_err(|e| network_error("CV", &url, e))?;
        let body = read_success("CV", &url, response).await?;
        debug!("CV downloaded: {} bytes", body.len());
        Ok(body)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Config rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, resource: &'static str, url: Url) -> Result<Value, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| network_error(resource, &url, e))?;
        let body = read_success(resource, &url, response).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            resource,
            url: url.to_string(),
            source,
        })
    }
}

fn network_error(resource: &'static str, url: &Url, e: reqwest::Error) -> ApiError {
    warn!("{resource} request to {url} failed: {e}");
    ApiError::Network {
        resource,
        url: url.to_string(),
        message: e.to_string(),
    }
}

/// Body of a 2xx response, or a `Status` error carrying the truncated body.
async fn read_success(
    resource: &'static str,
    url: &Url,
    response: Response,
) -> Result<Bytes, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{resource} request to {url} returned {status}");
        return Err(ApiError::Status {
            resource,
            url: url.to_string(),
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }
    response
        .bytes()
        .await
        .map_err(|e| network_error(resource, url, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::StatusCode,
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base: &str) -> ApiClient {
        ApiClient::new(&Config::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_and_encodes() {
        let client = client_for("https://api.example.com/portfolio/");
        assert_eq!(
            client.endpoint(&["api", "profile"]).as_str(),
            "https://api.example.com/portfolio/api/profile"
        );
        assert_eq!(
            client.endpoint(&["api", "articles", "a b/c?d"]).as_str(),
            "https://api.example.com/portfolio/api/articles/a%20b%2Fc%3Fd"
        );

        let bare = client_for("https://api.example.com");
        assert_eq!(
            bare.endpoint(&["api", "cv"]).as_str(),
            "https://api.example.com/api/cv"
        );
    }

    #[tokio::test]
    async fn test_get_profile_normalizes_legacy_jobs() {
        let router = Router::new().route(
            "/api/profile",
            get(|| async {
                Json(json!({
                    "name": "Ada",
                    "links": { "github": "https://github.com/ada" },
                    "experience": [{ "id": "j1", "dateStart": "2020-01", "pills": ["Go"], "details": ["Built X"] }]
                }))
            }),
        );
        let client = client_for(&serve(router).await);

        let profile = client.get_profile().await.unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.experience[0].projects[0].id, "j1-main");
        assert_eq!(profile.experience[0].projects[0].highlights, vec!["Built X"]);
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let router = Router::new().route(
            "/portfolio/api/articles",
            get(|| async { Json(json!({ "value": [{ "slug": "a", "tags": ["rust", 1] }] })) }),
        );
        let base = format!("{}/portfolio/", serve(router).await);
        let articles = client_for(&base).get_articles().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].tags, vec!["rust"]);
    }

    #[tokio::test]
    async fn test_get_article_sends_encoded_slug() {
        let router = Router::new().route(
            "/api/articles/:slug",
            get(|Path(slug): Path<String>| async move {
                Json(json!({ "slug": slug, "title": "Echo", "contentHtml": "<p>hi</p>" }))
            }),
        );
        let client = client_for(&serve(router).await);

        let article = client.get_article("hello world").await.unwrap();
        assert_eq!(article.meta.slug, "hello world");
        assert_eq!(article.content_html, "<p>hi</p>");
        assert_eq!(article.meta.summary, "");
    }

    #[tokio::test]
    async fn test_get_article_rejects_dot_slugs() {
        let router = Router::new().route(
            "/api/articles",
            get(|| async { Json(json!([{ "slug": "listed" }])) }),
        );
        let client = client_for(&serve(router).await);

        for slug in ["", ".", ".."] {
            let err = client.get_article(slug).await.unwrap_err();
            assert!(
                matches!(&err, ApiError::InvalidSlug { slug: s } if s == slug),
                "unexpected result for {slug:?}: {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_get_article_dotted_slug_stays_one_segment() {
        let router = Router::new().route(
            "/api/articles/:slug",
            get(|Path(slug): Path<String>| async move { Json(json!({ "slug": slug })) }),
        );
        let client = client_for(&serve(router).await);

        let article = client.get_article("v1.2...notes").await.unwrap();
        assert_eq!(article.meta.slug, "v1.2...notes");
    }

    #[tokio::test]
    async fn test_status_error_truncates_body() {
        let router = Router::new().route(
            "/api/articles",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "x".repeat(2000)) }),
        );
        let base = serve(router).await;
        let err = client_for(&base).get_articles().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(err
            .to_string()
            .contains(&format!("URL: {base}/api/articles.")));
        match &err {
            ApiError::Status { body, resource, .. } => {
                assert_eq!(body.len(), 800);
                assert_eq!(*resource, "Articles");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Articles fetch failed (503). URL: "));
    }

    #[tokio::test]
    async fn test_missing_route_is_status_error() {
        let client = client_for(&serve(Router::new()).await);
        let err = client.get_profile().await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let router = Router::new().route("/api/profile", get(|| async { "<html>oops</html>" }));
        let client = client_for(&serve(router).await);
        let err = client.get_profile().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { resource: "Profile", .. }));
    }

    #[tokio::test]
    async fn test_unrecognized_list_payload_is_empty() {
        let router = Router::new().route("/api/articles", get(|| async { Json(json!(42)) }));
        let client = client_for(&serve(router).await);
        assert!(client.get_articles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}"))
            .get_profile()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
        assert!(err.to_string().contains("(network)"));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_download_cv() {
        let router = Router::new().route(
            "/api/cv",
            post(|Json(body): Json<Value>| async move {
                if body["token"] == "ok" {
                    (StatusCode::OK, b"%PDF-1.4".to_vec()).into_response()
                } else {
                    (StatusCode::FORBIDDEN, "invalid token").into_response()
                }
            }),
        );
        let client = client_for(&serve(router).await);

        let pdf = client.download_cv("ok").await.unwrap();
        assert_eq!(&pdf[..], b"%PDF-1.4");

        let err = client.download_cv("nope").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().contains("invalid token"));
    }
}
