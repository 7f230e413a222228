use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use searchbox_api_types::SearchResult;
use std::rc::Rc;

/// Anything that can turn a query into a ranked list of results.
#[async_trait(?Send)]
pub trait SearchService {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>>;
}

#[async_trait(?Send)]
impl<T: SearchService + ?Sized> SearchService for Rc<T> {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        (**self).search(query).await
    }
}

/// Talks to the search endpoint over HTTP. The query is sent verbatim as a `text/plain` body.
#[derive(Clone, Debug)]
pub struct HttpSearchService {
    endpoint: String,
    #[cfg(all(feature = "native", not(feature = "csr")))]
    client: reqwest::Client,
}

impl HttpSearchService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            #[cfg(all(feature = "native", not(feature = "csr")))]
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SearchService for HttpSearchService {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        log::debug!("Querying {} for {query:?}", self.endpoint);
        let json = self.post_text(query).await?;
        serde_json::from_str(&json).map_err(|e| {
            log::error!("{e} {} returned: json text {json}", self.endpoint);
            AppError::from(e)
        })
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "csr")] {
        impl HttpSearchService {
            async fn post_text(&self, body: &str) -> AppResult<String> {
                let response = gloo_net::http::Request::post(&self.endpoint)
                    .header("Content-Type", "text/plain")
                    .body(body)?
                    .send()
                    .await?;
                if !response.ok() {
                    return Err(AppError::Status(response.status()));
                }
                Ok(response.text().await?)
            }
        }
    } else if #[cfg(feature = "native")] {
        impl HttpSearchService {
            async fn post_text(&self, body: &str) -> AppResult<String> {
                let response = self
                    .client
                    .post(&self.endpoint)
                    .header(reqwest::header::CONTENT_TYPE, "text/plain")
                    .body(body.to_string())
                    .send()
                    .await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(AppError::Status(status.as_u16()));
                }
                Ok(response.text().await?)
            }
        }
    } else {
        compile_error!("searchbox-app needs either the `csr` or the `native` feature");
    }
}

#[cfg(all(test, feature = "native", not(feature = "csr")))]
mod tests {
    use super::*;
    use crate::error::SystemError;
    use axum::{
        extract::State,
        http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Seen(Arc<Mutex<Vec<(Option<String>, String)>>>);

    async fn record(State(seen): State<Seen>, headers: HeaderMap, body: String) -> String {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.0.lock().unwrap().push((content_type, body));
        r#"[["a.txt",3],["b.txt",1]]"#.to_string()
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api/search")
    }

    #[tokio::test]
    async fn posts_query_verbatim_as_plain_text() {
        let _ = pretty_env_logger::try_init();
        let seen = Seen::default();
        let url = serve(
            Router::new()
                .route("/api/search", post(record))
                .with_state(seen.clone()),
        )
        .await;
        let service = HttpSearchService::new(url);

        let query = "  glClear \"depth\" {buffer} ";
        let results = service.search(query).await.unwrap();

        assert_eq!(
            results,
            vec![SearchResult::new("a.txt", 3.0), SearchResult::new("b.txt", 1.0)]
        );
        let seen = seen.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("text/plain"));
        assert_eq!(seen[0].1, query);
    }

    #[tokio::test]
    async fn empty_array_is_an_empty_result() {
        let url = serve(Router::new().route("/api/search", post(|| async { "[]" }))).await;
        let results = HttpSearchService::new(url).search("nothing").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve(Router::new().route(
            "/api/search",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "505") }),
        ))
        .await;
        let err = HttpSearchService::new(url).search("q").await.unwrap_err();
        assert!(matches!(err, AppError::Status(500)), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let url = serve(Router::new().route(
            "/api/search",
            post(|| async { r#"{"results": []}"# }),
        ))
        .await;
        let err = HttpSearchService::new(url).search("q").await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)), "{err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_system_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = HttpSearchService::new(format!("http://{addr}/api/search"))
            .search("q")
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::SystemError(SystemError::ReqwestError(_))),
            "{err:?}"
        );
    }
}
