use log::debug;
use reqwest::{
    Client, Method, Request, Response, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};

use exsync_domain::{BoxError, StorageError};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, BoxError>;
}

#[derive(Clone, Default)]
pub struct ReqwestSendRequest {
    client: Client,
}

impl ReqwestSendRequest {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl SendRequest for ReqwestSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, BoxError> {
        Ok(self.client.execute(request).await?)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid API key")]
    InvalidApiKey,
}

/// Appends path segments to a base URL, keeping any path the base already has.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| ConfigError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

pub(crate) fn request(method: Method, url: Url, headers: &HeaderMap) -> Request {
    let mut request = Request::new(method, url);
    *request.headers_mut() = headers.clone();
    request
}

pub(crate) fn request_with_body<B: Serialize>(
    method: Method,
    url: Url,
    headers: &HeaderMap,
    body: &B,
) -> Result<Request, StorageError> {
    let mut request = request(method, url, headers);
    let body = serde_json::to_vec(body).map_err(|err| StorageError::Other(err.into()))?;
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *request.body_mut() = Some(body.into());
    Ok(request)
}

pub(crate) async fn fetch<S, T>(sender: &S, request: Request) -> Result<T, StorageError>
where
    S: SendRequest,
    T: DeserializeOwned,
{
    send(sender, request)
        .await?
        .json::<T>()
        .await
        .map_err(|err| StorageError::Deserialization(err.to_string()))
}

pub(crate) async fn fetch_no_content<S: SendRequest>(
    sender: &S,
    request: Request,
) -> Result<(), StorageError> {
    send(sender, request).await.map(|_| ())
}

async fn send<S: SendRequest>(sender: &S, request: Request) -> Result<Response, StorageError> {
    let method = request.method().clone();
    let url = request.url().clone();
    match sender.send_request(request).await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                Ok(response)
            } else {
                debug!("{method} {url} failed: {status}");
                Err(StorageError::Status(
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default().to_string(),
                ))
            }
        }
        Err(err) => {
            debug!("{method} {url} failed: {err}");
            Err(StorageError::NoConnection)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    pub struct MockSendRequest {
        pub requests: RefCell<Vec<Request>>,
        pub responses: RefCell<Vec<Response>>,
    }

    impl MockSendRequest {
        /// Responds with the given status and body in order, then fails with a transport error.
        pub fn with_responses(responses: &[(u16, &str)]) -> Self {
            Self {
                requests: RefCell::new(vec![]),
                responses: RefCell::new(
                    responses
                        .iter()
                        .rev()
                        .map(|(status, body)| response(*status, body))
                        .collect(),
                ),
            }
        }

        pub fn request(&self, index: usize) -> Request {
            self.requests.borrow()[index]
                .try_clone()
                .expect("request body is not a stream")
        }
    }

    impl SendRequest for MockSendRequest {
        async fn send_request(&self, request: Request) -> Result<Response, BoxError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop()
                .ok_or_else(|| "no response".into())
        }
    }

    pub fn response(status: u16, body: &str) -> Response {
        Response::from(
            http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    pub fn body(request: &Request) -> serde_json::Value {
        serde_json::from_slice(request.body().and_then(|b| b.as_bytes()).unwrap()).unwrap()
    }

    #[rstest]
    #[case("https://wger.de/api/v2", &["exercise", ""], "https://wger.de/api/v2/exercise/")]
    #[case("https://wger.de/api/v2/", &["exercise", ""], "https://wger.de/api/v2/exercise/")]
    #[case(
        "https://abc.supabase.co",
        &["rest", "v1", "exercises"],
        "https://abc.supabase.co/rest/v1/exercises"
    )]
    #[case(
        "https://abc.supabase.co/?x=1",
        &["rest", "v1", "exercises"],
        "https://abc.supabase.co/rest/v1/exercises"
    )]
    fn test_endpoint(#[case] base: &str, #[case] segments: &[&str], #[case] expected: &str) {
        assert_eq!(
            endpoint(&Url::parse(base).unwrap(), segments)
                .unwrap()
                .as_str(),
            expected
        );
    }

    #[test]
    fn test_endpoint_cannot_be_base() {
        assert_eq!(
            endpoint(&Url::parse("mailto:user@example.com").unwrap(), &["a"]),
            Err(ConfigError::InvalidUrl(
                "mailto:user@example.com".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_fetch() {
        let sender = MockSendRequest::with_responses(&[(200, r#"{"a": 1}"#)]);
        let url = Url::parse("https://example.com/a").unwrap();

        let value: serde_json::Value = fetch(&sender, request(Method::GET, url, &json_headers()))
            .await
            .unwrap();

        assert_eq!(value, serde_json::json!({"a": 1}));
        assert_eq!(
            sender.request(0).headers()[ACCEPT],
            HeaderValue::from_static("application/json")
        );
    }

    #[tokio::test]
    async fn test_fetch_errors() {
        let url = Url::parse("https://example.com/a").unwrap();
        let sender = MockSendRequest::with_responses(&[(404, ""), (200, "not json")]);

        assert!(matches!(
            fetch::<_, serde_json::Value>(
                &sender,
                request(Method::GET, url.clone(), &json_headers())
            )
            .await,
            Err(StorageError::Status(404, reason)) if reason == "Not Found"
        ));
        assert!(matches!(
            fetch::<_, serde_json::Value>(
                &sender,
                request(Method::GET, url.clone(), &json_headers())
            )
            .await,
            Err(StorageError::Deserialization(_))
        ));
        assert!(matches!(
            fetch::<_, serde_json::Value>(&sender, request(Method::GET, url, &json_headers()))
                .await,
            Err(StorageError::NoConnection)
        ));
    }

    #[tokio::test]
    async fn test_fetch_no_content() {
        let url = Url::parse("https://example.com/a").unwrap();
        let sender = MockSendRequest::with_responses(&[(204, ""), (500, "")]);

        assert!(
            fetch_no_content(&sender, request(Method::DELETE, url.clone(), &json_headers()))
                .await
                .is_ok()
        );
        assert!(matches!(
            fetch_no_content(&sender, request(Method::DELETE, url, &json_headers())).await,
            Err(StorageError::Status(500, _))
        ));
    }

    #[test]
    fn test_request_with_body() {
        let request = request_with_body(
            Method::POST,
            Url::parse("https://example.com/a").unwrap(),
            &json_headers(),
            &serde_json::json!([{"name": "Squat"}]),
        )
        .unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(
            request.headers()[CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
        assert_eq!(body(&request), serde_json::json!([{"name": "Squat"}]));
    }
}
