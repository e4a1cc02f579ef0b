use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use skylink_core::{CoreResult, UpstreamError};
use tracing::{error, info};
use url::Url;

use crate::envelope::{error_message, Envelope};

#[derive(Debug, thiserror::Error)]
pub enum ClientInitError {
    #[error("invalid base URL {url:?} for the {service} API: {reason}")]
    InvalidBaseUrl {
        service: &'static str,
        url: String,
        reason: String,
    },
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Builds the connection pool shared by every upstream client.
pub fn build_http_client(timeout: Duration) -> Result<Client, ClientInitError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// JSON-over-HTTP transport for one upstream service.
///
/// Logs every call before it is sent and once it completes or fails, and
/// unwraps the `{ data }` envelope of successful responses. Failures are
/// mapped to [`UpstreamError`] and never retried.
#[derive(Clone, Debug)]
pub struct HttpUpstream {
    service: &'static str,
    base_url: Url,
    client: Client,
}

impl HttpUpstream {
    pub fn new(service: &'static str, base_url: &str, client: Client) -> Result<Self, ClientInitError> {
        let invalid = |reason: String| ClientInitError::InvalidBaseUrl {
            service,
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        Ok(Self {
            service,
            base_url: parsed,
            client,
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> CoreResult<T> {
        let url = self.url(segments);
        let body = self
            .execute(Method::GET, &url, self.client.get(url.clone()))
            .await?;
        self.decode(&body)
    }

    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> CoreResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments);
        let request = self.client.get(url.clone()).query(query);
        let body = self.execute(Method::GET, &url, request).await?;
        self.decode(&body)
    }

    pub async fn post<B, T>(&self, segments: &[&str], payload: &B) -> CoreResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments);
        let request = self.client.post(url.clone()).json(payload);
        let body = self.execute(Method::POST, &url, request).await?;
        self.decode(&body)
    }

    /// POST whose response body carries nothing the caller needs.
    pub async fn post_without_result<B>(&self, segments: &[&str], payload: &B) -> CoreResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments);
        let request = self.client.post(url.clone()).json(payload);
        self.execute(Method::POST, &url, request).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, segments: &[&str], payload: &B) -> CoreResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments);
        let request = self.client.put(url.clone()).json(payload);
        let body = self.execute(Method::PUT, &url, request).await?;
        self.decode(&body)
    }

    pub async fn delete(&self, segments: &[&str]) -> CoreResult<()> {
        let url = self.url(segments);
        let request = self.client.delete(url.clone());
        self.execute(Method::DELETE, &url, request).await?;
        Ok(())
    }

    async fn execute(&self, method: Method, url: &Url, request: RequestBuilder) -> CoreResult<Vec<u8>> {
        info!(service = self.service, method = %method, url = %url, "Upstream API request");

        let response = request
            .send()
            .await
            .map_err(|err| self.transport_failure(err, url))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_failure(err, url))?;

        if status.is_success() {
            info!(service = self.service, status = status.as_u16(), url = %url, "Upstream API response");
            return Ok(body.to_vec());
        }

        let message = error_message(&body).unwrap_or_else(|| default_message(status));
        error!(
            service = self.service,
            status = status.as_u16(),
            message = %message,
            url = %url,
            "Upstream API response error"
        );
        Err(UpstreamError::Status {
            service: self.service,
            status: status.as_u16(),
            message,
        })
    }

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> CoreResult<T> {
        match Envelope::<T>::decode(body) {
            Ok(Envelope::Data(data)) => Ok(data),
            // An error envelope on a 2xx is still a failed call
            Ok(Envelope::Error(message)) => Err(UpstreamError::Status {
                service: self.service,
                status: StatusCode::BAD_GATEWAY.as_u16(),
                message,
            }),
            Err(err) => {
                error!(service = self.service, error = %err, "Upstream API response could not be decoded");
                Err(UpstreamError::Decode {
                    service: self.service,
                    message: err.to_string(),
                })
            }
        }
    }

    fn transport_failure(&self, err: reqwest::Error, url: &Url) -> UpstreamError {
        let failure = if err.is_timeout() {
            UpstreamError::Timeout {
                service: self.service,
                url: url.to_string(),
            }
        } else {
            UpstreamError::Transport {
                service: self.service,
                message: err.to_string(),
            }
        };
        error!(
            service = self.service,
            status = ?err.status().map(|s| s.as_u16()),
            message = %failure,
            url = %url,
            "Upstream API response error"
        );
        failure
    }
}

fn default_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(base: &str) -> HttpUpstream {
        HttpUpstream::new("Flights", base, Client::new()).unwrap()
    }

    #[test]
    fn test_url_appends_segments() {
        let http = upstream("http://localhost:3001");
        assert_eq!(
            http.url(&["flights", "flight-123"]).as_str(),
            "http://localhost:3001/flights/flight-123"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let http = upstream("https://api.example.com/prod/");
        assert_eq!(
            http.url(&["bookings", "customer", "c-1"]).as_str(),
            "https://api.example.com/prod/bookings/customer/c-1"
        );
    }

    #[test]
    fn test_url_escapes_identifiers() {
        let http = upstream("http://localhost:3001");
        assert_eq!(
            http.url(&["flights", "a b/c?d"]).as_str(),
            "http://localhost:3001/flights/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpUpstream::new("Bookings", "not a url", Client::new()).unwrap_err();
        assert!(matches!(err, ClientInitError::InvalidBaseUrl { service: "Bookings", .. }));

        let err = HttpUpstream::new("Bookings", "mailto:ops@example.com", Client::new()).unwrap_err();
        assert!(matches!(err, ClientInitError::InvalidBaseUrl { .. }));
    }
}
