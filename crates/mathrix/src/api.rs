use std::collections::HashMap;

use gloo_net::http::{Headers, Request, Response};

use crate::data::ErrorDetail;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Carries the server's `detail` when the body has one.
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

impl ApiError {
    /// HTTP status behind the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::InternalServerError => Some(500),
            ApiError::UnauthorizedAccess => Some(401),
            ApiError::ForbiddenAccess => Some(403),
            ApiError::UnexpectedStatusCode(status) => Some(*status),
            ApiError::NetworkError(_) | ApiError::ParseError(_) | ApiError::SerializeError(_) => {
                None
            }
        }
    }

    /// The server-provided detail of a rejected request.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(detail) => Some(detail),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }
}

impl From<ApiHeaders> for Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = Headers::new();
        for (key, value) in &val.0 {
            headers.set(key, value);
        }
        headers
    }
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    match response.status() {
        200..=299 => Ok(response),
        400 | 409 | 422 => {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| format!("Bad request to {endpoint}"));
            Err(ApiError::BadRequest(detail))
        }
        401 => Err(ApiError::UnauthorizedAccess),
        403 => Err(ApiError::ForbiddenAccess),
        404 => Err(ApiError::NotFound(format!("{endpoint} not found"))),
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    handle_response_status(response, endpoint)
        .await?
        .json::<T>()
        .await
        .map_err(ApiError::ParseError)
}

/// JSON transport used by the frontend's API facade.
///
/// The team-formation API only reads with `GET` and mutates with `POST`.
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;
}

/// [`ApiClient`] over the browser fetch API.
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        let mut headers = ApiHeaders::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            root_url: root_url.into(),
            headers,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");
        let response = Request::get(&url)
            .headers(self.headers.clone().into())
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = self.url(endpoint);
        tracing::debug!(%url, "POST");
        let response = Request::post(&url)
            .headers(self.headers.clone().into())
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        handle_json_response(response, endpoint).await
    }
}

/// User-facing message for a failed login.
pub fn login_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::UnauthorizedAccess => "Invalid email or password. Please try again.",
        _ => "Login failed. Please try again.",
    }
}

/// User-facing message for a failed team creation; a rejected request shows the server's reason.
pub fn create_team_error_message(error: &ApiError) -> String {
    match error.detail() {
        Some(detail) => detail.to_string(),
        None => "Failed to create team. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message(&ApiError::UnauthorizedAccess),
            "Invalid email or password. Please try again."
        );
        assert_eq!(
            login_error_message(&ApiError::InternalServerError),
            "Login failed. Please try again."
        );
        assert_eq!(
            login_error_message(&ApiError::NetworkError(gloo_net::Error::GlooError(
                "offline".to_string()
            ))),
            "Login failed. Please try again."
        );
    }

    #[test]
    fn test_create_team_error_uses_server_detail() {
        let rejected = ApiError::BadRequest("Participant already leads a team".to_string());
        assert_eq!(
            create_team_error_message(&rejected),
            "Participant already leads a team"
        );
        assert_eq!(
            create_team_error_message(&ApiError::InternalServerError),
            "Failed to create team. Please try again."
        );
    }

    #[test]
    fn test_error_status() {
        assert_eq!(ApiError::UnauthorizedAccess.status(), Some(401));
        assert_eq!(ApiError::BadRequest("x".into()).detail(), Some("x"));
        assert_eq!(
            ApiError::NetworkError(gloo_net::Error::GlooError("down".into())).status(),
            None
        );
    }
}
