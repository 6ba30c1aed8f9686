use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Expense, Identity, NewExpense, Report, ReportPeriod};
use crate::ApiUrl;

/// Header carrying the raw session token on protected calls. The value is
/// the token itself, no scheme prefix.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Client for the expense API.
///
/// Holds whatever token the session currently has. A protected call made
/// without a token is still issued (and rejected server-side); keeping
/// unauthenticated users out of protected views is the navigation layer's
/// job, not this one's.
#[derive(Debug, Clone)]
pub struct KharchaClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    token: Option<String>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// The payload carried a `message` field, the API's failure convention.
    /// Raised regardless of the HTTP status code, 2xx included.
    #[error("{0}")]
    Api(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Parsing(String),
}

#[derive(Debug, Deserialize)]
struct ApiFailure {
    message: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    mobile: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub mobile: String,
    pub password: String,
}

/// A successful login: the identity fields plus the session token, flat in
/// one object.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSuccess {
    #[serde(flatten)]
    pub identity: Identity,
    pub token: String,
}

impl KharchaClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: ApiUrl::new(base_url),
            token,
        }
    }

    /// Replace the token attached to protected calls. `None` after logout.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.base_url.append_path(path).as_ref())
    }

    /// Build a request to a protected endpoint, attaching the token verbatim
    /// when one is held.
    fn protected(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.public(method, path);
        match &self.token {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token),
            None => request,
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<(StatusCode, String), ApiError> {
        debug!(call = call_name, "issuing API call");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{call_name}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("{call_name}: {e}")))?;
        Ok((status, body))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, ApiError> {
        let (status, body) = self.send(request, call_name).await?;
        decode_payload(&body, status, call_name)
    }

    /// Issue a call whose success payload is implementation-defined and
    /// discarded; only the failure convention is checked.
    async fn fetch_discarding_body(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<(), ApiError> {
        let (status, body) = self.send(request, call_name).await?;
        fail_on_message(&body, status, call_name)
    }

    /// Exchange credentials for an identity and token.
    pub async fn login(&self, mobile: &str, password: &str) -> Result<LoginSuccess, ApiError> {
        self.fetch(
            self.public(Method::POST, "/api/auth/login")
                .json(&LoginRequest { mobile, password }),
            "POST /api/auth/login",
        )
        .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.fetch_discarding_body(
            self.public(Method::POST, "/api/auth/register").json(request),
            "POST /api/auth/register",
        )
        .await
    }

    pub async fn add_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        self.fetch_discarding_body(
            self.protected(Method::POST, "/api/expenses").json(expense),
            "POST /api/expenses",
        )
        .await
    }

    /// Fetch the expense collection for the given period, in server order.
    pub async fn expenses(&self, period: ReportPeriod) -> Result<Vec<Expense>, ApiError> {
        let path = format!("/api/expenses/{}", period.as_str());
        let call_name = format!("GET {path}");
        self.fetch(self.protected(Method::GET, &path), &call_name)
            .await
    }

    /// Fetch the server-computed report for the given period.
    pub async fn report(&self, period: ReportPeriod) -> Result<Report, ApiError> {
        let path = format!("/api/expenses/report/{}", period.as_str());
        let call_name = format!("GET {path}");
        self.fetch(self.protected(Method::GET, &path), &call_name)
            .await
    }
}

/// A payload with a `message` field is an application error no matter the
/// status; a non-2xx status without one is a transport error.
fn fail_on_message(body: &str, status: StatusCode, call_name: &str) -> Result<(), ApiError> {
    if let Ok(failure) = serde_json::from_str::<ApiFailure>(body) {
        return Err(ApiError::Api(failure.message));
    }
    if !status.is_success() {
        return Err(ApiError::Transport(format!(
            "{call_name} returned {status}"
        )));
    }
    Ok(())
}

fn decode_payload<T: DeserializeOwned>(
    body: &str,
    status: StatusCode,
    call_name: &str,
) -> Result<T, ApiError> {
    fail_on_message(body, status, call_name)?;
    serde_json::from_str(body).map_err(|e| ApiError::Parsing(format!("{call_name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_payload_is_an_api_error_even_on_ok_status() {
        let err = decode_payload::<Vec<Expense>>(
            r#"{"message": "Token is not valid"}"#,
            StatusCode::OK,
            "GET /api/expenses/daily",
        )
        .unwrap_err();
        match err {
            ApiError::Api(message) => assert_eq!(message, "Token is not valid"),
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[test]
    fn message_payload_is_an_api_error_on_error_status_too() {
        let err = fail_on_message(
            r#"{"message": "Invalid credentials"}"#,
            StatusCode::UNAUTHORIZED,
            "POST /api/auth/login",
        )
        .unwrap_err();
        match err {
            ApiError::Api(message) => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[test]
    fn non_success_without_message_is_a_transport_error() {
        let err = decode_payload::<Vec<Expense>>(
            "Bad Gateway",
            StatusCode::BAD_GATEWAY,
            "GET /api/expenses/daily",
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn collection_payload_decodes() {
        let rows: Vec<Expense> = decode_payload(
            r#"[{"_id": "e1", "date": "2026-01-05T09:30:00Z", "category": "Travel",
                "subCategory": "Cab", "amount": 250}]"#,
            StatusCode::OK,
            "GET /api/expenses/daily",
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 250.0);
    }

    #[test]
    fn login_success_decodes_identity_and_token() {
        let success: LoginSuccess = decode_payload(
            r#"{"id": "u1", "name": "Asha Rao", "mobile": "9999999999", "token": "abc123"}"#,
            StatusCode::OK,
            "POST /api/auth/login",
        )
        .unwrap();
        assert_eq!(success.identity.name, "Asha Rao");
        assert_eq!(success.token, "abc123");
    }

    #[test]
    fn protected_request_carries_the_exact_token() {
        let client = KharchaClient::new("http://localhost:5000", Some("abc123".to_string()));
        let request = client
            .protected(Method::GET, "/api/expenses/daily")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(AUTH_TOKEN_HEADER).unwrap(),
            "abc123"
        );
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/expenses/daily"
        );
    }

    #[test]
    fn protected_request_without_token_is_still_issued_bare() {
        let client = KharchaClient::new("http://localhost:5000", None);
        let request = client
            .protected(Method::GET, "/api/expenses/daily")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTH_TOKEN_HEADER).is_none());
    }

    #[test]
    fn public_request_never_carries_a_token() {
        let client = KharchaClient::new("http://localhost:5000", Some("abc123".to_string()));
        let request = client
            .public(Method::POST, "/api/auth/login")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTH_TOKEN_HEADER).is_none());
    }
}
