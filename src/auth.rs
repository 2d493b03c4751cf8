use std::collections::HashMap;

use actix_web::http::header;
use actix_web::HttpRequest;
use async_trait::async_trait;

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<Identity, Error>;
}

#[derive(Clone, Debug)]
pub struct TokenAuthenticator {
    tokens: HashMap<String, String>,
}

impl TokenAuthenticator {
    pub fn new(tokens: HashMap<String, String>) -> TokenAuthenticator {
        TokenAuthenticator { tokens }
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    // credentials must not reach the logs
    #[tracing::instrument(skip(self, token))]
    async fn authenticate(&self, token: &str) -> Result<Identity, Error> {
        let email = self.tokens.get(token).ok_or(Error::InvalidCredentials)?;

        Ok(Identity {
            email: email.clone(),
        })
    }
}

pub async fn caller_identity(
    auth: &dyn Authenticator,
    req: &HttpRequest,
) -> Result<Identity, Error> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(Error::MissingCredentials)?;
    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(Error::InvalidCredentials)?;

    auth.authenticate(token).await
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    fn authenticator() -> TokenAuthenticator {
        let mut tokens = HashMap::new();
        tokens.insert("sesame".to_string(), "tester@example.com".to_string());
        TokenAuthenticator::new(tokens)
    }

    #[tokio::test]
    async fn known_token_yields_identity() {
        let identity = authenticator().authenticate("sesame").await.unwrap();

        assert_eq!(identity.email, "tester@example.com".to_string());
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let result = authenticator().authenticate("joshua").await;

        assert_eq!(result.unwrap_err(), Error::InvalidCredentials);
    }

    #[tokio::test]
    async fn request_without_credentials_is_rejected() {
        let req = TestRequest::default().to_http_request();

        let result = caller_identity(&authenticator(), &req).await;

        assert_eq!(result.unwrap_err(), Error::MissingCredentials);
    }

    #[tokio::test]
    async fn request_with_non_bearer_credentials_is_rejected() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic c2VzYW1l"))
            .to_http_request();

        let result = caller_identity(&authenticator(), &req).await;

        assert_eq!(result.unwrap_err(), Error::InvalidCredentials);
    }

    #[tokio::test]
    async fn bearer_request_yields_identity() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer sesame"))
            .to_http_request();

        let identity = caller_identity(&authenticator(), &req).await.unwrap();

        assert_eq!(identity.email, "tester@example.com".to_string());
    }
}
