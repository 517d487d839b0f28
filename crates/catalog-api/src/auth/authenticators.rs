//! Authentication implementations

use async_trait::async_trait;
use catalog_types::auth::{AuthContext, AuthRequest, AuthenticationResult, Authenticator};
use catalog_types::SecretString;
use tracing::debug;

/// No-op authenticator that allows all requests
#[derive(Debug, Default)]
pub struct NoAuthenticator;

#[async_trait]
impl Authenticator for NoAuthenticator {
	async fn authenticate(&self, _request: &AuthRequest) -> AuthenticationResult {
		debug!("NoAuthenticator: bypassing authentication");
		AuthenticationResult::Bypassed
	}

	fn name(&self) -> &str {
		"NoAuthenticator"
	}
}

/// Authenticator checking requests against one static API key
///
/// The comparison goes through `SecretString` equality, which is
/// constant-time.
#[derive(Debug)]
pub struct ApiKeyAuthenticator {
	api_key: SecretString,
}

impl ApiKeyAuthenticator {
	/// Create a new authenticator with the given static key
	pub fn new(api_key: SecretString) -> Self {
		Self { api_key }
	}
}

#[async_trait]
impl Authenticator for ApiKeyAuthenticator {
	async fn authenticate(&self, request: &AuthRequest) -> AuthenticationResult {
		if let Some(candidate) = request.get_api_key() {
			if SecretString::from(candidate.as_str()) == self.api_key {
				debug!("API key authenticated");
				return AuthenticationResult::Authorized(AuthContext::new("admin".to_string()));
			}
		}

		AuthenticationResult::Unauthorized("Invalid or missing API key".to_string())
	}

	fn name(&self) -> &str {
		"ApiKeyAuthenticator"
	}
}
