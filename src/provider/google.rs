//! Google sign-in requests (access token and/or server auth code).

// self
use crate::{
	auth::TokenSecret,
	provider::{ProviderKind, account_request},
	request::{AccountRequest, BuilderState, Properties, ProviderAccountFactory, RequestBuilder},
};

/// Builder specialized for Google requests.
pub type GoogleAccountRequestBuilder = RequestBuilder<Google>;

/// Factory for Google provider-account requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Google {
	code: Option<TokenSecret>,
}
impl Google {
	/// Starts a new Google request builder.
	pub fn builder() -> GoogleAccountRequestBuilder {
		RequestBuilder::new(Self::default())
	}

	/// Authorization code supplied through the builder, if any.
	pub fn code(&self) -> Option<&TokenSecret> {
		self.code.as_ref()
	}
}
impl ProviderAccountFactory for Google {
	type Request = AccountRequest;

	fn provider_id(&self) -> Option<&str> {
		Some(ProviderKind::Google.as_str())
	}

	fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request {
		account_request(properties, state, self.code.as_ref())
	}
}
impl RequestBuilder<Google> {
	/// Stores the server auth code returned by Google sign-in; the last value set wins.
	pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
		self.factory_mut().code = Some(TokenSecret::new(code));

		self
	}
}
