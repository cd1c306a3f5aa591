//! LinkedIn sign-in requests.

// self
use crate::{
	auth::TokenSecret,
	provider::{ProviderKind, account_request},
	request::{AccountRequest, BuilderState, Properties, ProviderAccountFactory, RequestBuilder},
};

/// Builder specialized for LinkedIn requests.
pub type LinkedInAccountRequestBuilder = RequestBuilder<LinkedIn>;

/// Factory for LinkedIn provider-account requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkedIn {
	code: Option<TokenSecret>,
}
impl LinkedIn {
	/// Starts a new LinkedIn request builder.
	pub fn builder() -> LinkedInAccountRequestBuilder {
		RequestBuilder::new(Self::default())
	}

	/// Authorization code supplied through the builder, if any.
	pub fn code(&self) -> Option<&TokenSecret> {
		self.code.as_ref()
	}
}
impl ProviderAccountFactory for LinkedIn {
	type Request = AccountRequest;

	fn provider_id(&self) -> Option<&str> {
		Some(ProviderKind::LinkedIn.as_str())
	}

	fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request {
		account_request(properties, state, self.code.as_ref())
	}
}
impl RequestBuilder<LinkedIn> {
	/// Stores the authorization code returned by LinkedIn; the last value set wins.
	pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
		self.factory_mut().code = Some(TokenSecret::new(code));

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::request::ProviderAccountRequest;

	#[test]
	fn linkedin_request_accepts_code_without_token() {
		let request = LinkedIn::builder()
			.code("AQTc")
			.build()
			.expect("LinkedIn requests should build from a code alone.");
		let data = request.provider_data();

		assert_eq!(data.provider_id(), "linkedin");
		assert_eq!(data.access_token(), None);
		assert_eq!(data.code(), Some("AQTc"));
	}
}
