//! Facebook login requests.

// self
use crate::{
	provider::{ProviderKind, account_request},
	request::{AccountRequest, BuilderState, Properties, ProviderAccountFactory, RequestBuilder},
};

/// Builder specialized for Facebook requests.
pub type FacebookAccountRequestBuilder = RequestBuilder<Facebook>;

/// Factory for Facebook provider-account requests; only an access token is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Facebook;
impl Facebook {
	/// Starts a new Facebook request builder.
	pub fn builder() -> FacebookAccountRequestBuilder {
		RequestBuilder::new(Self)
	}
}
impl ProviderAccountFactory for Facebook {
	type Request = AccountRequest;

	fn provider_id(&self) -> Option<&str> {
		Some(ProviderKind::Facebook.as_str())
	}

	fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request {
		account_request(properties, state, None)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::request::ProviderAccountRequest;

	#[test]
	fn facebook_request_omits_absent_token() {
		let request = Facebook::builder().build().expect("Facebook requests should build.");

		assert_eq!(request.provider_data().provider_id(), "facebook");
		assert_eq!(request.provider_data().properties().len(), 1);
	}
}
