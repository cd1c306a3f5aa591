//! GitHub OAuth app requests.

// self
use crate::{
	provider::{ProviderKind, account_request},
	request::{AccountRequest, BuilderState, Properties, ProviderAccountFactory, RequestBuilder},
};

/// Builder specialized for Github requests.
pub type GithubAccountRequestBuilder = RequestBuilder<Github>;

/// Factory for Github provider-account requests; only an access token is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Github;
impl Github {
	/// Starts a new Github request builder.
	pub fn builder() -> GithubAccountRequestBuilder {
		RequestBuilder::new(Self)
	}
}
impl ProviderAccountFactory for Github {
	type Request = AccountRequest;

	fn provider_id(&self) -> Option<&str> {
		Some(ProviderKind::Github.as_str())
	}

	fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request {
		account_request(properties, state, None)
	}
}
