//! Built-in provider factories plugged into [`RequestBuilder`](crate::request::RequestBuilder).
//!
//! Each factory names its provider and appends the credentials it accepts after the
//! `providerId` entry: `accessToken` for every provider, plus `code` for providers that
//! also accept authorization codes (Google, LinkedIn). [`Custom`] carries an arbitrary
//! identifier so providers selected from configuration share the same skeleton.

pub mod custom;
pub mod facebook;
pub mod github;
pub mod google;
pub mod kind;
pub mod linkedin;

pub use custom::*;
pub use facebook::*;
pub use github::*;
pub use google::*;
pub use kind::*;
pub use linkedin::*;

// self
use crate::{
	auth::TokenSecret,
	request::{AccountRequest, BuilderState, Properties, ProviderData, keys},
};

/// Appends the stored credentials to the frozen bag and wraps the result.
fn account_request(
	properties: Properties,
	state: &BuilderState,
	code: Option<&TokenSecret>,
) -> AccountRequest {
	let mut staged = properties.to_builder();

	staged
		.insert_some(keys::ACCESS_TOKEN, state.access_token().cloned())
		.insert_some(keys::CODE, code.cloned());

	AccountRequest::new(ProviderData::from_validated(staged.freeze()))
}
