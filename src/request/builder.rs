//! Shared validation and assembly skeleton for provider-account requests.

// self
use crate::{
	_prelude::*,
	auth::{TokenSecret, has_text},
	error::PreconditionViolation,
	obs::{self, BuildOutcome, BuildSpan},
	request::{
		ProviderAccountRequest,
		properties::{Properties, keys},
	},
};

/// Provider-specific capabilities injected into [`RequestBuilder`].
///
/// Implementations name the provider and turn the frozen property bag into a concrete
/// request. The builder owns validation, so factories can assume a non-blank `providerId`
/// entry is already present when [`create`](Self::create) runs.
pub trait ProviderAccountFactory {
	/// Concrete request type produced by the factory.
	type Request: ProviderAccountRequest;

	/// Provider identifier to embed; `None` or blank values fail the build.
	fn provider_id(&self) -> Option<&str>;

	/// Builds the final request from the frozen properties and the builder state.
	fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request;
}

/// Values accumulated through builder setters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuilderState {
	access_token: Option<TokenSecret>,
}
impl BuilderState {
	/// Access token supplied by the caller, if any.
	pub fn access_token(&self) -> Option<&TokenSecret> {
		self.access_token.as_ref()
	}
}

/// Shared validation and assembly skeleton for provider-account requests.
///
/// Setters take `&mut self` and return the same builder so calls chain. The builder is
/// not synchronized; confine one instance to one construction at a time.
#[derive(Clone, Debug, Default)]
pub struct RequestBuilder<F> {
	factory: F,
	state: BuilderState,
}
impl<F> RequestBuilder<F>
where
	F: ProviderAccountFactory,
{
	/// Creates a builder around the provided factory.
	pub fn new(factory: F) -> Self {
		Self { factory, state: BuilderState::default() }
	}

	/// Stores the access token verbatim; the last value set wins.
	pub fn access_token(&mut self, token: impl Into<String>) -> &mut Self {
		self.state.access_token = Some(TokenSecret::new(token));

		self
	}

	/// Injected factory.
	pub fn factory(&self) -> &F {
		&self.factory
	}

	/// Mutable access to the injected factory, e.g. to correct the provider identifier.
	pub fn factory_mut(&mut self) -> &mut F {
		&mut self.factory
	}

	/// Accumulated setter state.
	pub fn state(&self) -> &BuilderState {
		&self.state
	}

	/// Validates the provider identifier and produces the finalized request.
	///
	/// Fails with [`PreconditionViolation::MissingProviderId`] when the factory resolves no
	/// identifier or a blank one. A failed build leaves the builder unchanged.
	pub fn build(&self) -> Result<F::Request, PreconditionViolation> {
		let provider_id = self.factory.provider_id();
		let _guard = BuildSpan::new(provider_id).entered();

		obs::record_build_outcome(BuildOutcome::Attempt);

		let Some(provider_id) = provider_id.filter(|id| has_text(id)) else {
			#[cfg(feature = "tracing")]
			tracing::warn!("Rejected provider account request without a provider identifier.");

			obs::record_build_outcome(BuildOutcome::Failure);

			return Err(PreconditionViolation::MissingProviderId);
		};
		let mut properties = Properties::builder();

		properties.insert(keys::PROVIDER_ID, provider_id);

		let request = self.factory.create(properties.freeze(), &self.state);

		#[cfg(feature = "tracing")]
		tracing::debug!(
			has_access_token = self.state.access_token.is_some(),
			"Built provider account request."
		);

		obs::record_build_outcome(BuildOutcome::Success);

		Ok(request)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::request::ProviderData;

	#[derive(Debug)]
	struct Captured {
		data: ProviderData,
		token: Option<String>,
	}
	impl ProviderAccountRequest for Captured {
		fn provider_data(&self) -> &ProviderData {
			&self.data
		}
	}

	#[derive(Debug, Default)]
	struct Fixed(Option<String>);
	impl ProviderAccountFactory for Fixed {
		type Request = Captured;

		fn provider_id(&self) -> Option<&str> {
			self.0.as_deref()
		}

		fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request {
			Captured {
				data: ProviderData::new(properties)
					.expect("Builder should only hand validated properties to factories."),
				token: state.access_token().map(|token| token.expose().to_owned()),
			}
		}
	}

	fn fixed(id: &str) -> RequestBuilder<Fixed> {
		RequestBuilder::new(Fixed(Some(id.to_owned())))
	}

	#[test]
	fn non_blank_ids_are_embedded_verbatim() {
		for id in ["google", " padded ", "with space", "é", "x"] {
			let request = fixed(id)
				.access_token("t")
				.build()
				.expect("Non-blank provider identifiers should build.");

			assert_eq!(request.data.provider_id(), id);
			assert_eq!(request.data.properties().keys().collect::<Vec<_>>(), vec!["providerId"]);
		}
	}

	#[test]
	fn missing_or_blank_ids_fail() {
		let ids = [None, Some(""), Some(" "), Some("\t\r\n"), Some("\u{3000}")];

		for id in ids {
			let builder = RequestBuilder::new(Fixed(id.map(str::to_owned)));

			assert_eq!(
				builder.build().map(|request| request.data),
				Err(PreconditionViolation::MissingProviderId)
			);
		}
	}

	#[test]
	fn access_token_is_last_write_wins_and_optional() {
		let mut builder = fixed("github");

		assert_eq!(builder.build().expect("Absent tokens are allowed.").token, None);

		builder.access_token("first").access_token("").access_token("second");

		let request = builder.build().expect("Builder should succeed with a token.");

		assert_eq!(request.token.as_deref(), Some("second"));

		builder.access_token("");

		assert_eq!(builder.build().expect("Empty tokens are allowed.").token.as_deref(), Some(""));
	}

	#[test]
	fn setter_returns_the_same_builder() {
		let mut builder = fixed("facebook");
		let address = &builder as *const RequestBuilder<Fixed>;
		let returned = builder.access_token("abc") as *const RequestBuilder<Fixed>;

		assert!(std::ptr::eq(address, returned));
	}

	#[test]
	fn failed_build_can_be_retried_after_fixing_the_factory() {
		let mut builder = RequestBuilder::new(Fixed(None));

		builder.access_token("abc123");

		assert!(builder.build().is_err());

		builder.factory_mut().0 = Some("google".into());

		let request = builder.build().expect("Build should succeed once the id is fixed.");

		assert_eq!(request.data.provider_id(), "google");
		assert_eq!(request.token.as_deref(), Some("abc123"));
	}

	#[test]
	fn state_debug_redacts_access_token() {
		let mut builder = fixed("google");

		builder.access_token("ya29.secret");

		let rendered = format!("{builder:?}");

		assert!(!rendered.contains("ya29.secret"));
		assert!(rendered.contains("<redacted>"));
	}
}
