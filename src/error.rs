//! Crate-level error types shared by builders, provider factories, and payload parsing.

// self
use crate::{_prelude::*, auth::IdentifierError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Builder state violated a construction precondition.
	#[error(transparent)]
	Precondition(#[from] PreconditionViolation),
	/// Provider identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] IdentifierError),
	/// Provider data payload could not be parsed.
	#[error("Provider data payload is malformed at `{}`.", .source.path())]
	Parse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Provider data payload is not a single well-formed JSON document.
	#[error("Provider data payload is not valid JSON.")]
	Json(#[from] serde_json::Error),
	/// Provider label does not name a built-in provider.
	#[error("Unknown provider `{label}`.")]
	UnknownProvider {
		/// Label that failed to resolve.
		label: String,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Parse { source }
	}
}

/// Programmer or configuration errors raised synchronously by request builders.
///
/// These are never transient; retrying without changing the inputs yields the same failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum PreconditionViolation {
	/// The provider identifier resolved to nothing, an empty string, or whitespace.
	#[error("The providerId property is missing.")]
	MissingProviderId,
}
