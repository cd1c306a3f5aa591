//! Optional observability helpers for request builders.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to wrap every build in a `provider_account.build` span carrying
//!   the `provider` field. Credentials are never recorded.
//! - Enable `metrics` to increment the `provider_account_build_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildOutcome {
	/// Entry to [`RequestBuilder::build`](crate::request::RequestBuilder::build).
	Attempt,
	/// A request was produced.
	Success,
	/// A precondition failed and no request was produced.
	Failure,
}
impl BuildOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			BuildOutcome::Attempt => "attempt",
			BuildOutcome::Success => "success",
			BuildOutcome::Failure => "failure",
		}
	}
}
impl Display for BuildOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
