// self
use crate::_prelude::*;

/// Placeholder recorded when a factory resolves no provider identifier.
pub const UNRESOLVED_PROVIDER: &str = "<unresolved>";

/// A span wrapping a single request build.
#[derive(Clone, Debug)]
pub struct BuildSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl BuildSpan {
	/// Creates a new span tagged with the resolved provider identifier.
	pub fn new(provider: Option<&str>) -> Self {
		let provider = provider.unwrap_or(UNRESOLVED_PROVIDER);

		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("provider_account.build", provider);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = provider;

			Self {}
		}
	}

	/// Enters the span for the duration of the build.
	pub fn entered(self) -> BuildSpanGuard {
		#[cfg(feature = "tracing")]
		{
			BuildSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			BuildSpanGuard {}
		}
	}
}

/// RAII guard returned by [`BuildSpan::entered`].
pub struct BuildSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for BuildSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("BuildSpanGuard(..)")
	}
}
