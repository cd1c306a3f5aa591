// self
use crate::obs::BuildOutcome;

/// Records a build outcome via the global metrics recorder (when enabled).
pub fn record_build_outcome(outcome: BuildOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("provider_account_build_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
