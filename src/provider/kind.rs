//! Built-in provider labels.

// self
use crate::_prelude::*;

/// Identity providers with built-in factories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
	/// Google sign-in.
	Google,
	/// Facebook login.
	Facebook,
	/// GitHub OAuth apps.
	Github,
	/// LinkedIn sign-in.
	LinkedIn,
}
impl ProviderKind {
	/// Every built-in provider, in declaration order.
	pub const ALL: [ProviderKind; 4] =
		[ProviderKind::Google, ProviderKind::Facebook, ProviderKind::Github, ProviderKind::LinkedIn];

	/// Returns the provider identifier embedded in request payloads.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Google => "google",
			ProviderKind::Facebook => "facebook",
			ProviderKind::Github => "github",
			ProviderKind::LinkedIn => "linkedin",
		}
	}

	/// Returns true if the provider also accepts authorization codes.
	pub const fn accepts_code(self) -> bool {
		matches!(self, ProviderKind::Google | ProviderKind::LinkedIn)
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProviderKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ProviderKind::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| Error::UnknownProvider { label: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_round_trip_through_from_str() {
		for kind in ProviderKind::ALL {
			assert_eq!(kind.as_str().parse::<ProviderKind>().expect("Labels should parse."), kind);
			assert_eq!(kind.to_string(), kind.as_str());
		}

		assert_eq!(" GitHub ".parse::<ProviderKind>().expect("Parsing is lenient."), ProviderKind::Github);
		assert_eq!("LinkedIn".parse::<ProviderKind>().expect("Parsing is lenient."), ProviderKind::LinkedIn);
	}

	#[test]
	fn unknown_labels_are_rejected() {
		let err = "myspace".parse::<ProviderKind>().expect_err("Unknown labels must fail.");

		assert!(matches!(err, Error::UnknownProvider { ref label } if label == "myspace"));
		assert_eq!(err.to_string(), "Unknown provider `myspace`.");
	}

	#[test]
	fn serde_uses_payload_identifiers() {
		assert_eq!(
			serde_json::to_string(&ProviderKind::LinkedIn).expect("Kind should serialize."),
			"\"linkedin\""
		);
		assert_eq!(
			serde_json::from_str::<ProviderKind>("\"github\"").expect("Kind should deserialize."),
			ProviderKind::Github
		);
		assert!(ProviderKind::Google.accepts_code());
		assert!(!ProviderKind::Facebook.accepts_code());
	}
}
