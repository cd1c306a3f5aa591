//! Provider-issued credentials (access tokens, authorization codes) hidden from formatting.

// self
use crate::_prelude::*;

/// Provider credential whose `Debug` and `Display` output never reveals the value.
///
/// Serializes as the bare string, so payloads still carry the real credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Stores the credential as given; empty strings are kept.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw credential for payload assembly; keep it out of log fields.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<TokenSecret> for Value {
	fn from(secret: TokenSecret) -> Self {
		Value::String(secret.0)
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = TokenSecret::new("ya29.super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "ya29.super-secret");
	}

	#[test]
	fn empty_secrets_are_kept_verbatim() {
		let secret = TokenSecret::new("");

		assert_eq!(secret.expose(), "");
		assert_eq!(Value::from(secret), Value::String(String::new()));
	}
}
