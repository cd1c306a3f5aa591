//! Validated, immutable provider-account authentication requests.
//!
//! A provider-account request asserts a user's identity through a third-party identity
//! provider (Google, Facebook, GitHub, LinkedIn, or a custom one). [`request::RequestBuilder`]
//! resolves the provider identifier, freezes the property bag, and hands it to a
//! [`request::ProviderAccountFactory`] that produces the final request.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod obs;
pub mod provider;
pub mod request;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use serde_json;
#[cfg(test)] use color_eyre as _;
