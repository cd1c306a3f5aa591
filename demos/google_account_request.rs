//! Builds a Google provider-account request and prints the payload a transport would send.

// crates.io
use color_eyre::Result;
// self
use provider_account::{
	provider::{Custom, Google, ProviderKind},
	request::{ProviderAccountRequest, RequestBuilder},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let request = Google::builder().access_token("abc123").code("4/0AbCd").build()?;

	println!("{:?}", request.provider_data());
	println!("{}", request.provider_data().to_json_string()?);

	let kind: ProviderKind = std::env::args().nth(1).as_deref().unwrap_or("github").parse()?;
	let request = RequestBuilder::new(Custom::from(kind)).access_token("gho_demo").build()?;

	println!("{}", request.provider_data().to_json_string()?);

	Ok(())
}
