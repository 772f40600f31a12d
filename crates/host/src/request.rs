//! Outgoing-request view handed to header interceptors.

/// Mutable view of an outgoing HTTP request, as exposed by the engine's
/// request-interception hook.
///
/// Header names are matched case-insensitively on write, mirroring how
/// engines treat them on the wire. The original casing of the name is kept
/// for headers the engine set; headers the shell sets keep the shell's
/// casing.
#[derive(Debug, Clone, Default)]
pub struct OutgoingRequest {
	url: String,
	headers: Vec<(String, String)>,
}

impl OutgoingRequest {
	/// Creates a request for `url` with no headers set.
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			headers: Vec::new(),
		}
	}

	/// Returns the request URL.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Sets a header, replacing any existing value under the same
	/// case-insensitive name.
	pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		if let Some(existing) = self
			.headers
			.iter_mut()
			.find(|(n, _)| n.eq_ignore_ascii_case(&name))
		{
			existing.1 = value;
		} else {
			self.headers.push((name, value));
		}
	}

	/// Returns the value of `name`, matched case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// Returns all headers in insertion order.
	pub fn headers(&self) -> &[(String, String)] {
		&self.headers
	}
}
