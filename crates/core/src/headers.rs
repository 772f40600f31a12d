//! Browser-identification header spoofing.
//!
//! websim.ai serves a degraded experience to engines it does not recognize
//! as Chrome. Every outgoing request therefore gets a consistent client-hint
//! signature derived from one fixed Chrome version string, and the session
//! advertises a matching `User-Agent` once at startup.

use wsim_host::OutgoingRequest;

/// Chrome version the shell impersonates.
pub const DEFAULT_CHROME_VERSION: &str = "120.0.0.0";

/// WebKit build baked into the user-agent string.
pub const WEBKIT_VERSION: &str = "537.36";

/// `Accept-Language` advertised by the session profile.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// The three client-hint headers injected into every outgoing request.
///
/// Derived deterministically from the Chrome version string; recomputed per
/// interceptor installation, never per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedHeaderSet {
	pub sec_ch_ua: String,
	pub sec_ch_ua_mobile: String,
	pub sec_ch_ua_platform: String,
}

impl InjectedHeaderSet {
	/// Builds the header set for `chrome_version`.
	pub fn for_version(chrome_version: &str) -> Self {
		Self {
			sec_ch_ua: format!(
				"\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"{chrome_version}\", \"Google Chrome\";v=\"{chrome_version}\""
			),
			sec_ch_ua_mobile: "?0".to_string(),
			sec_ch_ua_platform: "\"Windows\"".to_string(),
		}
	}

	/// Overwrites the three client-hint headers on `request`.
	///
	/// Cannot fail; existing values under the same names are replaced, never
	/// duplicated.
	pub fn apply(&self, request: &mut OutgoingRequest) {
		request.set_header("sec-ch-ua", &self.sec_ch_ua);
		request.set_header("sec-ch-ua-mobile", &self.sec_ch_ua_mobile);
		request.set_header("sec-ch-ua-platform", &self.sec_ch_ua_platform);
		tracing::trace!(url = %request.url(), "Applied client-hint headers");
	}

	/// Name/value pairs in injection order, for display.
	pub fn entries(&self) -> [(&'static str, &str); 3] {
		[
			("sec-ch-ua", &self.sec_ch_ua),
			("sec-ch-ua-mobile", &self.sec_ch_ua_mobile),
			("sec-ch-ua-platform", &self.sec_ch_ua_platform),
		]
	}
}

impl Default for InjectedHeaderSet {
	fn default() -> Self {
		Self::for_version(DEFAULT_CHROME_VERSION)
	}
}

/// Full user-agent string for `chrome_version`, set once at session init.
pub fn user_agent(chrome_version: &str) -> String {
	format!(
		"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/{WEBKIT_VERSION} \
		 (KHTML, like Gecko) Chrome/{chrome_version} Safari/{WEBKIT_VERSION} \
		 Chromium/{chrome_version}"
	)
}
