//! Test support for exercising the shell core without an engine.
//!
//! [`MockHost`] implements [`PageHost`] in memory: it records navigations,
//! reloads, and submitted scripts, and lets tests drive load-completion
//! events by hand.
//!
//! ```ignore
//! use std::sync::Arc;
//! use wsim::testing::MockHost;
//!
//! let host = Arc::new(MockHost::new());
//! host.finish_load("https://websim.ai", true).await;
//! assert_eq!(host.reload_count(), 0);
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::time::Instant;
use wsim_host::{HostError, LoadEvents, LoadFinished, PageHost};

/// In-memory [`PageHost`] double.
///
/// Navigation updates the current URL but never emits a load event on its
/// own; call [`MockHost::finish_load`] to simulate the engine completing a
/// load. Reload timestamps use the tokio clock, so tests may pause and
/// advance time.
#[derive(Default)]
pub struct MockHost {
	current_url: Mutex<String>,
	navigations: Mutex<Vec<String>>,
	reloads: Mutex<Vec<Instant>>,
	scripts: Mutex<Vec<String>>,
	script_result: Mutex<Option<Value>>,
	script_error: Mutex<Option<String>>,
	navigation_error: Mutex<Option<String>>,
	events: LoadEvents,
}

impl MockHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// A host already displaying `url`.
	pub fn at(url: impl Into<String>) -> Self {
		let host = Self::new();
		*host.current_url.lock() = url.into();
		host
	}

	/// Value future `run_script` calls resolve to.
	pub fn set_script_result(&self, value: Value) {
		*self.script_result.lock() = Some(value);
	}

	/// Makes future `run_script` calls fail with [`HostError::ScriptFailed`].
	pub fn set_script_error(&self, message: impl Into<String>) {
		*self.script_error.lock() = Some(message.into());
	}

	/// Makes future `navigate` calls fail with [`HostError::Navigation`].
	pub fn set_navigation_error(&self, message: impl Into<String>) {
		*self.navigation_error.lock() = Some(message.into());
	}

	/// Simulates the engine finishing a load of `url`, updating the current
	/// URL and dispatching the event to subscribed handlers.
	pub async fn finish_load(&self, url: impl Into<String>, ok: bool) {
		let url = url.into();
		*self.current_url.lock() = url.clone();
		self.events.emit(LoadFinished { url, ok }).await;
	}

	/// URLs passed to `navigate`, in order.
	pub fn navigations(&self) -> Vec<String> {
		self.navigations.lock().clone()
	}

	/// Number of `reload` calls so far.
	pub fn reload_count(&self) -> usize {
		self.reloads.lock().len()
	}

	/// Tokio-clock timestamps of each `reload` call.
	pub fn reload_times(&self) -> Vec<Instant> {
		self.reloads.lock().clone()
	}

	/// Scripts passed to `run_script`, in order.
	pub fn scripts(&self) -> Vec<String> {
		self.scripts.lock().clone()
	}
}

#[async_trait]
impl PageHost for MockHost {
	fn current_url(&self) -> String {
		self.current_url.lock().clone()
	}

	async fn navigate(&self, url: &str) -> wsim_host::Result<()> {
		if let Some(message) = self.navigation_error.lock().clone() {
			return Err(HostError::Navigation {
				url: url.to_string(),
				message,
			});
		}
		self.navigations.lock().push(url.to_string());
		*self.current_url.lock() = url.to_string();
		Ok(())
	}

	async fn reload(&self) -> wsim_host::Result<()> {
		self.reloads.lock().push(Instant::now());
		Ok(())
	}

	async fn run_script(&self, script: &str) -> wsim_host::Result<Option<Value>> {
		self.scripts.lock().push(script.to_string());
		if let Some(message) = self.script_error.lock().clone() {
			return Err(HostError::ScriptFailed(message));
		}
		Ok(self.script_result.lock().clone())
	}

	fn load_events(&self) -> &LoadEvents {
		&self.events
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;

	#[tokio::test]
	async fn navigate_tracks_url_and_history() {
		let host = MockHost::new();
		host.navigate("https://websim.ai/a").await.unwrap();
		host.navigate("https://websim.ai/b").await.unwrap();

		assert_eq!(host.current_url(), "https://websim.ai/b");
		assert_eq!(host.navigations().len(), 2);
	}

	#[tokio::test]
	async fn finish_load_reaches_subscribers() {
		let host = Arc::new(MockHost::new());
		let seen = Arc::new(Mutex::new(Vec::new()));

		let sink = Arc::clone(&seen);
		let _sub = host.load_events().on_load_finished(move |event| {
			let sink = Arc::clone(&sink);
			async move {
				sink.lock().push(event);
				Ok(())
			}
		});

		host.finish_load("https://websim.ai", true).await;

		let seen = seen.lock();
		assert_eq!(seen.len(), 1);
		assert!(seen[0].ok);
		assert_eq!(host.current_url(), "https://websim.ai");
	}

	#[tokio::test]
	async fn configured_failures_surface_as_host_errors() {
		let host = MockHost::new();
		host.set_navigation_error("connection refused");
		host.set_script_error("world gone");

		assert!(host.navigate("https://websim.ai").await.is_err());
		assert!(host.run_script("1").await.is_err());
	}
}
