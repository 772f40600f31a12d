//! The page-host trait every embedded engine adapter implements.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::events::LoadEvents;

/// Abstracts the single web view the shell drives.
///
/// Implement this trait on the adapter for a concrete embedded engine. The
/// shell core never talks to an engine directly; everything goes through
/// this seam, which also makes the core testable with a mock host.
///
/// Implementations must:
/// - emit exactly one [`LoadFinished`] on the registry returned by
///   [`load_events`] per finished navigation attempt (success or failure),
/// - route every outgoing request through the installed request hook
///   before it leaves the process.
///
/// [`LoadFinished`]: crate::events::LoadFinished
/// [`load_events`]: PageHost::load_events
#[async_trait]
pub trait PageHost: Send + Sync {
	/// Returns the URL the view currently displays.
	///
	/// Empty string when nothing has been loaded yet.
	fn current_url(&self) -> String;

	/// Navigates the view to `url`.
	///
	/// Resolves when the engine has accepted the navigation, not when the
	/// load finishes; completion arrives as a [`LoadFinished`] event.
	///
	/// [`LoadFinished`]: crate::events::LoadFinished
	async fn navigate(&self, url: &str) -> Result<()>;

	/// Reloads the current page, equivalent to the user pressing refresh.
	async fn reload(&self) -> Result<()>;

	/// Runs JavaScript `script` in the page and returns its completion
	/// value, or [`None`] when the script produced nothing serializable.
	async fn run_script(&self, script: &str) -> Result<Option<Value>>;

	/// Returns the load-completion event registry for this view.
	fn load_events(&self) -> &LoadEvents;
}
