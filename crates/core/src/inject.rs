//! Fire-and-forget script submission.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use wsim_host::PageHost;

/// Submits scripts to the page without blocking the caller.
///
/// Each submission runs on its own tokio task. The returned handle can be
/// awaited for the script's resolved value or dropped outright; dropping
/// the handle never cancels the script.
#[derive(Clone)]
pub struct ScriptInjector {
	host: Arc<dyn PageHost>,
}

impl ScriptInjector {
	pub fn new(host: Arc<dyn PageHost>) -> Self {
		Self { host }
	}

	/// Submits `script` for execution in the page's main scripting context.
	///
	/// The task resolves to the script's completion value. Host failures
	/// are logged and resolve to `None`; a script that never produces a
	/// value is indistinguishable from one that failed. Interpreting the
	/// value (truthy, falsy, absent) is the caller's business.
	pub fn submit(&self, script: String) -> JoinHandle<Option<Value>> {
		let host = Arc::clone(&self.host);
		tokio::spawn(async move {
			match host.run_script(&script).await {
				Ok(value) => value,
				Err(e) => {
					tracing::warn!(error = %e, "Script submission failed");
					None
				}
			}
		})
	}
}

impl std::fmt::Debug for ScriptInjector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScriptInjector").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::testing::MockHost;

	use super::*;

	#[tokio::test]
	async fn submit_resolves_with_script_value() {
		let host = Arc::new(MockHost::new());
		host.set_script_result(json!(true));
		let injector = ScriptInjector::new(host.clone());

		let value = injector.submit("1 + 1".into()).await.unwrap();
		assert_eq!(value, Some(json!(true)));
		assert_eq!(host.scripts(), ["1 + 1"]);
	}

	#[tokio::test]
	async fn host_failure_resolves_to_none() {
		let host = Arc::new(MockHost::new());
		host.set_script_error("boom");
		let injector = ScriptInjector::new(host);

		let value = injector.submit("broken()".into()).await.unwrap();
		assert_eq!(value, None);
	}

	#[tokio::test]
	async fn dropped_handle_still_runs_script() {
		let host = Arc::new(MockHost::new());
		let injector = ScriptInjector::new(host.clone());

		drop(injector.submit("side.effect()".into()));

		tokio::task::yield_now().await;
		assert_eq!(host.scripts().len(), 1);
	}
}
