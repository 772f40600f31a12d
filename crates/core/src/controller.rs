//! Load-completion orchestration.
//!
//! Two jobs, both driven by the host's load-completion events:
//!
//! 1. One-shot reload: the first successful load arms a delayed forced
//!    reload (websim.ai renders stale shells until a second fetch after
//!    the profile warms up). Exactly once per process lifetime.
//! 2. Feedback badge: any successful load whose URL carries the watched
//!    plugin parameter gets the badge script injected.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use wsim_host::{LoadFinished, PageHost, Subscription};

use crate::config::ShellConfig;
use crate::inject::ScriptInjector;
use crate::plugin::PluginRef;
use crate::scripts;

/// Load phase. Advances monotonically, never resets within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
	/// No successful load seen yet; the next one arms the reload.
	AwaitingFirstLoad,
	/// The one-shot reload is armed or in flight.
	ReloadScheduled,
	/// The reload has been issued; only badge checks remain.
	Steady,
}

/// Orchestrates the one-shot reload and badge injection.
///
/// Register on the host with [`NavigationController::attach`] and keep the
/// returned [`Subscription`] alive for as long as events should be handled.
pub struct NavigationController {
	host: Arc<dyn PageHost>,
	injector: ScriptInjector,
	phase: Arc<Mutex<LoadPhase>>,
	watched_plugin: PluginRef,
	watched_param: String,
	reload_delay: Duration,
}

impl NavigationController {
	pub fn new(host: Arc<dyn PageHost>, config: &ShellConfig) -> Arc<Self> {
		Arc::new(Self {
			injector: ScriptInjector::new(Arc::clone(&host)),
			host,
			phase: Arc::new(Mutex::new(LoadPhase::AwaitingFirstLoad)),
			watched_param: config.watched_plugin.query_param(),
			watched_plugin: config.watched_plugin.clone(),
			reload_delay: config.reload_delay,
		})
	}

	/// Subscribes this controller to the host's load-completion events.
	pub fn attach(self: &Arc<Self>) -> Subscription {
		let controller = Arc::clone(self);
		self.host.load_events().on_load_finished(move |event| {
			let controller = Arc::clone(&controller);
			async move {
				controller.handle_load_finished(&event);
				Ok(())
			}
		})
	}

	/// Reacts to one load-completion event.
	///
	/// Failed loads change nothing. Successful loads are first checked for
	/// the watched plugin, then fed to the phase machine.
	pub fn handle_load_finished(&self, event: &LoadFinished) {
		if !event.ok {
			tracing::debug!(url = %event.url, "Load failed; leaving state untouched");
			return;
		}

		if event.url.contains(&self.watched_param) {
			tracing::debug!(plugin = %self.watched_plugin, "Watched plugin active; injecting badge");
			let _ = self.injector.submit(scripts::plugin_badge(&self.watched_plugin));
		}

		// Arming is a guarded transition: a second success racing in before
		// the timer fires must not schedule a second reload.
		let mut phase = self.phase.lock();
		if *phase == LoadPhase::AwaitingFirstLoad {
			*phase = LoadPhase::ReloadScheduled;
			drop(phase);
			self.arm_reload();
		}
	}

	/// Current load phase.
	pub fn phase(&self) -> LoadPhase {
		*self.phase.lock()
	}

	/// The plugin whose presence triggers badge injection.
	pub fn watched_plugin(&self) -> &PluginRef {
		&self.watched_plugin
	}

	fn arm_reload(&self) {
		let host = Arc::clone(&self.host);
		let phase = Arc::clone(&self.phase);
		let delay = self.reload_delay;
		tracing::debug!(delay_ms = delay.as_millis() as u64, "One-shot reload armed");

		tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			tracing::info!("Issuing one-shot reload");
			if let Err(e) = host.reload().await {
				// Fire-and-forget: a failed forced reload is not retried.
				tracing::warn!(error = %e, "One-shot reload failed");
			}
			*phase.lock() = LoadPhase::Steady;
		});
	}
}

impl std::fmt::Debug for NavigationController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationController")
			.field("phase", &self.phase())
			.field("watched_plugin", &self.watched_plugin)
			.field("reload_delay", &self.reload_delay)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use crate::testing::MockHost;

	use super::*;

	fn controller_with_host() -> (Arc<MockHost>, Arc<NavigationController>) {
		let host = Arc::new(MockHost::new());
		let controller = NavigationController::new(host.clone(), &ShellConfig::default());
		(host, controller)
	}

	#[tokio::test]
	async fn failed_load_changes_nothing() {
		let (host, controller) = controller_with_host();

		controller.handle_load_finished(&LoadFinished::failed("https://websim.ai"));

		assert_eq!(controller.phase(), LoadPhase::AwaitingFirstLoad);
		tokio::task::yield_now().await;
		assert_eq!(host.reload_count(), 0);
		assert!(host.scripts().is_empty());
	}

	#[tokio::test]
	async fn first_success_arms_the_reload() {
		let (_host, controller) = controller_with_host();

		controller.handle_load_finished(&LoadFinished::ok("https://websim.ai"));
		assert_eq!(controller.phase(), LoadPhase::ReloadScheduled);
	}

	#[tokio::test]
	async fn badge_requires_watched_plugin_parameter() {
		let (host, controller) = controller_with_host();

		controller
			.handle_load_finished(&LoadFinished::ok("https://websim.ai/x?plugin=@someone/else"));
		tokio::task::yield_now().await;
		assert!(host.scripts().is_empty());

		controller.handle_load_finished(&LoadFinished::ok(
			"https://websim.ai/x?plugin=@Trey6383/test123",
		));
		tokio::task::yield_now().await;

		let scripts = host.scripts();
		assert_eq!(scripts.len(), 1);
		assert!(scripts[0].contains("Plugin: test123 by @Trey6383"));
	}

	#[tokio::test]
	async fn badge_fires_on_every_matching_load() {
		let (host, controller) = controller_with_host();
		let url = "https://websim.ai/x?plugin=@Trey6383/test123";

		for _ in 0..3 {
			controller.handle_load_finished(&LoadFinished::ok(url));
		}
		tokio::task::yield_now().await;

		assert_eq!(host.scripts().len(), 3);
	}

	#[tokio::test]
	async fn attach_feeds_host_events_into_the_controller() {
		let (host, controller) = controller_with_host();
		let _sub = controller.attach();

		host.finish_load("https://websim.ai", true).await;

		assert_eq!(controller.phase(), LoadPhase::ReloadScheduled);
	}

	#[tokio::test]
	async fn dropping_the_subscription_detaches() {
		let (host, controller) = controller_with_host();
		drop(controller.attach());

		host.finish_load("https://websim.ai", true).await;

		assert_eq!(controller.phase(), LoadPhase::AwaitingFirstLoad);
	}
}
