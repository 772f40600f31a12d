//! The operation surface behind the shell's buttons and menus.

mod shortcuts;

pub use shortcuts::{Shortcut, project_id};

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use wsim_host::PageHost;

use crate::config::ShellConfig;
use crate::error::{Error, Result};
use crate::inject::ScriptInjector;
use crate::plugin::{self, PluginRef};
use crate::scripts::{self, ProjectFeature};

/// High-level navigation actions over a page host.
///
/// One instance per shell window. Everything here resolves a destination
/// (or a script) and hands it to the host; load-completion reactions live
/// in [`NavigationController`](crate::controller::NavigationController).
pub struct Navigator {
	host: Arc<dyn PageHost>,
	injector: ScriptInjector,
	start_url: String,
}

impl Navigator {
	pub fn new(host: Arc<dyn PageHost>, config: &ShellConfig) -> Self {
		Self {
			injector: ScriptInjector::new(Arc::clone(&host)),
			host,
			start_url: config.start_url.clone(),
		}
	}

	/// URL the view currently displays.
	pub fn current_url(&self) -> String {
		self.host.current_url()
	}

	/// Navigates to the configured start URL.
	pub async fn home(&self) -> Result<()> {
		self.navigate(&self.start_url).await
	}

	/// Manual reload passthrough.
	pub async fn reload(&self) -> Result<()> {
		tracing::info!("Reloading current page");
		self.host.reload().await?;
		Ok(())
	}

	/// Navigates to an absolute `url`.
	pub async fn navigate(&self, url: &str) -> Result<()> {
		tracing::info!(url, "Navigating");
		self.host.navigate(url).await?;
		Ok(())
	}

	/// Activates the plugin `owner`/`name` on the current page.
	///
	/// Composes the plugin URL from the current one (replacing any active
	/// plugin), navigates there, and returns the composed URL for
	/// confirmation display.
	pub async fn apply_plugin(&self, owner: &str, name: &str) -> Result<String> {
		let url = plugin::compose(&self.current_url(), owner, name)?;
		self.navigate(&url).await?;
		Ok(url)
	}

	/// Activates a preset plugin by id (`@owner/name` or bare name).
	pub async fn apply_preset(&self, id: &str) -> Result<String> {
		let preset = plugin::preset(id)
			.ok_or_else(|| Error::validation(format!("unknown plugin preset '{id}'")))?;
		let url = preset.apply_to(&self.current_url());
		self.navigate(&url).await?;
		Ok(url)
	}

	/// The plugin encoded in the current URL, when any.
	pub fn active_plugin_param(&self) -> Option<String> {
		let url = self.current_url();
		url.find(plugin::PLUGIN_QUERY_PREFIX)
			.map(|idx| url[idx + plugin::PLUGIN_QUERY_PREFIX.len()..].to_string())
			.filter(|param| !param.is_empty())
	}

	/// Jumps to a site destination.
	pub async fn open(&self, shortcut: Shortcut) -> Result<String> {
		let url = shortcut.resolve(&self.current_url())?;
		self.navigate(&url).await?;
		Ok(url)
	}

	/// Flips a feature flag of the project open in the current URL.
	///
	/// Returns the submission handle; awaiting it yields the site's
	/// acknowledgment (`Some(true)` on success, `None` when the script
	/// never resolved). Fails with [`Error::NoActiveProject`] before
	/// submitting anything when no project is open.
	pub fn toggle_feature(&self, feature: ProjectFeature) -> Result<JoinHandle<Option<Value>>> {
		let id = project_id(&self.current_url()).ok_or(Error::NoActiveProject)?;
		tracing::info!(project = %id, feature = %feature, "Toggling project feature");
		Ok(self
			.injector
			.submit(scripts::toggle_project_feature(&id, feature)))
	}

	/// Opens the site's database panel, scoped to the current project when
	/// one is open.
	pub fn show_database_panel(&self) -> JoinHandle<Option<Value>> {
		let id = project_id(&self.current_url());
		tracing::info!(project = ?id, "Opening database panel");
		self.injector.submit(scripts::database_panel(id.as_deref()))
	}

	/// Known plugin presets, for menu display.
	pub fn presets(&self) -> Vec<PluginRef> {
		plugin::presets()
	}
}

impl std::fmt::Debug for Navigator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Navigator")
			.field("start_url", &self.start_url)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use crate::testing::MockHost;

	use super::*;

	fn navigator_at(url: &str) -> (Arc<MockHost>, Navigator) {
		let host = Arc::new(MockHost::at(url));
		let navigator = Navigator::new(host.clone(), &ShellConfig::default());
		(host, navigator)
	}

	#[tokio::test]
	async fn home_navigates_to_start_url() {
		let (host, navigator) = navigator_at("https://websim.ai/project/abc");
		navigator.home().await.unwrap();
		assert_eq!(host.navigations(), ["https://websim.ai"]);
	}

	#[tokio::test]
	async fn apply_plugin_composes_from_current_url() {
		let (host, navigator) = navigator_at("https://websim.ai/project/abc");

		let url = navigator.apply_plugin("hintbl0ck", "edit5").await.unwrap();
		assert_eq!(url, "https://websim.ai/project/abc?plugin=@hintbl0ck/edit5");
		assert_eq!(host.navigations(), [url.clone()]);
		assert_eq!(host.current_url(), url);
	}

	#[tokio::test]
	async fn apply_plugin_replaces_active_plugin() {
		let (_host, navigator) = navigator_at("https://websim.ai/x?plugin=@a/b");

		let url = navigator.apply_plugin("@c", "d").await.unwrap();
		assert_eq!(url, "https://websim.ai/x?plugin=@c/d");
		assert_eq!(navigator.active_plugin_param(), Some("@c/d".to_string()));
	}

	#[tokio::test]
	async fn invalid_plugin_input_navigates_nowhere() {
		let (host, navigator) = navigator_at("https://websim.ai");

		let err = navigator.apply_plugin("@", "name").await.unwrap_err();
		assert!(matches!(err, Error::Validation(_)));
		assert!(host.navigations().is_empty());
	}

	#[tokio::test]
	async fn apply_preset_rejects_unknown_ids() {
		let (host, navigator) = navigator_at("https://websim.ai");

		let url = navigator.apply_preset("@Trey6383/injectify").await.unwrap();
		assert_eq!(url, "https://websim.ai?plugin=@Trey6383/injectify");

		let err = navigator.apply_preset("@nobody/nothing").await.unwrap_err();
		assert!(matches!(err, Error::Validation(_)));
		assert_eq!(host.navigations().len(), 1);
	}

	#[tokio::test]
	async fn open_resolves_against_current_project() {
		let (host, navigator) = navigator_at("https://websim.ai/project/abc/edit");

		let url = navigator.open(Shortcut::Analytics).await.unwrap();
		assert_eq!(url, "https://websim.ai/project/abc/analytics");
		assert_eq!(host.navigations(), [url]);
	}

	#[tokio::test]
	async fn toggle_feature_needs_an_open_project() {
		let (host, navigator) = navigator_at("https://websim.ai/projects/me");

		let err = navigator.toggle_feature(ProjectFeature::Api).unwrap_err();
		assert!(matches!(err, Error::NoActiveProject));
		assert!(host.scripts().is_empty());
	}

	#[tokio::test]
	async fn toggle_feature_submits_the_toggle_script() {
		let (host, navigator) = navigator_at("https://websim.ai/project/abc/edit");
		host.set_script_result(serde_json::json!(true));

		let ack = navigator
			.toggle_feature(ProjectFeature::Multiplayer)
			.unwrap()
			.await
			.unwrap();

		assert_eq!(ack, Some(serde_json::json!(true)));
		let scripts = host.scripts();
		assert_eq!(scripts.len(), 1);
		assert!(scripts[0].contains("enableMultiplayer"));
		assert!(scripts[0].contains(r#""abc""#));
	}

	#[tokio::test]
	async fn database_panel_is_scoped_when_a_project_is_open() {
		let (host, navigator) = navigator_at("https://websim.ai/project/abc");

		navigator.show_database_panel().await.unwrap();
		assert!(host.scripts()[0].contains(r#"})("abc");"#));

		let (bare_host, bare_navigator) = navigator_at("https://websim.ai");
		bare_navigator.show_database_panel().await.unwrap();
		assert!(bare_host.scripts()[0].contains(r#"})("");"#));
	}

	#[tokio::test]
	async fn navigation_failures_surface_as_host_errors() {
		let (host, navigator) = navigator_at("https://websim.ai");
		host.set_navigation_error("connection refused");

		let err = navigator.home().await.unwrap_err();
		assert!(matches!(err, Error::Host(_)));
	}

	#[test]
	fn preset_menu_matches_registry() {
		let host = Arc::new(MockHost::new());
		let navigator = Navigator::new(host, &ShellConfig::default());
		assert_eq!(navigator.presets().len(), 4);
	}
}
