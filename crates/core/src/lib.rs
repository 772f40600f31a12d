//! wsim: session and navigation core for a websim.ai desktop shell.
//!
//! The shell wraps an embedded web engine pointed at one site. This crate
//! owns everything between the UI and the engine seam:
//!
//! - [`Session`]: the persistent browsing profile (cookies, cache, spoofed
//!   browser identity) and its maintenance operations.
//! - [`InjectedHeaderSet`]: client-hint headers applied to every outgoing
//!   request.
//! - [`plugin`]: deterministic `?plugin=@owner/name` URL composition.
//! - [`NavigationController`]: reacts to load completion with a one-shot
//!   delayed reload and feedback-badge injection.
//! - [`Navigator`]: the actions behind the shell's buttons and menus.
//!
//! The engine itself stays behind [`wsim_host::PageHost`]; any adapter
//! implementing that trait can drive this crate.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wsim::{NavigationController, Navigator, Session, ShellConfig};
//!
//! async fn run(host: Arc<dyn wsim_host::PageHost>) -> wsim::Result<()> {
//!     let config = ShellConfig::default();
//!     let session = Session::initialize(&config)?;
//!
//!     let controller = NavigationController::new(Arc::clone(&host), &config);
//!     let _events = controller.attach();
//!
//!     let navigator = Navigator::new(host, &config);
//!     navigator.home().await?;
//!
//!     let _ = session;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod headers;
pub mod inject;
pub mod navigator;
pub mod plugin;
pub mod scripts;
pub mod session;
pub mod testing;

pub use config::{DEFAULT_CACHE_MAX_BYTES, DEFAULT_RELOAD_DELAY, DEFAULT_START_URL, ShellConfig};
pub use controller::{LoadPhase, NavigationController};
pub use error::{Error, Result};
pub use headers::{DEFAULT_CHROME_VERSION, InjectedHeaderSet};
pub use inject::ScriptInjector;
pub use navigator::{Navigator, Shortcut};
pub use plugin::PluginRef;
pub use scripts::ProjectFeature;
pub use session::{CookiePolicy, ProfileStatus, Session, SettingsUpdate};

// Re-export the host seam so embedders depend on one crate.
pub use wsim_host;
