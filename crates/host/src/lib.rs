//! wsim-host: engine-facing seam for the wsim shell.
//!
//! The shell core is engine-agnostic. This crate defines the narrow surface
//! an embedded web engine must provide (navigation, reload, script
//! execution, load-completion events, and a mutable view of outgoing
//! requests) without depending on any engine.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wsim_host::{LoadFinished, PageHost};
//!
//! async fn watch(host: Arc<dyn PageHost>) {
//!     let _sub = host.load_events().on_load_finished(|event: LoadFinished| async move {
//!         println!("finished: {} ok={}", event.url, event.ok);
//!         Ok(())
//!     });
//!
//!     host.navigate("https://websim.ai").await.unwrap();
//! }
//! ```

pub mod error;
pub mod events;
pub mod page;
pub mod request;

pub use error::{HostError, Result};
pub use events::{
	HandlerEntry, HandlerFn, HandlerFuture, HandlerId, HandlerMap, LoadEvents, LoadFinished,
	Subscription, next_handler_id,
};
pub use page::PageHost;
pub use request::OutgoingRequest;
