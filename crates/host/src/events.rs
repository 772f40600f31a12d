//! Load-completion events and the handler registry page hosts dispatch into.
//!
//! Handlers are stored in an [`IndexMap`] keyed by globally-unique ids, so
//! removal is O(1) and dispatch preserves registration order. Registration
//! returns a [`Subscription`] that unregisters the handler when dropped.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;

/// Unique identifier for event handlers.
pub type HandlerId = u64;

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a new globally-unique handler ID.
pub fn next_handler_id() -> HandlerId {
	NEXT_HANDLER_ID.fetch_add(1, Ordering::SeqCst)
}

/// Signal that a navigation attempt finished.
///
/// `ok` is the engine's success flag: `false` covers network errors, TLS
/// failures, and aborted loads alike. The shell never retries on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFinished {
	/// URL the page ended up on.
	pub url: String,
	/// Whether the load completed successfully.
	pub ok: bool,
}

impl LoadFinished {
	/// Convenience constructor for a successful load of `url`.
	pub fn ok(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			ok: true,
		}
	}

	/// Convenience constructor for a failed load of `url`.
	pub fn failed(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			ok: false,
		}
	}
}

/// Boxed async handler future.
pub type HandlerFuture = Pin<Box<dyn Future<Output = crate::Result<()>> + Send>>;

/// Handler function mapping an event to a boxed handler future.
pub type HandlerFn<E> = Arc<dyn Fn(E) -> HandlerFuture + Send + Sync>;

/// A registered event handler.
pub struct HandlerEntry<E> {
	pub id: HandlerId,
	pub handler: HandlerFn<E>,
}

impl<E> Clone for HandlerEntry<E> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			handler: Arc::clone(&self.handler),
		}
	}
}

/// Handler storage: [`IndexMap`] for O(1) removal with stable insertion order.
pub type HandlerMap<E> = Arc<Mutex<IndexMap<HandlerId, HandlerEntry<E>>>>;

/// Registry for load-completion handlers, owned by a page host.
///
/// Engines call [`LoadEvents::emit`] once per finished navigation attempt;
/// the shell registers its controller through
/// [`LoadEvents::on_load_finished`].
#[derive(Clone, Default)]
pub struct LoadEvents {
	handlers: HandlerMap<LoadFinished>,
}

impl LoadEvents {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			handlers: Arc::new(Mutex::new(IndexMap::new())),
		}
	}

	/// Registers a load-completion handler.
	///
	/// Returns a [`Subscription`] that unregisters the handler when dropped.
	pub fn on_load_finished<F, Fut>(&self, handler: F) -> Subscription
	where
		F: Fn(LoadFinished) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = crate::Result<()>> + Send + 'static,
	{
		let id = next_handler_id();
		let handler: HandlerFn<LoadFinished> =
			Arc::new(move |event: LoadFinished| -> HandlerFuture { Box::pin(handler(event)) });

		self.handlers.lock().insert(id, HandlerEntry { id, handler });

		Subscription::from_handler_map(id, &self.handlers)
	}

	/// Dispatches a load-completion event to all handlers in registration order.
	///
	/// Handler errors are logged and do not stop dispatch to later handlers.
	pub async fn emit(&self, event: LoadFinished) {
		let handlers: Vec<_> = {
			let map = self.handlers.lock();
			map.values().map(|e| (e.id, e.handler.clone())).collect()
		};

		for (id, handler) in handlers {
			if let Err(e) = handler(event.clone()).await {
				tracing::error!(error = %e, handler_id = id, url = %event.url, "Load handler error");
			}
		}
	}

	/// Returns the number of registered handlers.
	pub fn len(&self) -> usize {
		self.handlers.lock().len()
	}

	/// Returns `true` when no handlers are registered.
	pub fn is_empty(&self) -> bool {
		self.handlers.lock().is_empty()
	}
}

/// RAII handle that unregisters an event handler on drop.
///
/// Holds a weak reference to the handler map, so dropping after the owning
/// host is gone is safe (becomes a no-op).
pub struct Subscription {
	id: HandlerId,
	dropper: Option<Arc<dyn Fn(HandlerId) + Send + Sync>>,
}

impl Subscription {
	/// Creates a subscription with a custom dropper function.
	pub fn new(id: HandlerId, dropper: Arc<dyn Fn(HandlerId) + Send + Sync>) -> Self {
		Self {
			id,
			dropper: Some(dropper),
		}
	}

	/// Creates a subscription from a handler map using a weak reference.
	pub fn from_handler_map<E>(id: HandlerId, handlers: &HandlerMap<E>) -> Self
	where
		E: Send + Sync + 'static,
	{
		let weak: Weak<Mutex<IndexMap<HandlerId, HandlerEntry<E>>>> = Arc::downgrade(handlers);
		let dropper = Arc::new(move |id: HandlerId| {
			if let Some(map) = weak.upgrade() {
				map.lock().shift_remove(&id);
			}
		});
		Self::new(id, dropper)
	}

	/// Returns this subscription's handler ID.
	pub fn id(&self) -> HandlerId {
		self.id
	}

	/// Explicitly unsubscribes. Equivalent to dropping.
	pub fn unsubscribe(mut self) {
		if let Some(dropper) = self.dropper.take() {
			(dropper)(self.id);
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(dropper) = self.dropper.take() {
			(dropper)(self.id);
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.dropper.is_some())
			.finish()
	}
}
