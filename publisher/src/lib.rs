//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate keeps a registry of listeners and fans events of type `T`
//! out to all of them. The session controller uses it to tell UI collaborators
//! that a session started, stopped, or that the elapsed-time display changed.
//!
//! ### Example
//!
//! ```
//! use std::sync::Arc;
//! use common::SessionEvent;
//! use publisher::{Listener, Publishable, Publisher};
//!
//! let publisher = Publisher::<SessionEvent>::new();
//! let mut listener = Listener::new(|_id, event: Arc<SessionEvent>| {
//!     println!("session event: {:?}", event);
//! });
//!
//! let id = publisher.register_listener(&mut listener);
//! publisher.notify_listeners(Arc::new(SessionEvent::Started));
//! publisher.unregister_listener(id);
//! assert!(publisher.is_empty());
//! ```

pub mod listener;
pub mod macros;
pub mod publisher;

pub use listener::Listener;
pub use publisher::{Publishable, Publisher};
