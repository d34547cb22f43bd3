//! # Crate transmitter-rs
//!
//! ## transmitter-rs
//!
//! The `transmitter-rs` crate delivers finished sessions to a remote collector over HTTP.
//!
//! Features include:
//! - `GET {base_url}/start` announcement when a session begins.
//! - `POST {base_url}/end` with the full session record as JSON
//!   (`Content-Type: application/json; charset=utf-8`).
//! - One reqwest client per transmitter with a bounded request timeout.
//! - Detached dispatch: the caller never waits for the network, errors are logged in the task.
//! - An in-memory collector for tests and demos.
//!
//! **NOTE** Delivery is attempted exactly once. Nothing is retried or persisted.

pub mod adapters;
pub mod errors;
pub(crate) mod http_client;
pub mod ports;
pub mod services;
pub mod wire;

pub use adapters::{mock::CollectorMock, production::Collector};
pub use errors::TransmitError;
pub use ports::CollectorPort;
pub use services::{http_transmitter, mock_transmitter, Transmitter};
