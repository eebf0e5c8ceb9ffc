//! Coact API service library.
//!
//! The binary in main.rs is a thin shell over [`setup::initialize_app`];
//! everything else lives here so integration tests can build the router and
//! state directly.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
