//! Observability subsystem.
//!
//! Only structured logging lives here. The configuration core never logs;
//! the binary installs the subscriber once the configuration is known.

pub mod logging;
