//! Logging utilities.
//!
//! The library itself only talks to the `log` facade. Binaries and tests that
//! want output call [`init_logging`] once, early.

mod init;

pub use init::{LoggingConfig, init_logging};
