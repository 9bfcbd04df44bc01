//! Core support for cellmouse
//!
//! Configuration loading, logging setup and the shared error type.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
