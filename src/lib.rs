//! fxconvert library
//!
//! Converts amounts between currencies at historical exchange rates, with a
//! local rate cache and an append-only log of conversions. The binary drives
//! an interactive `session::Session`; the modules are public for integration
//! tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod convert;
pub mod currency;
pub mod output;
pub mod rates;
pub mod resolver;
pub mod session;
pub mod validate;
