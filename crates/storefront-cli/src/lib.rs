//! storefront CLI library
//!
//! The binary in `main.rs` is a thin shell over these modules so the
//! command implementations can be exercised from tests.

pub mod cli;
pub mod commands;
pub mod logging;
