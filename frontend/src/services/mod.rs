//! Remote services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`contact`] - Contact request submission to the remote endpoint

pub mod contact;

pub use contact::*;
