//! UI Components for the portfolio page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Fixed navigation bar
//! - [`Hero`] - Full-height banner with call to action
//! - [`Footer`] - Copyright and social links
//!
//! # Feature Components
//! - [`PortfolioSection`] - Static gallery grid
//! - [`ContactSection`] - Contact form and its submission
//! - [`Toaster`] - Notification stack

mod header;
mod hero;
mod portfolio;
mod contact;
mod toast;
mod footer;

pub use header::*;
pub use hero::*;
pub use portfolio::*;
pub use contact::*;
pub use toast::*;
pub use footer::*;
