//! Library crate for library-checkout.
//!
//! This crate exposes the building blocks of the console simulator:
//! - Books and the genre-indexed catalog (`catalog`)
//! - The borrowing user (`user`)
//! - Session state and the menu loop (`app`)
//! - Text rendering (`ui`)
//! - Error and result types (`error`)
//!
//! It is used by the `library-checkout` binary and by tests.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod catalog;
pub mod error;
pub mod ui;
pub mod user;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, LibraryError, Result};
