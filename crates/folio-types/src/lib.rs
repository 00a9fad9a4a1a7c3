//! Foundation types for folio.
//!
//! This crate holds the types shared by the interpreter core and the
//! front-end: the error enum, platform-agnostic key events, and the site
//! configuration (prompt, navigable pages, profile content).

pub mod config;
pub mod error;
pub mod input;
