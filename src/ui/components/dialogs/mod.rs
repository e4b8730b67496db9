//! Dialog components module
//!
//! Shared building blocks used by the modal dialog component.

pub mod common;
