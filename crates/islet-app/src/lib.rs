//! Shared library module for the islet command-line app.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod args;
pub mod render;
pub mod runner;
pub mod version;
