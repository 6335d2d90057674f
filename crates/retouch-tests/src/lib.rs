//! Integration tests for the retouch crates.
//!
//! End-to-end checks of load -> edit -> export across `retouch-core`,
//! `retouch-io` and `retouch-editor`.
