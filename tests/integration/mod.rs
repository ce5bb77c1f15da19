//! Integration tests for tabdeck
//!
//! These tests drive whole close/reopen/navigate flows over session
//! snapshots the way a UI event handler would.

#[path = "../common/mod.rs"]
pub mod common;

pub mod properties;
pub mod unified_tabs;
