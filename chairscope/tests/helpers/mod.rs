//! Test helper utilities
//!
//! Shared in-memory platform fixture for chairscope pipeline tests.

#![allow(dead_code)]

pub mod fixture_platform;

pub use fixture_platform::{note, note_with_replies, reply, FixturePlatform};
