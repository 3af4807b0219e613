//! Integration test suite for Folio page behavior.
//!
//! Drives the full startup sequence against an in-memory page laid out like
//! the stock portfolio markup, then exercises clicks, scrolling, and reveal
//! animations the way a visitor would.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
