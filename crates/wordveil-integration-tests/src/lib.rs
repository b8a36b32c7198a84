//! End-to-end integration tests for WordVeil
//!
//! These tests wire the word-list loader and the masking core together to
//! verify the full flow from a keyword file on disk to masked output.
