//! Property-based tests for geometry and configuration.
