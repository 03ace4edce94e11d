//! Unit tests for the project module.

mod lifecycle_tests;
