//! Unit tests for the directory module.

mod catalog_tests;
mod roster_tests;
