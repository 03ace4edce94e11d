//! Unit tests for the stage module.

mod domain_tests;
