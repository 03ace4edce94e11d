//! Adapter implementations for stage ports.

pub mod memory;
