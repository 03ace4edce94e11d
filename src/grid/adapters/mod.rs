//! Adapter implementations for grid ports.

pub mod memory;
