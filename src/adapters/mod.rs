//! Adapter implementations of the store ports.

pub mod memory;
