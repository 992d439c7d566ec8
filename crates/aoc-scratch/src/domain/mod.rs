//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod composite;
pub mod lcm;
pub mod marker;
pub mod substitution;
