//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement use cases.

pub mod char_counter;
pub mod composite_count;
pub mod typo_search;
