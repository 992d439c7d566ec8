//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file and stdin access.

pub mod line_source;
