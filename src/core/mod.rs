//! Core domain logic for reuse
//!
//! This module contains pure data and pure functions with no I/O.
//!
//! ## Architecture
//!
//! - `models/` - Licensing facts about a file and where they came from
//! - `services/` - Path classification deciding what a scan looks at
//!
//! Both halves are leaves: collaborators classify paths, extract records from
//! the files that survive, then fold records for the same target together.

pub mod models;
pub mod services;
