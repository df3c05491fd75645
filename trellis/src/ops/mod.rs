//! Core operations.
//!
//! This module contains the business logic for trellis commands,
//! separated from CLI argument parsing and output rendering.

pub mod info;
pub mod list;
pub mod new;

pub use info::info;
pub use list::list;
pub use new::{generate, preview};
