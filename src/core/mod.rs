//! Core functionality shared by every subsystem.

#[macro_use]
pub mod utils;

pub mod error;
