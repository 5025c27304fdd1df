//! CLI library components for datastandard reports.

pub mod commands;
pub mod logging;
pub mod render;
