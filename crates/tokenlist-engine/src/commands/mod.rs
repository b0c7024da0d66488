//! Engine commands

pub mod generate;
