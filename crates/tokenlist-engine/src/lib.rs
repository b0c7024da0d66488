//! Token List Engine - orchestration of one generator run
//!
//! Ties the store (loading, reading, writing) to the core decision logic
//! (diff, bump, manifest assembly) and owns the operation boundary logging.

pub mod commands;

pub use commands::generate::{
    generate, generate_with_progress, FirstPublishReason, GenerateOutcome, Progress,
};
