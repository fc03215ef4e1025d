//! Monthly production target projection.
//!
//! The core operation is [`plan::generate_plan`], which compounds a starting
//! production value by a fixed percentage each month and floors every
//! intermediate result.

pub mod plan;

pub use plan::generate_plan;
