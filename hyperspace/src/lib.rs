//! Gravity in any number of dimensions.
//!
//! A [`World`] integrates point masses that pull on each other, merges the
//! ones that touch and records their trajectories. The [`render`] side
//! projects a world down through a chain of cameras, one dimension at a
//! time, and orders the result for drawing without a depth buffer.

pub mod camera;
pub mod color;
pub mod constants;
pub mod error;
pub mod math;
pub mod parameters;
pub mod presets;
pub mod render;
mod session;
mod sim;

pub use color::Color;
pub use error::{Error, Result};
pub use math::{Vector, VectorN};
pub use parameters::SimParams;
pub use session::{DisplayOptions, Scene, Session};
pub use sim::{
    Body, BodyId, ElapsedTime, IntegrationMethod, StagedState, TrajectoryRecorder, World,
    compute_elapsed_time, hyperball_radius,
};
