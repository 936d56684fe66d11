//! The difficulty model.
//!
//! [`plan`] slices a chart into intervals, [`hand`], [`patterns`] and [`jack`]
//! model what makes each interval hard, [`solver`] inverts score to skill and
//! [`pipeline`] turns the solved skills into a [`Rating`].

pub mod hand;
pub mod jack;
pub mod metrics;
pub mod patterns;
pub mod pipeline;
pub mod plan;
pub mod solver;
pub mod types;

pub use pipeline::RatingContext;
pub use plan::IntervalPlan;
pub use types::{ChiselType, Rating, SkillCategory};
