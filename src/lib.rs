pub mod api;
pub mod calc;
pub mod chart;
pub mod config;
pub mod error;

pub use api::{compute_difficulty_at, compute_difficulty_curve, engine_version, Calc};
pub use calc::{Rating, SkillCategory};
pub use chart::{Chart, NoteEvent};
