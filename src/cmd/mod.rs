pub mod curve;
pub mod rate;
