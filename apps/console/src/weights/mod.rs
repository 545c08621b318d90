// Weight sliders: criteria, enable flags and the sum-to-100 normalization.

pub mod model;

pub use model::{WeightCriterion, WeightModel};
