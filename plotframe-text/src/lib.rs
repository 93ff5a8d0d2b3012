pub mod error;
pub mod measurement;
pub mod types;

pub use measurement::{TextBounds, TextMeasurementConfig, TextMeasurer};
pub use types::{FontSpec, Text};
