pub mod components;
pub mod constants;
pub mod engine;
pub mod min_size;
pub mod options;
pub mod plot_layout;
pub mod settings;
pub mod snapshot;

pub use crate::components::{CanvasFrame, LegendSpec, PlotComponents, ScaleSpec, TextLabel};
pub use crate::engine::{compute_layout, LayoutResult, Region};
pub use crate::options::LayoutOptions;
pub use crate::plot_layout::PlotLayout;
pub use crate::settings::LayoutSettings;
pub use crate::snapshot::MeasurementSnapshot;

pub use plotframe_common::{LegendPosition, Rect, Side, SideMap, Size};

#[cfg(test)]
pub mod test_utils;
