pub mod side;
pub mod types;

pub use side::{LegendPosition, Side, SideMap};
pub use types::{Rect, Size};
