use crate::constants::{DEFAULT_CANVAS_MARGIN, DEFAULT_SPACING, MIN_CANVAS_MARGIN};
use plotframe_common::{LegendPosition, Side, SideMap};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Long-lived layout preferences of a plot
///
/// The setters clamp their input. Settings built field by field (or
/// deserialized) are clamped the same way by [`LayoutSettings::normalized`]
/// when they are handed to a [`crate::PlotLayout`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    /// Distance between the plot components
    pub spacing: f32,
    /// Space between the canvas border and the scale ticks, per side.
    /// Ignored on sides where the canvas is aligned to the scales.
    pub canvas_margin: SideMap<f32>,
    /// Align the canvas to the ends of the scale backbones instead of
    /// extending it into the scale border distances
    pub align_canvas: SideMap<bool>,
    pub legend_position: LegendPosition,
    /// Upper bound of the legend size relative to the bounding rectangle, in (0, 1]
    pub legend_ratio: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            canvas_margin: SideMap::splat(DEFAULT_CANVAS_MARGIN),
            align_canvas: SideMap::splat(false),
            legend_position: LegendPosition::default(),
            legend_ratio: LegendPosition::default().default_ratio(),
        }
    }
}

impl LayoutSettings {
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing.max(0.0);
    }

    /// Change the canvas margin of one side, or of all sides when `side` is `None`.
    /// Margins below -1 are raised to -1.
    pub fn set_canvas_margin(&mut self, margin: f32, side: Option<Side>) {
        let margin = margin.max(MIN_CANVAS_MARGIN);
        match side {
            Some(side) => self.canvas_margin[side] = margin,
            None => self.canvas_margin = SideMap::splat(margin),
        }
    }

    pub fn canvas_margin(&self, side: Side) -> f32 {
        self.canvas_margin[side]
    }

    /// `side` names the border of the plot, not the scales being aligned:
    /// aligning `Side::Left` aligns the left ends of the top and bottom scales.
    pub fn set_align_canvas_to_scale(&mut self, side: Side, on: bool) {
        self.align_canvas[side] = on;
    }

    pub fn set_align_canvas_to_scales(&mut self, on: bool) {
        self.align_canvas = SideMap::splat(on);
    }

    pub fn align_canvas_to_scale(&self, side: Side) -> bool {
        self.align_canvas[side]
    }

    /// Move the legend. A `ratio` above 1 is capped to 1, a non-positive one
    /// falls back to the default ratio of the position.
    pub fn set_legend_position(&mut self, position: LegendPosition, ratio: f32) {
        self.legend_position = position;
        self.legend_ratio = clamp_legend_ratio(position, ratio);
    }

    pub fn set_legend_ratio(&mut self, ratio: f32) {
        self.set_legend_position(self.legend_position, ratio);
    }

    /// Copy with every value clamped into its valid range
    pub fn normalized(&self) -> Self {
        let mut settings = self.clone();
        settings.set_spacing(self.spacing);
        settings.canvas_margin = self.canvas_margin.map(|_, m| m.max(MIN_CANVAS_MARGIN));
        settings.set_legend_position(self.legend_position, self.legend_ratio);

        if settings != *self {
            tracing::debug!(original = ?self, clamped = ?settings, "clamped layout settings");
        }
        settings
    }
}

fn clamp_legend_ratio(position: LegendPosition, ratio: f32) -> f32 {
    if ratio > 1.0 {
        1.0
    } else if ratio > 0.0 {
        ratio
    } else {
        position.default_ratio()
    }
}
