//! Geometry of a single layout pass.
//!
//! ```text
//! +---+-----------+---+
//! |       Title       |
//! +---+-----------+---+
//! |   |   Scale   |   |
//! +---+-----------+---+
//! | S |           | S |
//! | c |  Canvas   | c |
//! | a |           | a |
//! | l |           | l |
//! | e |           | e |
//! +---+-----------+---+
//! |   |   Scale   |   |
//! +---+-----------+---+
//! |      Footer       |
//! +---+-----------+---+
//! ```
//!
//! The legend is cut away from the bounding rectangle first, the rest is
//! shared by the strips above once their line breaks are known.

mod align;
mod legend;
mod line_breaks;

pub use align::align_scales;
pub use line_breaks::{expand_line_breaks, LineBreakDims};

use crate::options::LayoutOptions;
use crate::settings::LayoutSettings;
use crate::snapshot::MeasurementSnapshot;
use plotframe_common::{Rect, Side, SideMap};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A placed component of the plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Title,
    Footer,
    Legend,
    Canvas,
    /// Scale slot on a side, counted from the first scale added to it
    Scale(Side, usize),
}

/// Rectangles computed by a layout pass
///
/// Components that are hidden, ignored or didn't fit keep an empty rectangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub title: Rect,
    pub footer: Rect,
    pub legend: Rect,
    pub canvas: Rect,
    /// One rectangle per scale slot
    pub scales: SideMap<Vec<Rect>>,
    /// Relaxation passes needed to settle the line breaks
    pub iterations: usize,
}

impl LayoutResult {
    pub fn scale(&self, side: Side, slot: usize) -> Option<Rect> {
        self.scales[side].get(slot).copied()
    }

    pub fn region(&self, region: Region) -> Rect {
        match region {
            Region::Title => self.title,
            Region::Footer => self.footer,
            Region::Legend => self.legend,
            Region::Canvas => self.canvas,
            Region::Scale(side, slot) => self.scale(side, slot).unwrap_or_default(),
        }
    }

    /// All components that got a non-empty rectangle
    pub fn regions(&self) -> Vec<(Region, Rect)> {
        let mut regions = vec![
            (Region::Title, self.title),
            (Region::Footer, self.footer),
            (Region::Legend, self.legend),
            (Region::Canvas, self.canvas),
        ];
        for (side, rects) in self.scales.iter() {
            regions.extend(
                rects
                    .iter()
                    .enumerate()
                    .map(|(slot, rect)| (Region::Scale(side, slot), *rect)),
            );
        }
        regions.retain(|(_, rect)| rect.is_valid());
        regions
    }
}

/// Distance between the canvas border and the scale backbones on each side
pub(crate) fn backbone_offsets(
    settings: &LayoutSettings,
    options: LayoutOptions,
    snapshot: &MeasurementSnapshot,
) -> SideMap<f32> {
    SideMap::from_fn(|side| {
        let mut offset = 0.0;
        if !settings.align_canvas[side] {
            offset += settings.canvas_margin[side];
        }
        if !options.contains(LayoutOptions::IGNORE_FRAMES) {
            offset += snapshot.canvas.contents_margins[side];
        }
        offset
    })
}

/// Place all measured components inside `bounds`
#[tracing::instrument(skip_all)]
pub fn compute_layout(
    bounds: Rect,
    settings: &LayoutSettings,
    options: LayoutOptions,
    snapshot: &MeasurementSnapshot,
) -> LayoutResult {
    let mut result = LayoutResult {
        scales: snapshot
            .scales
            .map(|_, scales| vec![Rect::default(); scales.len()]),
        ..Default::default()
    };
    let bounds = bounds.with_non_negative_size();
    let mut rect = bounds;

    if !options.contains(LayoutOptions::IGNORE_LEGEND) {
        if let Some(legend_data) = &snapshot.legend {
            result.legend = legend::layout_legend(settings, options, legend_data, rect);

            let side = settings.legend_position.side();
            let extent = if side.is_horizontal() {
                result.legend.height
            } else {
                result.legend.width
            };
            rect = rect.shrink(side, extent + settings.spacing);
        }
    }

    let dims = expand_line_breaks(settings, options, snapshot, rect);
    let axis = dims.axis;
    let centered = !snapshot.has_symmetric_y_scales();

    if dims.title > 0.0 {
        let height = dims.title.min(rect.height);
        result.title = Rect::new(rect.x, rect.y, rect.width, height);
        rect = rect.shrink(Side::Top, height + settings.spacing);

        if centered {
            // only one of the vertical stacks is there, center to the canvas
            result.title.x = rect.x + axis[Side::Left];
            result.title.width = rect.width - axis[Side::Left] - axis[Side::Right];
        }
    }

    if dims.footer > 0.0 {
        let height = dims.footer.min(rect.height);
        result.footer = Rect::new(rect.x, rect.bottom() - height, rect.width, height);
        rect = rect.shrink(Side::Bottom, height + settings.spacing);

        if centered {
            result.footer.x = rect.x + axis[Side::Left];
            result.footer.width = rect.width - axis[Side::Left] - axis[Side::Right];
        }
    }

    let mut canvas = Rect::new(
        rect.x + axis[Side::Left],
        rect.y + axis[Side::Top],
        rect.width - axis[Side::Left] - axis[Side::Right],
        rect.height - axis[Side::Top] - axis[Side::Bottom],
    )
    .with_non_negative_size();

    for side in Side::ALL {
        let thickness = dims.slot[side];
        if thickness <= 0.0 {
            continue;
        }

        let mut stacked = 0.0;
        for (scale, slot_rect) in snapshot.scales[side].iter().zip(result.scales[side].iter_mut()) {
            if !scale.visible {
                continue;
            }
            *slot_rect = match side {
                Side::Left => Rect::new(
                    canvas.left() - stacked - thickness,
                    canvas.y,
                    thickness,
                    canvas.height,
                ),
                Side::Right => Rect::new(canvas.right() + stacked, canvas.y, thickness, canvas.height),
                Side::Bottom => Rect::new(canvas.x, canvas.bottom() + stacked, canvas.width, thickness),
                Side::Top => Rect::new(
                    canvas.x,
                    canvas.top() - stacked - thickness,
                    canvas.width,
                    thickness,
                ),
            };
            stacked += thickness;
        }
    }

    align_scales(settings, options, snapshot, rect, &mut canvas, &mut result.scales);

    if let Some(legend_data) = &snapshot.legend {
        if result.legend.is_valid() {
            result.legend = legend::align_legend(settings, legend_data, canvas, result.legend);
        }
    }

    // Nothing may stick out of the bounds, even when they are too small
    let clip = |rect: Rect| {
        if rect.is_valid() {
            rect.intersected(&bounds)
        } else {
            rect.with_non_negative_size()
        }
    };
    result.canvas = clip(canvas);
    result.title = clip(result.title);
    result.footer = clip(result.footer);
    result.legend = clip(result.legend);
    for side in Side::ALL {
        for rect in result.scales[side].iter_mut() {
            *rect = clip(*rect);
        }
    }
    result.iterations = dims.iterations;

    tracing::debug!(
        canvas = ?result.canvas,
        iterations = result.iterations,
        "computed plot layout"
    );
    result
}
