//! Smallest size that still shows every component without overlaps.
//!
//! This is an estimate for the size negotiation of a host container and
//! doesn't run the layout engine: scales are taken at their minimum length and
//! text is wrapped to the width the scales and the canvas need.

use crate::settings::LayoutSettings;
use crate::snapshot::MeasurementSnapshot;
use plotframe_common::{Side, SideMap, Size};

/// Minimum hint of the scale stack on one side
#[derive(Clone, Copy, Debug, Default)]
struct StackHint {
    width: f32,
    height: f32,
    min_start: f32,
    min_end: f32,
    tick_offset: f32,
}

fn stack_hints(snapshot: &MeasurementSnapshot) -> SideMap<StackHint> {
    SideMap::from_fn(|side| {
        let Some(scale) = snapshot.lead_scale(side) else {
            return StackHint::default();
        };

        let count = snapshot.visible_scales[side] as f32;
        let mut hint = StackHint {
            width: scale.min_size.width,
            height: scale.min_size.height,
            min_start: scale.min_start,
            min_end: scale.min_end,
            tick_offset: scale.tick_offset,
        };
        if side.is_horizontal() {
            hint.height *= count;
        } else {
            hint.width *= count;
        }
        hint
    })
}

/// Minimum size of the whole plot, rounded up to whole pixels
pub fn minimum_size(settings: &LayoutSettings, snapshot: &MeasurementSnapshot) -> Size {
    let margins = snapshot.canvas.contents_margins;
    let border = SideMap::from_fn(|side| margins[side] + settings.canvas_margin[side] + 1.0);
    let hints = stack_hints(snapshot);

    // Labels at the ends of a scale may reach into the perpendicular scales
    let mut scales = hints;
    for side in Side::ALL {
        let hint = &mut scales[side];

        if side.is_horizontal() && hint.width > 0.0 {
            let left = hints[Side::Left];
            if hint.min_start > border[Side::Left] && left.width > 0.0 {
                hint.width -= (hint.min_start - border[Side::Left]).min(left.width);
            }
            let right = hints[Side::Right];
            if hint.min_end > border[Side::Right] && right.width > 0.0 {
                hint.width -= (hint.min_end - border[Side::Right]).min(right.width);
            }
        }

        if side.is_vertical() && hint.height > 0.0 {
            let bottom = hints[Side::Bottom];
            if hint.min_end > border[Side::Bottom] && bottom.height > 0.0 {
                hint.height -= (hint.min_end - border[Side::Bottom]).min(bottom.tick_offset);
            }
            let top = hints[Side::Top];
            if hint.min_start > border[Side::Top] && top.height > 0.0 {
                hint.height -= (hint.min_start - border[Side::Top]).min(top.tick_offset);
            }
        }
    }

    let min_canvas = snapshot.canvas.minimum_size;
    let y_scales = scales[Side::Left].width + scales[Side::Right].width;

    let canvas_width = scales[Side::Bottom].width.max(scales[Side::Top].width)
        + margins[Side::Left]
        + 1.0
        + margins[Side::Right]
        + 1.0;
    let mut width = y_scales + canvas_width.max(min_canvas.width);

    let canvas_height = scales[Side::Left].height.max(scales[Side::Right].height)
        + margins[Side::Top]
        + 1.0
        + margins[Side::Bottom]
        + 1.0;
    let mut height =
        scales[Side::Bottom].height + scales[Side::Top].height + canvas_height.max(min_canvas.height);

    let centered = !snapshot.has_symmetric_y_scales();
    for label in [&snapshot.title, &snapshot.footer].into_iter().flatten() {
        let frame = 2.0 * label.frame_width;
        let mut label_width = width;
        if centered {
            label_width -= y_scales;
        }

        let mut label_height = snapshot.label_height_for_width(label, label_width) + frame;
        if label_height > label_width {
            // a long title would end up as a narrow column of words
            label_width = label_height;
            width = if centered { label_width + y_scales } else { label_width };
            label_height = snapshot.label_height_for_width(label, label_width) + frame;
        }
        height += label_height + settings.spacing;
    }

    if let Some(legend) = &snapshot.legend {
        let ratio = settings.legend_ratio;

        if settings.legend_position.is_horizontal() {
            let legend_width = legend.size_hint().width.min(width);
            let mut legend_height = legend.height_for_width(legend_width);

            if legend.frame_width > 0.0 {
                height += settings.spacing;
            }
            if ratio < 1.0 {
                legend_height = legend_height.min((height / (1.0 - ratio)).floor());
            }
            height += legend_height + settings.spacing;
        } else {
            let mut legend_width = legend.size_hint().width;
            let legend_height = legend.height_for_width(legend_width);

            if legend.frame_width > 0.0 {
                width += settings.spacing;
            }
            if legend_height > height {
                legend_width += legend.h_scroll_extent;
            }
            if ratio < 1.0 {
                legend_width = legend_width.min((width / (1.0 - ratio)).floor());
            }
            width += legend_width + settings.spacing;
        }
    }

    let size = Size::new(width.ceil(), height.ceil());
    tracing::debug!(?size, "estimated minimum plot size");
    size
}
