use super::backbone_offsets;
use crate::options::LayoutOptions;
use crate::settings::LayoutSettings;
use crate::snapshot::{MeasurementSnapshot, ScaleData};
use plotframe_common::{Rect, Side, SideMap};

/// Align the scale backbones to the canvas.
///
/// The ticks, not the labels next to them, should line up with the canvas
/// edges. Scales are stretched into the empty corners so that the labels at
/// their ends fit there, and the canvas is shrunk where a side is aligned and
/// the corner is too small.
///
/// `area` is the rectangle shared by canvas and scales. No scale is stretched
/// beyond it. Slots missing from `scales` are skipped.
pub fn align_scales(
    settings: &LayoutSettings,
    options: LayoutOptions,
    snapshot: &MeasurementSnapshot,
    area: Rect,
    canvas: &mut Rect,
    scales: &mut SideMap<Vec<Rect>>,
) {
    let aligner = ScaleAligner {
        align: settings.align_canvas,
        backbone: backbone_offsets(settings, options, snapshot),
        snapshot,
    };

    for side in Side::ALL {
        let (Some(slot), Some(scale)) = (snapshot.lead_slot(side), snapshot.lead_scale(side))
        else {
            continue;
        };

        let Some(mut rect) = scales[side].get(slot).copied() else {
            continue;
        };
        if !rect.is_valid() {
            continue;
        }

        if side.is_horizontal() {
            aligner.align_horizontal(scale, scales, canvas, &mut rect);
        } else {
            aligner.align_vertical(scale, scales, canvas, &mut rect);
        }
        if let Some(lead) = scales[side].get_mut(slot) {
            *lead = rect;
        }

        // The rest of the stack follows the lead along the canvas
        for (data, other) in snapshot.scales[side].iter().zip(scales[side].iter_mut()) {
            if !data.visible {
                continue;
            }
            if side.is_horizontal() {
                other.x = rect.x;
                other.width = rect.width;
            } else {
                other.y = rect.y;
                other.height = rect.height;
            }
        }
    }

    // The canvas is now aligned to the scales with the largest border
    // distances, realign all the others to it
    let margins = if options.contains(LayoutOptions::IGNORE_FRAMES) {
        SideMap::splat(0.0)
    } else {
        snapshot.canvas.contents_margins
    };
    let align = &settings.align_canvas;

    for side in Side::ALL {
        for (scale, rect) in snapshot.scales[side].iter().zip(scales[side].iter_mut()) {
            if !scale.visible || !rect.is_valid() {
                continue;
            }

            if side.is_horizontal() {
                if align[Side::Left] {
                    rect.set_left(canvas.left() - scale.start + margins[Side::Left]);
                }
                if align[Side::Right] {
                    rect.set_right(canvas.right() - 1.0 + scale.end - margins[Side::Right]);
                }
            } else {
                if align[Side::Top] {
                    rect.set_top(canvas.top() - scale.start + margins[Side::Top]);
                }
                if align[Side::Bottom] {
                    rect.set_bottom(canvas.bottom() - 1.0 + scale.end - margins[Side::Bottom]);
                }
            }
        }

        if align[side] {
            glue_to_canvas(side, canvas, &snapshot.scales[side], &mut scales[side]);
        }

        // Outer slots may have larger border distances than the lead
        for rect in scales[side].iter_mut().filter(|rect| rect.is_valid()) {
            clamp_along_axis(side, &area, rect);
        }
    }
}

fn clamp_along_axis(side: Side, area: &Rect, rect: &mut Rect) {
    if side.is_horizontal() {
        if rect.left() < area.left() {
            rect.set_left(area.left());
        }
        if rect.right() > area.right() {
            rect.set_right(area.right());
        }
    } else {
        if rect.top() < area.top() {
            rect.set_top(area.top());
        }
        if rect.bottom() > area.bottom() {
            rect.set_bottom(area.bottom());
        }
    }
}

struct ScaleAligner<'s, 'a> {
    align: SideMap<bool>,
    backbone: SideMap<f32>,
    snapshot: &'s MeasurementSnapshot<'a>,
}

impl ScaleAligner<'_, '_> {
    fn lead_rect(&self, scales: &SideMap<Vec<Rect>>, side: Side) -> Rect {
        self.snapshot
            .lead_slot(side)
            .and_then(|slot| scales[side].get(slot).copied())
            .unwrap_or_default()
    }

    fn tick_offset(&self, side: Side) -> f32 {
        self.snapshot
            .lead_scale(side)
            .map(|scale| scale.tick_offset)
            .unwrap_or(0.0)
    }

    fn align_horizontal(
        &self,
        scale: &ScaleData,
        scales: &SideMap<Vec<Rect>>,
        canvas: &mut Rect,
        rect: &mut Rect,
    ) {
        let left_scale = self.lead_rect(scales, Side::Left);
        let left_offset = self.backbone[Side::Left] - scale.start;

        if left_scale.is_valid() {
            let dx = left_offset + left_scale.width;
            if self.align[Side::Left] && dx < 0.0 {
                // The scale needs more space than the width of the left scale
                canvas.set_left(canvas.left().max(rect.left() - dx));
            } else {
                let min_left = left_scale.left();
                rect.set_left((rect.left() + left_offset).max(min_left));
            }
        } else if self.align[Side::Left] && left_offset < 0.0 {
            canvas.set_left(canvas.left().max(rect.left() - left_offset));
        } else if left_offset > 0.0 {
            rect.set_left(rect.left() + left_offset);
        }

        let right_scale = self.lead_rect(scales, Side::Right);
        let right_offset = self.backbone[Side::Right] - scale.end + 1.0;

        if right_scale.is_valid() {
            let dx = right_offset + right_scale.width;
            if self.align[Side::Right] && dx < 0.0 {
                // The scale needs more space than the width of the right scale
                canvas.set_right(canvas.right().min(rect.right() + dx));
            }
            let max_right = right_scale.right();
            rect.set_right((rect.right() - right_offset).min(max_right));
        } else if self.align[Side::Right] && right_offset < 0.0 {
            canvas.set_right(canvas.right().min(rect.right() + right_offset));
        } else if right_offset > 0.0 {
            rect.set_right(rect.right() - right_offset);
        }
    }

    fn align_vertical(
        &self,
        scale: &ScaleData,
        scales: &SideMap<Vec<Rect>>,
        canvas: &mut Rect,
        rect: &mut Rect,
    ) {
        let bottom_scale = self.lead_rect(scales, Side::Bottom);
        let bottom_offset = self.backbone[Side::Bottom] - scale.end + 1.0;

        if bottom_scale.is_valid() {
            let dy = bottom_offset + bottom_scale.height;
            if self.align[Side::Bottom] && dy < 0.0 {
                // The scale needs more space than the height of the bottom scale
                canvas.set_bottom(canvas.bottom().min(rect.bottom() + dy));
            } else {
                let max_bottom = bottom_scale.top() + self.tick_offset(Side::Bottom);
                rect.set_bottom((rect.bottom() - bottom_offset).min(max_bottom));
            }
        } else if self.align[Side::Bottom] && bottom_offset < 0.0 {
            canvas.set_bottom(canvas.bottom().min(rect.bottom() + bottom_offset));
        } else if bottom_offset > 0.0 {
            rect.set_bottom(rect.bottom() - bottom_offset);
        }

        let top_scale = self.lead_rect(scales, Side::Top);
        let top_offset = self.backbone[Side::Top] - scale.start;

        if top_scale.is_valid() {
            let dy = top_offset + top_scale.height;
            if self.align[Side::Top] && dy < 0.0 {
                // The scale needs more space than the height of the top scale
                canvas.set_top(canvas.top().max(rect.top() - dy));
            } else {
                let min_top = top_scale.bottom() - self.tick_offset(Side::Top);
                rect.set_top((rect.top() + top_offset).max(min_top));
            }
        } else if self.align[Side::Top] && top_offset < 0.0 {
            canvas.set_top(canvas.top().max(rect.top() - top_offset));
        } else if top_offset > 0.0 {
            rect.set_top(rect.top() + top_offset);
        }
    }
}

/// Put the innermost scale of `side` flush against the canvas and restack the
/// outer ones behind it, keeping their thickness
fn glue_to_canvas(side: Side, canvas: &Rect, data: &[ScaleData], rects: &mut [Rect]) {
    let mut edge = match side {
        Side::Left => canvas.left(),
        Side::Right => canvas.right(),
        Side::Bottom => canvas.bottom(),
        Side::Top => canvas.top(),
    };
    let mut lead = true;

    for (scale, rect) in data.iter().zip(rects.iter_mut()) {
        if !scale.visible || !rect.is_valid() {
            continue;
        }

        if lead {
            match side {
                Side::Left => rect.set_right(edge),
                Side::Right => rect.set_left(edge),
                Side::Bottom => rect.set_top(edge),
                Side::Top => rect.set_bottom(edge),
            }
            lead = false;
        } else {
            match side {
                Side::Left => rect.x = edge - rect.width,
                Side::Right => rect.x = edge,
                Side::Bottom => rect.y = edge,
                Side::Top => rect.y = edge - rect.height,
            }
        }

        edge = match side {
            Side::Left => rect.left(),
            Side::Right => rect.right(),
            Side::Bottom => rect.bottom(),
            Side::Top => rect.top(),
        };
    }
}
