use super::backbone_offsets;
use crate::constants::MAX_LINE_BREAK_ITERATIONS;
use crate::options::LayoutOptions;
use crate::settings::LayoutSettings;
use crate::snapshot::{MeasurementSnapshot, ScaleData, TitleData};
use plotframe_common::{Rect, Side, SideMap};

/// Thicknesses of the text carrying strips once all line breaks are known
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBreakDims {
    /// Height of the title strip, frame included
    pub title: f32,
    /// Height of the footer strip, frame included
    pub footer: f32,
    /// Thickness of a single scale on each side
    pub slot: SideMap<f32>,
    /// Thickness of the whole scale stack on each side
    pub axis: SideMap<f32>,
    /// Number of relaxation passes it took to settle
    pub iterations: usize,
}

/// Find the title, footer and scale thicknesses including all line breaks.
///
/// The four scales depend on each other: a taller horizontal scale leaves
/// less height to the vertical ones, whose titles may break into more lines,
/// making them wider and the horizontal scales shorter, and so on. The
/// thicknesses only ever grow, so relaxing until nothing changes settles.
pub fn expand_line_breaks(
    settings: &LayoutSettings,
    options: LayoutOptions,
    snapshot: &MeasurementSnapshot,
    rect: Rect,
) -> LineBreakDims {
    let solver = LineBreakSolver {
        settings,
        options,
        snapshot,
        rect,
        backbone: backbone_offsets(settings, options, snapshot),
    };

    let mut dims = LineBreakDims::default();
    let mut done = false;

    while !done {
        if dims.iterations == MAX_LINE_BREAK_ITERATIONS {
            tracing::warn!(
                iterations = dims.iterations,
                "line breaks did not settle, using the last thicknesses"
            );
            break;
        }
        dims.iterations += 1;
        done = true;

        if !options.contains(LayoutOptions::IGNORE_TITLE) {
            if let Some(title) = &snapshot.title {
                let dim = solver.label_dim(title, &dims);
                if dim > dims.title {
                    dims.title = dim;
                    done = false;
                }
            }
        }

        if !options.contains(LayoutOptions::IGNORE_FOOTER) {
            if let Some(footer) = &snapshot.footer {
                let dim = solver.label_dim(footer, &dims);
                if dim > dims.footer {
                    dims.footer = dim;
                    done = false;
                }
            }
        }

        for side in Side::ALL {
            let Some(scale) = snapshot.lead_scale(side) else {
                continue;
            };

            let length = solver.scale_length(side, scale, &dims);
            let dim = snapshot
                .scale_dim_for_length(scale, length.max(0.0).floor())
                .ceil();

            if dim > dims.slot[side] {
                dims.slot[side] = dim;
                dims.axis[side] = dim * snapshot.visible_scales[side] as f32;
                done = false;
            }
        }
    }

    tracing::debug!(
        iterations = dims.iterations,
        title = dims.title,
        footer = dims.footer,
        axis = ?dims.axis,
        "expanded line breaks"
    );
    dims
}

struct LineBreakSolver<'s, 'a> {
    settings: &'s LayoutSettings,
    options: LayoutOptions,
    snapshot: &'s MeasurementSnapshot<'a>,
    rect: Rect,
    backbone: SideMap<f32>,
}

impl LineBreakSolver<'_, '_> {
    fn label_dim(&self, label: &TitleData, dims: &LineBreakDims) -> f32 {
        let mut width = self.rect.width;
        if !self.snapshot.has_symmetric_y_scales() {
            // center to the canvas
            width -= dims.axis[Side::Left] + dims.axis[Side::Right];
        }

        let mut dim = self.snapshot.label_height_for_width(label, width);
        if !self.options.contains(LayoutOptions::IGNORE_FRAMES) {
            dim += 2.0 * label.frame_width;
        }
        dim
    }

    /// Length available for the backbone of `scale`, given the current thicknesses
    fn scale_length(&self, side: Side, scale: &ScaleData, dims: &LineBreakDims) -> f32 {
        let axis = &dims.axis;
        let backbone = &self.backbone;

        if side.is_horizontal() {
            let mut length = self.rect.width - axis[Side::Left] - axis[Side::Right];
            length -= scale.start + scale.end;

            if axis[Side::Right] > 0.0 {
                length -= 1.0;
            }

            // The label texts at the ends may reach into the vertical scales
            length += axis[Side::Left].min(scale.start - backbone[Side::Left]);
            length += axis[Side::Right].min(scale.end - backbone[Side::Right]);
            length
        } else {
            let mut length = self.rect.height - axis[Side::Top] - axis[Side::Bottom];
            length -= scale.start + scale.end;
            length -= 1.0;

            if axis[Side::Bottom] <= 0.0 {
                length -= 1.0;
            }
            if axis[Side::Top] <= 0.0 {
                length -= 1.0;
            }

            if axis[Side::Bottom] > 0.0 {
                length += self
                    .tick_offset(Side::Bottom)
                    .min(scale.end - backbone[Side::Bottom]);
            }
            if axis[Side::Top] > 0.0 {
                length += self
                    .tick_offset(Side::Top)
                    .min(scale.start - backbone[Side::Top]);
            }

            if dims.title > 0.0 {
                length -= dims.title + self.settings.spacing;
            }
            if dims.footer > 0.0 {
                length -= dims.footer + self.settings.spacing;
            }
            length
        }
    }

    fn tick_offset(&self, side: Side) -> f32 {
        self.snapshot
            .lead_scale(side)
            .map(|scale| scale.tick_offset)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PlotComponents, ScaleSpec, TextLabel};
    use plotframe_text::measurement::heuristic::HeuristicTextMeasurer;
    use plotframe_text::FontSpec;

    // 10px font: 5px per glyph, 12.5px per line
    fn font() -> FontSpec {
        FontSpec::new("sans-serif", 10.0)
    }

    fn plain_scale(extent: f32) -> ScaleSpec {
        ScaleSpec::new()
            .font(font())
            .margin(0.0)
            .no_ticks()
            .label_spacing(0.0)
            .label_extent(extent)
            .title_spacing(0.0)
    }

    fn expand(components: &PlotComponents, rect: Rect) -> LineBreakDims {
        let measurer = HeuristicTextMeasurer::default();
        let snapshot = MeasurementSnapshot::capture(components, rect, &measurer);
        let mut settings = LayoutSettings::default();
        settings.set_canvas_margin(0.0, None);
        settings.set_spacing(0.0);
        expand_line_breaks(&settings, LayoutOptions::empty(), &snapshot, rect)
    }

    #[test]
    fn test_nothing_to_expand() {
        let dims = expand(&PlotComponents::new(), Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(dims.iterations, 1);
        assert_eq!(dims.title, 0.0);
        assert_eq!(dims.axis, SideMap::splat(0.0));
    }

    #[test]
    fn test_fixed_scales() {
        let components = PlotComponents::new()
            .scale(Side::Left, plain_scale(50.0))
            .scale(Side::Bottom, plain_scale(30.0));
        let dims = expand(&components, Rect::new(0.0, 0.0, 800.0, 600.0));

        assert_eq!(dims.axis, SideMap::new(50.0, 0.0, 30.0, 0.0));
        assert_eq!(dims.iterations, 2);
    }

    #[test]
    fn test_stacked_scales_share_lead_thickness() {
        let components = PlotComponents::new()
            .scale(Side::Right, plain_scale(20.0))
            .scale(Side::Right, plain_scale(5.0))
            .scale(Side::Right, plain_scale(5.0).visible(false));
        let dims = expand(&components, Rect::new(0.0, 0.0, 800.0, 600.0));

        assert_eq!(dims.slot[Side::Right], 20.0);
        assert_eq!(dims.axis[Side::Right], 40.0);
    }

    #[test]
    fn test_title_wraps_over_canvas_width() {
        // 19 glyphs, 95px on a single line
        let components = PlotComponents::new()
            .title(TextLabel::new("aaaa bbbb cccc dddd").font(font()).frame_width(1.0))
            .scale(Side::Left, plain_scale(40.0));

        // Asymmetric scales: the title only gets the 60px above the canvas
        let dims = expand(&components, Rect::new(0.0, 0.0, 100.0, 300.0));
        // "aaaa bbbb" / "cccc dddd": 2 lines, 25px, plus the frame
        assert_eq!(dims.title, 27.0);
        assert!(dims.iterations >= 2);
    }

    #[test]
    fn test_vertical_title_competes_with_horizontal_title() {
        // The bottom scale title wraps when the left scale grows, which in
        // turn shortens the left scale
        let components = PlotComponents::new()
            .scale(Side::Left, plain_scale(10.0).title("left axis title"))
            .scale(Side::Bottom, plain_scale(10.0).title("bottom axis title"));
        let dims = expand(&components, Rect::new(0.0, 0.0, 90.0, 60.0));

        assert!(dims.axis[Side::Left] >= 10.0 + 13.0);
        assert!(dims.axis[Side::Bottom] >= 10.0 + 13.0);
        assert!(dims.iterations >= 2);

        // A second run gives the same answer
        let again = expand(&components, Rect::new(0.0, 0.0, 90.0, 60.0));
        assert_eq!(dims, again);
    }

    #[test]
    fn test_degenerate_rect_terminates() {
        let components = PlotComponents::new()
            .title(TextLabel::new("a plot title").font(font()))
            .footer(TextLabel::new("a footer").font(font()))
            .scale(Side::Left, plain_scale(10.0).title("left"))
            .scale(Side::Top, plain_scale(10.0).title("top"));
        let dims = expand(&components, Rect::default());

        assert!(dims.iterations < MAX_LINE_BREAK_ITERATIONS);
        assert!(dims.title >= 0.0 && dims.footer >= 0.0);
        for (_, dim) in dims.axis.iter() {
            assert!(*dim >= 0.0);
        }
    }

    #[test]
    fn test_ignore_options() {
        let components = PlotComponents::new()
            .title(TextLabel::new("Title").font(font()).frame_width(3.0))
            .footer(TextLabel::new("Footer").font(font()));
        let measurer = HeuristicTextMeasurer::default();
        let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
        let snapshot = MeasurementSnapshot::capture(&components, rect, &measurer);
        let settings = LayoutSettings::default();

        let dims = expand_line_breaks(&settings, LayoutOptions::empty(), &snapshot, rect);
        assert_eq!((dims.title, dims.footer), (19.0, 13.0));

        let dims = expand_line_breaks(&settings, LayoutOptions::IGNORE_FRAMES, &snapshot, rect);
        assert_eq!(dims.title, 13.0);

        let options = LayoutOptions::IGNORE_TITLE | LayoutOptions::IGNORE_FOOTER;
        let dims = expand_line_breaks(&settings, options, &snapshot, rect);
        assert_eq!((dims.title, dims.footer), (0.0, 0.0));
    }
}
