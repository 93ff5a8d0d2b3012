//! Read-only capture of everything a layout pass measures.
//!
//! A snapshot is taken at the start of every pass and dropped at its end, so
//! the engine never looks at the components themselves.

use crate::components::{LegendSpec, PlotComponents, ScaleSpec, TextLabel};
use plotframe_common::{Rect, Side, SideMap, Size};
use plotframe_text::{FontSpec, Text, TextMeasurer};

#[derive(Clone, Debug)]
pub struct LegendData<'a> {
    pub frame_width: f32,
    /// Width taken by a vertical scrollbar
    pub h_scroll_extent: f32,
    /// Height taken by a horizontal scrollbar
    pub v_scroll_extent: f32,
    /// Preferred size, with the width clipped to the bounding rectangle
    pub hint: Size,
    spec: &'a LegendSpec,
}

impl LegendData<'_> {
    /// Unclipped preferred size of the legend
    pub fn size_hint(&self) -> Size {
        self.spec.size_hint()
    }

    pub fn height_for_width(&self, width: f32) -> f32 {
        self.spec.height_for_width(width)
    }
}

/// Title or footer text, with the font it is measured with
#[derive(Clone, Debug, PartialEq)]
pub struct TitleData {
    pub text: Text,
    pub font: FontSpec,
    pub frame_width: f32,
}

impl TitleData {
    fn capture(label: &TextLabel) -> Option<Self> {
        if label.text.is_empty() {
            return None;
        }
        Some(Self {
            text: label.text.clone(),
            font: label.text.font_or(&label.font).clone(),
            frame_width: label.frame_width,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaleData {
    pub visible: bool,
    pub font: FontSpec,
    pub start: f32,
    pub end: f32,
    pub tick_offset: f32,
    pub dim_without_title: f32,
    /// Non-empty title, if any
    pub title: Option<Text>,
    /// Minimum size hint in plot coordinates (width x height)
    pub min_size: Size,
    pub min_start: f32,
    pub min_end: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasData {
    pub contents_margins: SideMap<f32>,
    pub minimum_size: Size,
}

/// Measurements of all plot components for a single layout pass
pub struct MeasurementSnapshot<'a> {
    /// `None` when the plot has no legend or the legend has no items
    pub legend: Option<LegendData<'a>>,
    pub title: Option<TitleData>,
    pub footer: Option<TitleData>,
    pub scales: SideMap<Vec<ScaleData>>,
    pub visible_scales: SideMap<usize>,
    pub canvas: CanvasData,
    measurer: &'a dyn TextMeasurer,
}

impl<'a> MeasurementSnapshot<'a> {
    /// Measure `components` for a pass that lays them out inside `rect`
    pub fn capture(
        components: &'a PlotComponents,
        rect: Rect,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        let legend = components
            .legend
            .as_ref()
            .filter(|legend| !legend.is_empty())
            .map(|spec| {
                let hint = spec.size_hint();
                let width = hint.width.min(rect.width.floor());
                let mut height = spec.height_for_width(width);
                if height <= 0.0 {
                    height = hint.height;
                }
                LegendData {
                    frame_width: spec.frame_width,
                    h_scroll_extent: spec.h_scroll_extent,
                    v_scroll_extent: spec.v_scroll_extent,
                    hint: Size::new(width, height),
                    spec,
                }
            });

        let mut snapshot = Self {
            legend,
            title: components.title.as_ref().and_then(TitleData::capture),
            footer: components.footer.as_ref().and_then(TitleData::capture),
            scales: SideMap::default(),
            visible_scales: SideMap::default(),
            canvas: CanvasData {
                contents_margins: components.canvas.contents_margins,
                minimum_size: components.canvas.minimum_size,
            },
            measurer,
        };

        for side in Side::ALL {
            let scales: Vec<ScaleData> = components.scales[side]
                .iter()
                .map(|scale| snapshot.capture_scale(side, scale))
                .collect();
            snapshot.visible_scales[side] = scales.iter().filter(|s| s.visible).count();
            snapshot.scales[side] = scales;
        }

        snapshot
    }

    /// Measure `components` without any limit on the available space
    pub fn capture_unbounded(components: &'a PlotComponents, measurer: &'a dyn TextMeasurer) -> Self {
        Self::capture(components, Rect::new(0.0, 0.0, f32::MAX, f32::MAX), measurer)
    }

    fn capture_scale(&self, side: Side, scale: &ScaleSpec) -> ScaleData {
        if !scale.visible {
            return ScaleData::default();
        }

        let mut data = ScaleData {
            visible: true,
            font: scale.font.clone(),
            start: scale.start_border_dist,
            end: scale.end_border_dist,
            tick_offset: scale.tick_offset(),
            dim_without_title: scale.dim_without_title(),
            title: scale.title.clone().filter(|title| !title.is_empty()),
            min_size: Size::default(),
            min_start: scale.min_start_border_dist,
            min_end: scale.min_end_border_dist,
        };

        let min_length = data.min_start + data.min_end + scale.min_length;
        let min_size = Size::new(min_length, self.scale_dim_for_length(&data, min_length));
        data.min_size = if side.is_horizontal() {
            min_size
        } else {
            min_size.transposed()
        };
        data
    }

    pub fn measurer(&self) -> &'a dyn TextMeasurer {
        self.measurer
    }

    /// Same number of visible scales on the left and on the right
    pub fn has_symmetric_y_scales(&self) -> bool {
        self.visible_scales[Side::Left] == self.visible_scales[Side::Right]
    }

    /// Index of the first visible scale on `side`
    pub fn lead_slot(&self, side: Side) -> Option<usize> {
        self.scales[side].iter().position(|scale| scale.visible)
    }

    /// First visible scale on `side`; it stands for the whole stack
    pub fn lead_scale(&self, side: Side) -> Option<&ScaleData> {
        self.scales[side].iter().find(|scale| scale.visible)
    }

    /// Height of a title or footer wrapped to `width`, rounded up to whole pixels
    pub fn label_height_for_width(&self, label: &TitleData, width: f32) -> f32 {
        self.measurer
            .text_height_for_width(&label.text, &label.font, width.max(0.0))
            .ceil()
    }

    /// Thickness of a scale whose backbone is `length` long
    pub fn scale_dim_for_length(&self, scale: &ScaleData, length: f32) -> f32 {
        let title_height = match &scale.title {
            Some(title) => self
                .measurer
                .text_height_for_width(title, &scale.font, length.max(0.0))
                .ceil(),
            None => 0.0,
        };
        scale.dim_without_title + title_height
    }
}
