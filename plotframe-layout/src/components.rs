//! Descriptions of the plot components taking part in the layout.
//!
//! These are plain data: the host fills them from its widgets (or from its own
//! configuration) and hands them to [`crate::PlotLayout`]. Everything that
//! depends on text wrapping is measured later through a
//! [`plotframe_text::TextMeasurer`].

use plotframe_common::{LegendPosition, Side, SideMap, Size};
use plotframe_text::{FontSpec, Text};

/// Title or footer label
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLabel {
    pub text: Text,
    /// Font of the label, used unless the text pins its own
    pub font: FontSpec,
    pub frame_width: f32,
}

impl TextLabel {
    pub fn new(text: impl Into<Text>) -> Self {
        Self {
            text: text.into(),
            font: FontSpec::default(),
            frame_width: 0.0,
        }
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    pub fn frame_width(mut self, frame_width: f32) -> Self {
        self.frame_width = frame_width;
        self
    }
}

/// Measured extents of one scale (axis) widget
///
/// Across the scale the widget is built from, inside out: `margin`, ticks,
/// `label_spacing`, the tick labels (`label_extent`), `title_spacing` and the
/// title, whose height depends on the length available along the scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSpec {
    pub visible: bool,
    /// Font of the scale, used for the title unless it pins its own
    pub font: FontSpec,
    /// Space needed before the first tick so its label isn't clipped
    pub start_border_dist: f32,
    /// Space needed after the last tick so its label isn't clipped
    pub end_border_dist: f32,
    /// Smallest start border distance the scale can live with
    pub min_start_border_dist: f32,
    /// Smallest end border distance the scale can live with
    pub min_end_border_dist: f32,
    /// Distance between the scale backbone and the canvas
    pub margin: f32,
    /// Length of the longest tick, `None` when the scale draws no ticks
    pub tick_length: Option<f32>,
    pub label_spacing: f32,
    /// Thickness of the tick labels across the scale
    pub label_extent: f32,
    /// Shortest backbone that still fits the tick labels
    pub min_length: f32,
    pub title: Option<Text>,
    pub title_spacing: f32,
}

impl ScaleSpec {
    pub fn new() -> Self {
        Self {
            visible: true,
            font: FontSpec::default(),
            start_border_dist: 0.0,
            end_border_dist: 0.0,
            min_start_border_dist: 0.0,
            min_end_border_dist: 0.0,
            margin: 2.0,
            tick_length: Some(8.0),
            label_spacing: 2.0,
            label_extent: 0.0,
            min_length: 0.0,
            title: None,
            title_spacing: 2.0,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    pub fn border_dist(mut self, start: f32, end: f32) -> Self {
        self.start_border_dist = start;
        self.end_border_dist = end;
        self
    }

    pub fn min_border_dist(mut self, start: f32, end: f32) -> Self {
        self.min_start_border_dist = start;
        self.min_end_border_dist = end;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn tick_length(mut self, length: f32) -> Self {
        self.tick_length = Some(length);
        self
    }

    pub fn no_ticks(mut self) -> Self {
        self.tick_length = None;
        self
    }

    pub fn label_spacing(mut self, spacing: f32) -> Self {
        self.label_spacing = spacing;
        self
    }

    pub fn label_extent(mut self, extent: f32) -> Self {
        self.label_extent = extent;
        self
    }

    pub fn min_length(mut self, length: f32) -> Self {
        self.min_length = length;
        self
    }

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_spacing(mut self, spacing: f32) -> Self {
        self.title_spacing = spacing;
        self
    }

    pub fn has_title(&self) -> bool {
        self.title.as_ref().is_some_and(|title| !title.is_empty())
    }

    /// Distance from the canvas side of the scale to the end of the longest tick
    pub fn tick_offset(&self) -> f32 {
        self.margin + self.tick_length.unwrap_or(0.0)
    }

    /// Thickness of the scale without the title text itself
    pub fn dim_without_title(&self) -> f32 {
        let mut dim = self.tick_offset() + self.label_spacing + self.label_extent;
        if self.has_title() {
            dim += self.title_spacing;
        }
        dim.max(0.0)
    }
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Legend whose items are laid out in a grid of uniform cells
///
/// The number of columns follows the available width, capped by
/// `max_columns` (0 means no cap). Horizontal and vertical scrollbars
/// take `h_scroll_extent`/`v_scroll_extent` when the items don't fit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendSpec {
    pub items: Vec<Size>,
    pub max_columns: usize,
    pub spacing: f32,
    pub margin: f32,
    pub frame_width: f32,
    pub h_scroll_extent: f32,
    pub v_scroll_extent: f32,
}

impl LegendSpec {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_columns: 0,
            spacing: 2.0,
            margin: 0.0,
            frame_width: 0.0,
            h_scroll_extent: 0.0,
            v_scroll_extent: 0.0,
        }
    }

    /// Legend set up the way a plot shows it at `position`: a single column
    /// on the left or right, as many columns as fit on the top or bottom
    pub fn for_position(position: LegendPosition) -> Self {
        let max_columns = if position.is_horizontal() { 0 } else { 1 };
        Self::new().max_columns(max_columns)
    }

    pub fn item(mut self, size: Size) -> Self {
        self.items.push(size);
        self
    }

    pub fn items(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.items.extend(sizes);
        self
    }

    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn frame_width(mut self, frame_width: f32) -> Self {
        self.frame_width = frame_width;
        self
    }

    pub fn scroll_extents(mut self, horizontal: f32, vertical: f32) -> Self {
        self.h_scroll_extent = horizontal;
        self.v_scroll_extent = vertical;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Preferred size: all items in as many columns as `max_columns` allows
    pub fn size_hint(&self) -> Size {
        if self.is_empty() {
            return Size::default();
        }
        let columns = match self.max_columns {
            0 => self.items.len(),
            max => max.min(self.items.len()),
        };
        self.grid_size(columns)
    }

    /// Height needed to show all items when the legend is `width` wide
    pub fn height_for_width(&self, width: f32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.grid_size(self.columns_for_width(width)).height
    }

    fn cell_size(&self) -> Size {
        self.items.iter().fold(Size::default(), |cell, item| {
            Size::new(cell.width.max(item.width), cell.height.max(item.height))
        })
    }

    fn chrome(&self) -> f32 {
        2.0 * (self.margin + self.frame_width)
    }

    fn columns_for_width(&self, width: f32) -> usize {
        let cell = self.cell_size();
        let mut columns = if cell.width + self.spacing > 0.0 {
            let available = width - self.chrome() + self.spacing;
            ((available / (cell.width + self.spacing)).floor().max(1.0)) as usize
        } else {
            self.items.len()
        };
        columns = columns.min(self.items.len());
        if self.max_columns > 0 {
            columns = columns.min(self.max_columns);
        }
        columns.max(1)
    }

    fn grid_size(&self, columns: usize) -> Size {
        let cell = self.cell_size();
        let rows = self.items.len().div_ceil(columns);
        let extent = |count: usize, cell_extent: f32| {
            count as f32 * cell_extent + count.saturating_sub(1) as f32 * self.spacing
        };
        Size::new(
            extent(columns, cell.width) + self.chrome(),
            extent(rows, cell.height) + self.chrome(),
        )
    }
}

/// Frame of the canvas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasFrame {
    /// Inset consumed by the canvas border on each side
    pub contents_margins: SideMap<f32>,
    pub minimum_size: Size,
}

impl CanvasFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same inset on every side
    pub fn frame_width(mut self, width: f32) -> Self {
        self.contents_margins = SideMap::splat(width);
        self
    }

    pub fn contents_margins(mut self, margins: SideMap<f32>) -> Self {
        self.contents_margins = margins;
        self
    }

    pub fn minimum_size(mut self, size: Size) -> Self {
        self.minimum_size = size;
        self
    }
}

/// Everything a layout pass needs to know about the plot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotComponents {
    pub title: Option<TextLabel>,
    pub footer: Option<TextLabel>,
    pub legend: Option<LegendSpec>,
    /// Scales stacked on each side, in insertion order
    pub scales: SideMap<Vec<ScaleSpec>>,
    pub canvas: CanvasFrame,
}

impl PlotComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: TextLabel) -> Self {
        self.title = Some(title);
        self
    }

    pub fn footer(mut self, footer: TextLabel) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn legend(mut self, legend: LegendSpec) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn canvas(mut self, canvas: CanvasFrame) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn scale(mut self, side: Side, scale: ScaleSpec) -> Self {
        self.add_scale(side, scale);
        self
    }

    /// Stack another scale on `side`, returning its slot index
    pub fn add_scale(&mut self, side: Side, scale: ScaleSpec) -> usize {
        self.scales[side].push(scale);
        self.scales[side].len() - 1
    }

    pub fn scale_count(&self, side: Side) -> usize {
        self.scales[side].len()
    }

    pub fn get_scale(&self, side: Side, index: usize) -> Option<&ScaleSpec> {
        self.scales[side].get(index)
    }

    pub fn get_scale_mut(&mut self, side: Side, index: usize) -> Option<&mut ScaleSpec> {
        self.scales[side].get_mut(index)
    }

    /// Show or hide a scale; unknown slots are ignored
    pub fn set_scale_visible(&mut self, side: Side, index: usize, visible: bool) {
        if let Some(scale) = self.get_scale_mut(side, index) {
            scale.visible = visible;
        }
    }

    pub fn visible_scale_count(&self, side: Side) -> usize {
        self.scales[side].iter().filter(|s| s.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend_with_items(count: usize) -> LegendSpec {
        LegendSpec::new()
            .spacing(0.0)
            .items((0..count).map(|_| Size::new(40.0, 10.0)))
    }

    #[test]
    fn test_legend_size_hint() {
        assert_eq!(legend_with_items(0).size_hint(), Size::default());
        assert_eq!(legend_with_items(3).size_hint(), Size::new(120.0, 10.0));
        assert_eq!(
            legend_with_items(3).max_columns(1).size_hint(),
            Size::new(40.0, 30.0)
        );
        assert_eq!(
            legend_with_items(3).frame_width(1.0).margin(2.0).size_hint(),
            Size::new(126.0, 16.0)
        );
    }

    #[test]
    fn test_legend_height_for_width() {
        let legend = legend_with_items(5);
        assert_eq!(legend.height_for_width(200.0), 10.0);
        assert_eq!(legend.height_for_width(100.0), 30.0);
        // A single column never gets narrower
        assert_eq!(legend.height_for_width(0.0), 50.0);
        assert_eq!(legend.max_columns(2).height_for_width(1000.0), 30.0);
    }

    #[test]
    fn test_scale_dimensions() {
        let scale = ScaleSpec::new()
            .margin(3.0)
            .tick_length(5.0)
            .label_spacing(2.0)
            .label_extent(10.0);
        assert_eq!(scale.tick_offset(), 8.0);
        assert_eq!(scale.dim_without_title(), 20.0);

        let titled = scale.clone().title("Voltage").title_spacing(4.0);
        assert_eq!(titled.dim_without_title(), 24.0);

        let bare = scale.no_ticks();
        assert_eq!(bare.tick_offset(), 3.0);
    }

    #[test]
    fn test_scale_slots() {
        let mut components = PlotComponents::new().scale(Side::Left, ScaleSpec::new());
        let index = components.add_scale(Side::Left, ScaleSpec::new().visible(false));
        assert_eq!(index, 1);
        assert_eq!(components.scale_count(Side::Left), 2);
        assert_eq!(components.visible_scale_count(Side::Left), 1);

        components.set_scale_visible(Side::Left, 1, true);
        components.set_scale_visible(Side::Left, 7, false);
        assert_eq!(components.visible_scale_count(Side::Left), 2);
        assert!(components.get_scale(Side::Top, 0).is_none());
    }
}
