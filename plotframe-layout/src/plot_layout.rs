use crate::components::PlotComponents;
use crate::engine::{compute_layout, LayoutResult};
use crate::min_size::minimum_size;
use crate::options::LayoutOptions;
use crate::settings::LayoutSettings;
use crate::snapshot::MeasurementSnapshot;
use plotframe_common::{Rect, Side, Size};
use plotframe_text::TextMeasurer;

/// Layout state of a plot
///
/// Holds the settings and the rectangles of the last completed pass. Until a
/// pass has run, or after [`PlotLayout::invalidate`], every accessor returns
/// an empty rectangle.
#[derive(Debug, Clone, Default)]
pub struct PlotLayout {
    settings: LayoutSettings,
    result: Option<LayoutResult>,
}

impl PlotLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout with the given settings, clamped to their valid ranges
    pub fn with_settings(settings: LayoutSettings) -> Self {
        Self {
            settings: settings.normalized(),
            result: None,
        }
    }

    /// Replace the settings. The current rectangles stay until the next pass.
    pub fn configure(&mut self, settings: LayoutSettings) {
        self.settings = settings.normalized();
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Forget the rectangles of the last pass
    pub fn invalidate(&mut self) {
        self.result = None;
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_some()
    }

    /// Invalidate, then lay out `components` inside `bounds`
    pub fn update(
        &mut self,
        components: &PlotComponents,
        bounds: Rect,
        options: LayoutOptions,
        measurer: &dyn TextMeasurer,
    ) {
        self.invalidate();
        self.activate(components, bounds, options, measurer);
    }

    /// Lay out `components` inside `bounds`.
    ///
    /// Everything is measured once up front, so the components may change
    /// right after this returns without affecting the stored rectangles.
    #[tracing::instrument(skip_all)]
    pub fn activate(
        &mut self,
        components: &PlotComponents,
        bounds: Rect,
        options: LayoutOptions,
        measurer: &dyn TextMeasurer,
    ) {
        let snapshot = MeasurementSnapshot::capture(components, bounds, measurer);
        let result = compute_layout(bounds, &self.settings, options, &snapshot);
        self.result = Some(result);
    }

    pub fn result(&self) -> Option<&LayoutResult> {
        self.result.as_ref()
    }

    pub fn title_rect(&self) -> Rect {
        self.result.as_ref().map(|r| r.title).unwrap_or_default()
    }

    pub fn footer_rect(&self) -> Rect {
        self.result.as_ref().map(|r| r.footer).unwrap_or_default()
    }

    pub fn legend_rect(&self) -> Rect {
        self.result.as_ref().map(|r| r.legend).unwrap_or_default()
    }

    pub fn canvas_rect(&self) -> Rect {
        self.result.as_ref().map(|r| r.canvas).unwrap_or_default()
    }

    /// Rectangle of a scale slot; empty for hidden or unknown slots
    pub fn scale_rect(&self, side: Side, slot: usize) -> Rect {
        self.result
            .as_ref()
            .and_then(|r| r.scale(side, slot))
            .unwrap_or_default()
    }

    /// Smallest size that shows all of `components` without overlaps.
    /// Doesn't touch the stored rectangles.
    pub fn minimum_size(&self, components: &PlotComponents, measurer: &dyn TextMeasurer) -> Size {
        let snapshot = MeasurementSnapshot::capture_unbounded(components, measurer);
        minimum_size(&self.settings, &snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ScaleSpec, TextLabel};
    use plotframe_common::LegendPosition;
    use plotframe_text::measurement::heuristic::HeuristicTextMeasurer;

    fn components() -> PlotComponents {
        PlotComponents::new()
            .title(TextLabel::new("Title"))
            .scale(Side::Left, ScaleSpec::new().label_extent(30.0))
            .scale(Side::Bottom, ScaleSpec::new().label_extent(12.0))
    }

    #[test]
    fn test_invalid_until_activated() {
        let layout = PlotLayout::new();
        assert!(!layout.is_valid());
        assert!(layout.result().is_none());
        assert_eq!(layout.canvas_rect(), Rect::default());
        assert_eq!(layout.title_rect(), Rect::default());
        assert_eq!(layout.scale_rect(Side::Left, 0), Rect::default());
    }

    #[test]
    fn test_activate_and_invalidate() {
        let measurer = HeuristicTextMeasurer::default();
        let mut layout = PlotLayout::new();
        let bounds = Rect::new(0.0, 0.0, 640.0, 480.0);

        layout.activate(&components(), bounds, LayoutOptions::empty(), &measurer);
        assert!(layout.is_valid());
        assert!(layout.canvas_rect().is_valid());
        assert!(layout.title_rect().is_valid());
        assert!(layout.scale_rect(Side::Left, 0).is_valid());
        assert_eq!(layout.scale_rect(Side::Left, 1), Rect::default());
        assert_eq!(layout.scale_rect(Side::Right, 0), Rect::default());
        assert!(bounds.contains(&layout.canvas_rect()));

        layout.invalidate();
        assert!(!layout.is_valid());
        assert_eq!(layout.canvas_rect(), Rect::default());
    }

    #[test]
    fn test_update_is_repeatable() {
        let measurer = HeuristicTextMeasurer::default();
        let bounds = Rect::new(0.0, 0.0, 640.0, 480.0);
        let mut layout = PlotLayout::new();

        layout.update(&components(), bounds, LayoutOptions::empty(), &measurer);
        let first = layout.result().cloned();
        layout.update(&components(), bounds, LayoutOptions::empty(), &measurer);
        assert_eq!(layout.result().cloned(), first);
    }

    #[test]
    fn test_configure_normalizes() {
        let mut settings = LayoutSettings::default();
        settings.spacing = -3.0;
        settings.legend_position = LegendPosition::Left;
        settings.legend_ratio = 2.0;

        let mut layout = PlotLayout::new();
        layout.configure(settings);
        assert_eq!(layout.settings().spacing, 0.0);
        assert_eq!(layout.settings().legend_ratio, 1.0);
    }

    #[test]
    fn test_minimum_size_keeps_state() {
        let measurer = HeuristicTextMeasurer::default();
        let layout = PlotLayout::new();
        let size = layout.minimum_size(&components(), &measurer);
        assert!(size.width > 0.0 && size.height > 0.0);
        assert!(!layout.is_valid());
    }
}
