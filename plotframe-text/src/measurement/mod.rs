use crate::types::{FontSpec, FontStyle, FontWeight, Text};

#[cfg(feature = "cosmic-text")]
extern crate lazy_static;

#[cfg(feature = "cosmic-text")]
pub mod cosmic;

pub mod heuristic;

/// Core trait for text measurement functionality
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions for a text string with given configuration,
    /// breaking lines only at explicit newlines
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds;

    /// Height of the text once it is wrapped into lines no wider than `width`
    fn height_for_width(&self, config: &TextMeasurementConfig, width: f32) -> f32;

    /// Height-for-width of a [`Text`], measured with its own font or `fallback`.
    /// Empty text takes no space.
    fn text_height_for_width(&self, text: &Text, fallback: &FontSpec, width: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let font = text.font_or(fallback);
        self.height_for_width(&TextMeasurementConfig::from_font(&text.content, font), width)
    }
}

/// Configuration needed for text measurement
#[derive(Debug, Clone)]
pub struct TextMeasurementConfig<'a> {
    /// The text string to measure
    pub text: &'a str,
    /// Font family name
    pub font: &'a str,
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (normal, bold, or numeric)
    pub font_weight: &'a FontWeight,
    /// Font style (normal or italic)
    pub font_style: &'a FontStyle,
}

impl<'a> TextMeasurementConfig<'a> {
    pub fn from_font(text: &'a str, font: &'a FontSpec) -> Self {
        Self {
            text,
            font: &font.family,
            font_size: font.size,
            font_weight: &font.weight,
            font_style: &font.style,
        }
    }
}

/// Results from text measurement
#[derive(Debug, Clone, PartialEq)]
pub struct TextBounds {
    /// Total width of the text
    pub width: f32,
    /// Total height from top to bottom
    pub height: f32,
    /// Distance from top to baseline
    pub ascent: f32,
    /// Distance from bottom to baseline
    pub descent: f32,
    /// Distance from top to where the top of the next line would be
    pub line_height: f32,
}

impl TextBounds {
    pub fn empty() -> Self {
        TextBounds {
            width: 0.0,
            height: 10.0,
            ascent: 10.0 * 0.8,
            descent: 10.0 * 0.2,
            line_height: 10.0 * 1.2,
        }
    }
}
