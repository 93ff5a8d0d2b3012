use unicode_segmentation::UnicodeSegmentation;

use super::{TextBounds, TextMeasurementConfig, TextMeasurer};

/// Font-less text measurer based on average glyph metrics.
///
/// Every grapheme is assumed to be `char_width` em wide and every line
/// `line_height` em tall. Lines wrap greedily at word boundaries; a single
/// word longer than the available width overflows instead of being split.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicTextMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.5,
            line_height: 1.25,
        }
    }
}

impl HeuristicTextMeasurer {
    fn glyph_width(&self, config: &TextMeasurementConfig) -> f32 {
        self.char_width * config.font_size
    }

    fn line_height_px(&self, config: &TextMeasurementConfig) -> f32 {
        self.line_height * config.font_size
    }

    fn wrapped_line_count(&self, text: &str, glyph_width: f32, width: f32) -> usize {
        let mut lines = 0;
        for paragraph in text.split('\n') {
            lines += 1;
            let mut line_width = 0.0;
            let mut pending_space = 0.0;

            for segment in paragraph.split_word_bounds() {
                let segment_width = segment.graphemes(true).count() as f32 * glyph_width;
                if segment.trim().is_empty() {
                    if line_width > 0.0 {
                        pending_space += segment_width;
                    }
                    continue;
                }

                if line_width > 0.0 && line_width + pending_space + segment_width > width {
                    lines += 1;
                    line_width = segment_width;
                } else {
                    line_width += pending_space + segment_width;
                }
                pending_space = 0.0;
            }
        }
        lines
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        let glyph_width = self.glyph_width(config);
        let line_height = self.line_height_px(config);

        let paragraphs: Vec<&str> = config.text.split('\n').collect();
        let width = paragraphs
            .iter()
            .map(|p| p.graphemes(true).count() as f32 * glyph_width)
            .fold(0.0, f32::max);

        TextBounds {
            width,
            height: paragraphs.len() as f32 * line_height,
            ascent: config.font_size * 0.8,
            descent: config.font_size * 0.2,
            line_height,
        }
    }

    fn height_for_width(&self, config: &TextMeasurementConfig, width: f32) -> f32 {
        if config.text.is_empty() {
            return 0.0;
        }
        let lines = self.wrapped_line_count(config.text, self.glyph_width(config), width);
        lines as f32 * self.line_height_px(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontSpec;
    use rstest::rstest;

    // 10px font: glyphs are 5px wide, lines 12.5px tall
    #[rstest]
    #[case("", 100.0, 0.0)]
    #[case("hello", 100.0, 12.5)]
    #[case("hello world", 55.0, 12.5)]
    #[case("hello world", 54.0, 25.0)]
    #[case("hello world", 0.0, 25.0)]
    #[case("one\ntwo", 1000.0, 25.0)]
    #[case("hello ", 25.0, 12.5)]
    fn test_height_for_width(#[case] text: &str, #[case] width: f32, #[case] expected: f32) {
        let measurer = HeuristicTextMeasurer::default();
        let font = FontSpec::new("sans-serif", 10.0);
        let config = TextMeasurementConfig::from_font(text, &font);
        assert_eq!(measurer.height_for_width(&config, width), expected);
    }

    #[test]
    fn test_narrower_width_never_reduces_height() {
        let measurer = HeuristicTextMeasurer::default();
        let font = FontSpec::default();
        let config = TextMeasurementConfig::from_font("a fairly long axis title that wraps", &font);

        let mut previous = 0.0;
        for width in (0..=300).rev().step_by(10) {
            let height = measurer.height_for_width(&config, width as f32);
            assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn test_measure_text_bounds() {
        let measurer = HeuristicTextMeasurer::default();
        let font = FontSpec::new("serif", 20.0);
        let bounds = measurer.measure_text_bounds(&TextMeasurementConfig::from_font("ab\nabcd", &font));

        assert_eq!(bounds.width, 40.0);
        assert_eq!(bounds.height, 50.0);
        assert_eq!(bounds.line_height, 25.0);
    }
}
