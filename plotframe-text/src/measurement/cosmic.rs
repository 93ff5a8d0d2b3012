use cosmic_text::{fontdb::Database, Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use super::{TextBounds, TextMeasurementConfig, TextMeasurer};
use crate::error::PlotframeTextError;
use crate::types::{FontStyle, FontWeight, FontWeightNameSpec};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref FONT_SYSTEM: Mutex<FontSystem> = Mutex::new(build_font_system());
}

fn build_font_system() -> FontSystem {
    let mut font_system = FontSystem::new();
    setup_default_fonts(font_system.db_mut());
    font_system
}

fn setup_default_fonts(fontdb: &mut Database) {
    let available = |family: &str| {
        fontdb
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == family))
    };

    let sans = ["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans"]
        .into_iter()
        .find(|family| available(family));
    let mono = ["Courier New", "Courier", "Liberation Mono", "DejaVu Sans Mono"]
        .into_iter()
        .find(|family| available(family));
    let serif = ["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif"]
        .into_iter()
        .find(|family| available(family));

    if let Some(family) = sans {
        fontdb.set_sans_serif_family(family);
    }
    if let Some(family) = mono {
        fontdb.set_monospace_family(family);
    }
    if let Some(family) = serif {
        fontdb.set_serif_family(family);
    }
}

fn lock_font_system() -> MutexGuard<'static, FontSystem> {
    // Layout runs on the render path, a poisoned lock still holds a usable font db
    FONT_SYSTEM
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Text measurer that shapes text with `cosmic-text` using the system fonts
#[derive(Debug, Default, Clone, Copy)]
pub struct CosmicTextMeasurer {}

impl CosmicTextMeasurer {
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        let mut font_system = lock_font_system();
        let buffer = make_cosmic_text_buffer(config, None, &mut font_system);
        measure_text_buffer(&buffer)
    }

    fn height_for_width(&self, config: &TextMeasurementConfig, width: f32) -> f32 {
        if config.text.is_empty() {
            return 0.0;
        }
        let mut font_system = lock_font_system();
        let buffer = make_cosmic_text_buffer(config, Some(width.max(0.0)), &mut font_system);
        buffer.layout_runs().map(|run| run.line_height).sum()
    }
}

pub fn measure_text_buffer(buffer: &Buffer) -> TextBounds {
    let runs = buffer.layout_runs().collect::<Vec<_>>();

    if runs.is_empty() {
        return TextBounds::empty();
    }

    let mut max_ascent = 0.0;
    let mut max_descent = 0.0;
    let mut max_line_height = 0.0;
    let mut total_height = 0.0;

    for run in &runs {
        let ascent = run.line_y - run.line_top;
        let descent = run.line_height - ascent;

        max_ascent = f32::max(max_ascent, ascent);
        max_descent = f32::max(max_descent, descent);
        max_line_height = f32::max(max_line_height, run.line_height);
        total_height += run.line_height;
    }

    let width = runs.iter().map(|run| run.line_w).fold(0.0, f32::max);

    TextBounds {
        width,
        height: total_height,
        ascent: max_ascent,
        descent: max_descent,
        line_height: max_line_height,
    }
}

/// Shape `config.text` into a buffer, wrapping at `wrap_width` when given
pub fn make_cosmic_text_buffer(
    config: &TextMeasurementConfig,
    wrap_width: Option<f32>,
    font_system: &mut FontSystem,
) -> Buffer {
    let mut attrs = Attrs::new();
    attrs.family = match config.font.to_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans serif" | "sans-serif" => Family::SansSerif,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        "monospace" => Family::Monospace,
        _ => Family::Name(config.font),
    };

    attrs.weight = match config.font_weight {
        FontWeight::Name(FontWeightNameSpec::Bold) => cosmic_text::Weight::BOLD,
        FontWeight::Name(FontWeightNameSpec::Normal) => cosmic_text::Weight::NORMAL,
        FontWeight::Number(w) => cosmic_text::Weight(*w as u16),
    };

    attrs.style = match config.font_style {
        FontStyle::Normal => cosmic_text::Style::Normal,
        FontStyle::Italic => cosmic_text::Style::Italic,
    };

    let metrics = Metrics::new(config.font_size, config.font_size * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    buffer.set_size(font_system, wrap_width, None);
    buffer.set_text(font_system, config.text, attrs, Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    buffer
}

/// Make the fonts of `dir` available to every [`CosmicTextMeasurer`]
pub fn register_font_directory(dir: impl AsRef<Path>) -> Result<(), PlotframeTextError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PlotframeTextError::FontDirectoryError(
            dir.display().to_string(),
        ));
    }

    let mut font_system = lock_font_system();
    let fontdb = font_system.db_mut();
    fontdb.load_fonts_dir(dir);
    setup_default_fonts(fontdb);
    tracing::debug!(dir = %dir.display(), faces = fontdb.len(), "registered font directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontSpec;

    #[test]
    fn test_height_grows_when_width_shrinks() {
        let measurer = CosmicTextMeasurer::new();
        let font = FontSpec::new("sans-serif", 16.0);
        let config = TextMeasurementConfig::from_font("A title long enough to wrap", &font);

        let wide = measurer.height_for_width(&config, 2000.0);
        let narrow = measurer.height_for_width(&config, 20.0);

        assert!(wide >= 0.0);
        assert!(narrow >= wide);
    }

    #[test]
    fn test_empty_text_has_no_height() {
        let measurer = CosmicTextMeasurer::new();
        let font = FontSpec::default();
        let config = TextMeasurementConfig::from_font("", &font);
        assert_eq!(measurer.height_for_width(&config, 100.0), 0.0);
    }

    #[test]
    fn test_register_missing_font_directory() {
        let result = register_font_directory("/definitely/not/a/font/dir");
        assert!(matches!(
            result,
            Err(PlotframeTextError::FontDirectoryError(_))
        ));
    }
}
