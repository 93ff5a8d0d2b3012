use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::VariantNames;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, VariantNames)]
#[cfg_attr(feature = "serde", serde(untagged))]
#[strum(serialize_all = "snake_case")]
pub enum FontWeight {
    Name(FontWeightNameSpec),
    Number(f32),
}

impl Hash for FontWeight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Name(spec) => spec.hash(state),
            Self::Number(num) => OrderedFloat::from(*num).hash(state),
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Name(FontWeightNameSpec::Normal)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum FontWeightNameSpec {
    #[default]
    Normal,
    Bold,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Font used to measure a piece of text
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name, or one of the generic families ("serif", "sans-serif", ...)
    pub family: String,
    /// Font size in pixels
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FontWeight::Name(FontWeightNameSpec::Bold))
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 10.0)
    }
}

impl Hash for FontSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        OrderedFloat::from(self.size).hash(state);
        self.weight.hash(state);
        self.style.hash(state);
    }
}

/// Text content, optionally carrying its own font
///
/// A text without a font of its own is painted (and measured) with the font
/// of the label that displays it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Hash)]
pub struct Text {
    pub content: String,
    pub font: Option<FontSpec>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: None,
        }
    }

    /// Pin the font used for painting this text
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Copy of this text whose font is `fallback` unless it already has one
    pub fn resolved(&self, fallback: &FontSpec) -> Text {
        Text {
            content: self.content.clone(),
            font: Some(self.font.clone().unwrap_or_else(|| fallback.clone())),
        }
    }

    /// Font to measure with, `fallback` when the text has none
    pub fn font_or<'a>(&'a self, fallback: &'a FontSpec) -> &'a FontSpec {
        self.font.as_ref().unwrap_or(fallback)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::new(value)
    }
}
