use std::ops::{BitOr, BitOrAssign};

/// Switches that leave components out of a single layout pass.
///
/// Mostly used for measurement-only passes, e.g. when rendering a plot
/// to a document without its frames or scrollbars.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutOptions(u8);

impl LayoutOptions {
    /// Don't reserve space for the legend's scrollbars
    pub const IGNORE_SCROLLBARS: Self = Self(0x01);
    /// Don't reserve space for frames of title, footer and canvas
    pub const IGNORE_FRAMES: Self = Self(0x02);
    pub const IGNORE_LEGEND: Self = Self(0x04);
    pub const IGNORE_TITLE: Self = Self(0x08);
    pub const IGNORE_FOOTER: Self = Self(0x10);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for LayoutOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayoutOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}
