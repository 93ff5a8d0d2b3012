#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::VariantNames;

/// Border of the plot that hosts a stack of scales
///
/// Scales on `Left` and `Right` run vertically, scales on `Top` and `Bottom`
/// run horizontally.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    /// Scales on this side run horizontally (an x axis)
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Scales on this side run vertically (a y axis)
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

/// One value per side of the plot
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideMap<T> {
    pub left: T,
    pub right: T,
    pub bottom: T,
    pub top: T,
}

impl<T> SideMap<T> {
    pub fn new(left: T, right: T, bottom: T, top: T) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            left: f(Side::Left),
            right: f(Side::Right),
            bottom: f(Side::Bottom),
            top: f(Side::Top),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, &self[side]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> SideMap<U> {
        SideMap::from_fn(|side| f(side, &self[side]))
    }
}

impl<T: Clone> SideMap<T> {
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Top => &self.top,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Top => &mut self.top,
        }
    }
}

/// Placement of the legend relative to the rest of the plot
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum LegendPosition {
    Left,
    Right,
    #[default]
    Bottom,
    Top,
}

impl LegendPosition {
    /// Side of the bounding rectangle the legend is attached to
    pub fn side(self) -> Side {
        match self {
            LegendPosition::Left => Side::Left,
            LegendPosition::Right => Side::Right,
            LegendPosition::Bottom => Side::Bottom,
            LegendPosition::Top => Side::Top,
        }
    }

    /// Legend is a strip across the top or bottom of the plot
    pub fn is_horizontal(self) -> bool {
        self.side().is_horizontal()
    }

    /// Ratio used when the caller passes a non-positive one
    pub fn default_ratio(self) -> f32 {
        if self.is_horizontal() {
            0.33
        } else {
            0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_map_indexing() {
        let mut map = SideMap::new(1, 2, 3, 4);
        assert_eq!(map[Side::Bottom], 3);

        map[Side::Top] += 10;
        assert_eq!(map.top, 14);

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled, SideMap::new(2, 4, 6, 28));

        let sides: Vec<_> = map.iter().map(|(side, _)| side).collect();
        assert_eq!(sides, Side::ALL.to_vec());
    }

    #[test]
    fn test_orientation() {
        assert!(Side::Top.is_horizontal());
        assert!(Side::Left.is_vertical());
        assert!(LegendPosition::Bottom.is_horizontal());
        assert_eq!(LegendPosition::Right.default_ratio(), 0.5);
        assert_eq!(Side::VARIANTS, &["left", "right", "bottom", "top"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_side_map_serde() {
        let map: SideMap<f32> =
            serde_json::from_str(r#"{"left": 1.0, "right": 2.0, "bottom": 3.0, "top": 4.0}"#)
                .unwrap();
        assert_eq!(map[Side::Right], 2.0);

        let side: Side = serde_json::from_str(r#""bottom""#).unwrap();
        assert_eq!(side, Side::Bottom);
    }
}
