use crate::side::Side;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a rectangular area with position and size
///
/// Edges follow floating point conventions: `right() == x + width` and
/// `bottom() == y + height`. A rectangle with a non-positive extent in either
/// direction is considered empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Move the left edge, keeping the right edge in place
    pub fn set_left(&mut self, left: f32) {
        let right = self.right();
        self.x = left;
        self.width = right - left;
    }

    /// Move the right edge, keeping the left edge in place
    pub fn set_right(&mut self, right: f32) {
        self.width = right - self.x;
    }

    /// Move the top edge, keeping the bottom edge in place
    pub fn set_top(&mut self, top: f32) {
        let bottom = self.bottom();
        self.y = top;
        self.height = bottom - top;
    }

    /// Move the bottom edge, keeping the top edge in place
    pub fn set_bottom(&mut self, bottom: f32) {
        self.height = bottom - self.y;
    }

    /// Both extents are strictly positive
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    /// Same rectangle with negative extents collapsed to zero.
    ///
    /// The origin is kept, so a collapsed rectangle still marks the place
    /// where the component would have been.
    pub fn with_non_negative_size(self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..self
        }
    }

    /// Cut `amount` away from one side, never letting the rectangle turn inside out
    pub fn shrink(self, side: Side, amount: f32) -> Self {
        let mut rect = self.with_non_negative_size();
        match side {
            Side::Left => rect.set_left((rect.left() + amount).min(rect.right())),
            Side::Right => rect.set_right((rect.right() - amount).max(rect.left())),
            Side::Top => rect.set_top((rect.top() + amount).min(rect.bottom())),
            Side::Bottom => rect.set_bottom((rect.bottom() - amount).max(rect.top())),
        }
        rect
    }

    /// True when the two rectangles share an area larger than zero.
    /// Touching edges do not count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Common area of both rectangles, empty when they don't meet
    pub fn intersected(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    /// True when `other` lies completely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Width and height pair
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Swap width and height, used for scales running vertically
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
