#![forbid(unsafe_code)]

//! Pixel geometry primitives.

/// An axis-aligned rectangle in container pixels.
///
/// Origin is the container's top-left corner, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u32,
    /// Top edge (inclusive).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at `(x, y)` with the given size.
    #[inline]
    pub const fn at(x: u32, y: u32, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check whether two rectangles share any pixel.
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        // The intersection's top-left pixel, if it exists.
        let x = if self.x > other.x { self.x } else { other.x };
        let y = if self.y > other.y { self.y } else { other.y };
        x < self.right() && x < other.right() && y < self.bottom() && y < other.bottom()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Padding on the four sides of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Sides {
    /// No padding.
    pub const ZERO: Self = Self::all(0);

    /// Equal padding on every side.
    pub const fn all(val: u32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Padding in CSS order: top, right, bottom, left.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}
