//! Planar coordinate types.
//!
//! The world is a flat rectangle measured in abstract units (the reference
//! layout is 800 × 600).  `f32` gives far more precision than a town of that
//! size needs.

/// A point in world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_2(other).sqrt()
    }

    /// Squared Euclidean distance, for comparisons.
    #[inline]
    pub fn distance_2(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Move at most `speed` units in a straight line toward `target`.
    ///
    /// Returns the new position and whether `target` was reached.  A target
    /// closer than `speed` is snapped to exactly, so callers may compare
    /// positions for equality after arrival.
    pub fn step_toward(self, target: Position, speed: f32) -> (Position, bool) {
        let distance = self.distance(target);
        if distance < speed || distance == 0.0 {
            return (target, true);
        }
        let scale = speed / distance;
        let next = Position::new(
            self.x + (target.x - self.x) * scale,
            self.y + (target.y - self.y) * scale,
        );
        (next, false)
    }

    #[inline]
    pub fn as_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// An axis-aligned rectangle: building footprints and the world itself.
///
/// `y` grows downward, so the "bottom" edge is `y + height`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin.
    #[inline]
    pub const fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment test (`[x, right) × [y, bottom)`).
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Midpoint of the bottom edge, where building entrances sit.
    #[inline]
    pub fn bottom_center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.bottom())
    }

    /// The rectangle shrunk by `margin` on every side, or `None` if nothing
    /// would be left.
    pub fn inset(&self, margin: f32) -> Option<Bounds> {
        let width = self.width - 2.0 * margin;
        let height = self.height - 2.0 * margin;
        if width < 0.0 || height < 0.0 {
            return None;
        }
        Some(Bounds::new(self.x + margin, self.y + margin, width, height))
    }

    /// `true` if the two rectangles share any interior area.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
