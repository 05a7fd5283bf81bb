//! Clipping Region

/// Test if the point (`x`,`y`) lies on a `width` x `height` image
///
/// Coordinates are signed so points left of or above the image compare
///   correctly
///
///     use paint::in_bounds;
///
///     assert!(in_bounds(0, 0, 4, 2));
///     assert!(in_bounds(3, 1, 4, 2));
///     assert!(!in_bounds(4, 1, 4, 2));
///     assert!(!in_bounds(-1, 0, 4, 2));
///
pub fn in_bounds(x: i64, y: i64, width: usize, height: usize) -> bool {
    0 <= x && x < width as i64 && 0 <= y && y < height as i64
}

/// Rectangle, half-open on the maximum sides
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value, excluded
    pub x2: T,
    /// Maximum y value, excluded
    pub y2: T,
}

impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Rectangle holds no points
    pub fn is_empty(&self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }
    /// Point (x,y) is inside
    pub fn contains(&self, x: T, y: T) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }
    /// Overlap of two rectangles, `None` if they share no points
    pub fn intersect(&self, r: &Rectangle<T>) -> Option<Rectangle<T>> {
        let x1 = if self.x1 > r.x1 { self.x1 } else { r.x1 };
        let y1 = if self.y1 > r.y1 { self.y1 } else { r.y1 };
        let x2 = if self.x2 < r.x2 { self.x2 } else { r.x2 };
        let y2 = if self.y2 < r.y2 { self.y2 } else { r.y2 };
        let out = Self { x1, y1, x2, y2 };
        if out.is_empty() { None } else { Some(out) }
    }
}

impl Rectangle<i64> {
    /// Area covered by a `width` x `height` image
    pub fn image(width: usize, height: usize) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }
}
