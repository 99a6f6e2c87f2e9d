//! Running bounding ranges accumulated from a coordinate stream

use std::fmt;

/// Running (min, max) range over a single axis.
///
/// The range starts unset; the first accepted value initializes both bounds.
/// An explicit seen flag stands in for infinity sentinels so an axis that
/// never saw a value renders as plain zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
    seen: bool,
}

impl AxisRange {
    /// Create an unset range
    pub fn new() -> Self {
        AxisRange {
            min: 0.0,
            max: 0.0,
            seen: false,
        }
    }

    /// Fold one value into the range. Non-finite values are ignored.
    pub fn update(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if self.seen {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        } else {
            self.min = value;
            self.max = value;
            self.seen = true;
        }
    }

    /// Whether at least one value was accepted
    pub fn has_values(&self) -> bool {
        self.seen
    }

    /// Lower bound, or 0.0 while unset
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound, or 0.0 while unset
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Extent of the range (max - min), or 0.0 while unset
    pub fn span(&self) -> f64 {
        if self.seen {
            self.max - self.min
        } else {
            0.0
        }
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        AxisRange::new()
    }
}

/// Running 3D extents over three independent axis streams.
///
/// Coordinates arrive one axis at a time, so the axes are tracked separately
/// rather than as paired points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreamBounds {
    /// X axis range (group code 10)
    pub x: AxisRange,
    /// Y axis range (group code 20)
    pub y: AxisRange,
    /// Z axis range (group code 30)
    pub z: AxisRange,
}

impl StreamBounds {
    /// Create bounds with all axes unset
    pub fn new() -> Self {
        StreamBounds::default()
    }

    /// Extent along the X axis
    pub fn width(&self) -> f64 {
        self.x.span()
    }

    /// Extent along the Y axis
    pub fn height(&self) -> f64 {
        self.y.span()
    }

    /// Extent along the Z axis
    pub fn depth(&self) -> f64 {
        self.z.span()
    }

    /// Minimum corner as [x, y, z], with unset axes reported as 0.0
    pub fn min_point(&self) -> [f64; 3] {
        [self.x.min(), self.y.min(), self.z.min()]
    }

    /// Maximum corner as [x, y, z], with unset axes reported as 0.0
    pub fn max_point(&self) -> [f64; 3] {
        [self.x.max(), self.y.max(), self.z.max()]
    }

    /// Whether any axis accepted at least one value
    pub fn has_values(&self) -> bool {
        self.x.has_values() || self.y.has_values() || self.z.has_values()
    }
}

impl fmt::Display for StreamBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = self.min_point();
        let max = self.max_point();
        write!(
            f,
            "Bounds[({}, {}, {}) -> ({}, {}, {})]",
            min[0], min[1], min[2], max[0], max[1], max[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_range_reports_zeros() {
        let range = AxisRange::new();
        assert!(!range.has_values());
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 0.0);
        assert_eq!(range.span(), 0.0);
    }

    #[test]
    fn test_first_value_initializes_both_bounds() {
        let mut range = AxisRange::new();
        range.update(-3.5);
        assert!(range.has_values());
        assert_eq!(range.min(), -3.5);
        assert_eq!(range.max(), -3.5);
        assert_eq!(range.span(), 0.0);
    }

    #[test]
    fn test_range_widens_monotonically() {
        let mut range = AxisRange::new();
        for v in [10.0, -5.0, 3.0, 12.0, 0.0] {
            range.update(v);
        }
        assert_eq!(range.min(), -5.0);
        assert_eq!(range.max(), 12.0);
        assert_eq!(range.span(), 17.0);
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let mut range = AxisRange::new();
        range.update(f64::INFINITY);
        range.update(f64::NEG_INFINITY);
        range.update(f64::NAN);
        assert!(!range.has_values());

        range.update(2.0);
        range.update(f64::NAN);
        assert_eq!(range.min(), 2.0);
        assert_eq!(range.max(), 2.0);
    }

    #[test]
    fn test_bounds_dimensions() {
        let mut bounds = StreamBounds::new();
        bounds.x.update(0.0);
        bounds.x.update(10.0);
        bounds.y.update(-2.0);
        bounds.y.update(3.0);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 5.0);
        assert_eq!(bounds.depth(), 0.0);
        assert_eq!(bounds.min_point(), [0.0, -2.0, 0.0]);
        assert_eq!(bounds.max_point(), [10.0, 3.0, 0.0]);
        assert!(bounds.has_values());
    }

    #[test]
    fn test_axes_accumulate_independently() {
        let mut bounds = StreamBounds::new();
        bounds.z.update(7.0);
        assert!(bounds.has_values());
        assert!(!bounds.x.has_values());
        assert_eq!(bounds.min_point(), [0.0, 0.0, 7.0]);
        assert_eq!(bounds.max_point(), [0.0, 0.0, 7.0]);
    }
}
