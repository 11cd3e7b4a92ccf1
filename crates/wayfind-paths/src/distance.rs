use wayfind_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_delta(b);
    dx + dy
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_delta(b);
    dx.max(dy)
}

/// Straight-line move estimate: the L1 distance as a float.
///
/// Admissible for 4-way movement with step cost ≥ 1. With diagonal moves
/// it overestimates.
#[inline]
pub fn straight_line(a: Point, b: Point) -> f64 {
    f64::from(manhattan(a, b))
}

/// Pythagorean (octile) estimate: √2 per diagonal step, 1 per straight step.
#[inline]
pub fn pythagorean(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    (std::f64::consts::SQRT_2 * dx.min(dy) + (dy - dx).abs()).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -1);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn straight_line_matches_manhattan() {
        assert_eq!(straight_line(Point::new(0, 0), Point::new(2, -3)), 5.0);
    }

    #[test]
    fn pythagorean_mixes_diagonal_and_straight() {
        let d = pythagorean(Point::new(0, 0), Point::new(3, 1));
        assert!((d - (std::f64::consts::SQRT_2 + 2.0)).abs() < 1e-12);
        assert_eq!(pythagorean(Point::new(2, 2), Point::new(2, 5)), 3.0);
    }

    #[test]
    fn heuristics_are_non_negative_and_symmetric() {
        let r = wayfind_core::Range::new(-3, -3, 4, 4);
        for a in r {
            for b in r {
                assert!(straight_line(a, b) >= 0.0);
                assert!(pythagorean(a, b) >= 0.0);
                assert_eq!(straight_line(a, b), straight_line(b, a));
                assert_eq!(pythagorean(a, b), pythagorean(b, a));
            }
        }
    }
}
