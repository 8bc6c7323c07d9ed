use meetpoint_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Sum of Manhattan distances from `p` to every point in `others`.
pub fn manhattan_sum(p: Point, others: &[Point]) -> i64 {
    others.iter().map(|&o| i64::from(manhattan(p, o))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 4);
        let b = Point::new(-2, 0);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_sum_over_points() {
        let houses = [Point::at(0, 0), Point::at(0, 4), Point::at(2, 2)];
        assert_eq!(manhattan_sum(Point::at(0, 2), &houses), 6);
        assert_eq!(manhattan_sum(Point::ZERO, &[]), 0);
    }
}
