use crate::Point2D;

pub fn distance_points(a: &Point2D, b: &Point2D) -> f32 {
    let (x1, y1) = *a;
    let (x2, y2) = *b;

    f32::sqrt(f32::powi(x1 - x2, 2) + f32::powi(y1 - y2, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance_points(&(0., 0.), &(3., 4.)), 5.);
        assert_eq!(distance_points(&(3., 4.), &(0., 0.)), 5.);
        assert_eq!(distance_points(&(1., 1.), &(4., 5.)), 5.);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(distance_points(&(12.5, -3.), &(12.5, -3.)), 0.);
    }
}
