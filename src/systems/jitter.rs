use log::trace;

use crate::{geometry_utils::distance_points, Point2D};

pub const DEFAULT_JITTER_THRESHOLD: f32 = 1.5;

/// Suppresses redraws for destinations that barely moved since the last one.
///
/// Every destination is remembered, accepted or not, so a slow drift of less than
/// the threshold per frame never triggers a redraw. There is no smoothing.
pub struct JitterFilter {
    threshold: f32,
    previous: Point2D,
}

impl JitterFilter {
    pub fn new(threshold: f32) -> Self {
        JitterFilter {
            threshold,
            previous: (0., 0.),
        }
    }

    /// Returns true if the shirt should be redrawn at `destination`
    pub fn accept(&mut self, destination: Point2D) -> bool {
        let difference = distance_points(&self.previous, &destination);
        self.previous = destination;
        if difference < self.threshold {
            trace!("Moved {:.2}px, below threshold; no redraw", difference);
            false
        } else {
            true
        }
    }

    pub fn previous(&self) -> Point2D {
        self.previous
    }

    pub fn reset(&mut self) {
        self.previous = (0., 0.);
    }
}

impl Default for JitterFilter {
    fn default() -> Self {
        JitterFilter::new(DEFAULT_JITTER_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_only_at_or_beyond_threshold() {
        let mut filter = JitterFilter::default();
        assert!(filter.accept((100., 100.)));
        assert!(!filter.accept((101., 100.)));
        assert!(filter.accept((102.5, 100.)));
        assert!(!filter.accept((102.5, 101.4)));
        assert!(filter.accept((102.5, 103.)));
    }

    #[test]
    fn test_rejected_destination_is_still_remembered() {
        let mut filter = JitterFilter::default();
        assert!(filter.accept((10., 10.)));
        assert!(!filter.accept((11., 10.)));
        assert_eq!(filter.previous(), (11., 10.));
        // 1.2px from the last submitted point, 2.2px from the last drawn one
        assert!(!filter.accept((12.2, 10.)));
    }

    #[test]
    fn test_starts_at_origin() {
        let mut filter = JitterFilter::default();
        assert_eq!(filter.previous(), (0., 0.));
        assert!(!filter.accept((1., 1.)));
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut filter = JitterFilter::new(5.);
        assert!(filter.accept((50., 50.)));
        filter.reset();
        assert_eq!(filter.previous(), (0., 0.));
        assert!(filter.accept((50., 50.)));
    }
}
