use nalgebra::{Matrix3, Vector3};

use crate::{skeleton::SkeletonPoint, Point2D};

/// Nominal focal length (in pixels) of the sensor's 640x480 colour camera
pub const NOMINAL_COLOR_FOCAL_LENGTH: f32 = 531.15;
pub const DEFAULT_COLOR_FRAME_SIZE: (u32, u32) = (640, 480);

/// Projects sensor-space points into the pixel space of the colour image, so that
/// the overlay lines up with the video of the person.
pub trait CoordinateMapper {
    /// `None` if the point cannot be projected (e.g. it lies at or behind the sensor)
    fn skeleton_to_screen(&self, point: &SkeletonPoint) -> Option<Point2D>;

    fn frame_size(&self) -> (u32, u32);
}

pub struct ColorCameraMapper {
    intrinsics: Matrix3<f32>,
    frame_size: (u32, u32),
}

impl ColorCameraMapper {
    pub fn new(frame_size: (u32, u32), focal_length: f32) -> Self {
        let (width, height) = frame_size;
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        // Sensor y points up, image y points down
        #[rustfmt::skip]
        let intrinsics = Matrix3::new(
            focal_length, 0., cx,
            0., -focal_length, cy,
            0., 0., 1.,
        );
        ColorCameraMapper {
            intrinsics,
            frame_size,
        }
    }
}

impl Default for ColorCameraMapper {
    fn default() -> Self {
        ColorCameraMapper::new(DEFAULT_COLOR_FRAME_SIZE, NOMINAL_COLOR_FOCAL_LENGTH)
    }
}

impl CoordinateMapper for ColorCameraMapper {
    fn skeleton_to_screen(&self, point: &SkeletonPoint) -> Option<Point2D> {
        if point.z <= f32::EPSILON {
            return None;
        }
        let projected = self.intrinsics * Vector3::new(point.x, point.y, point.z);
        Some((projected.x / projected.z, projected.y / projected.z))
    }

    fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }
}
