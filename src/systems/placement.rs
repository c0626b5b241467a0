use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    geometry_utils::distance_points,
    mapping::CoordinateMapper,
    skeleton::{JointType, Skeleton},
    Point2D,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSettings {
    pub width_scale: f32,
    pub height_scale: f32,
    pub top_offset: f32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        PlacementSettings {
            width_scale: 1.75,
            height_scale: 1.25,
            top_offset: 10.,
        }
    }
}

/// Where (and how big) to draw the shirt, in colour image pixels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Screen position of the centre shoulder
    pub destination: Point2D,
    pub width: f32,
    pub height: f32,
    pub top_offset: f32,
}

impl Placement {
    pub fn top_left(&self) -> Point2D {
        let (x, y) = self.destination;
        (x - self.width / 2., y - self.top_offset)
    }

    /// (left, top, width, height)
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let (left, top) = self.top_left();
        (left, top, self.width, self.height)
    }
}

pub struct PlacementCalculator {
    settings: PlacementSettings,
}

impl PlacementCalculator {
    pub fn new(settings: PlacementSettings) -> Self {
        PlacementCalculator { settings }
    }

    /// Size the shirt from the shoulder span (width) and head-to-hip span (height).
    /// Nothing is placed unless the centre shoulder is properly tracked.
    pub fn calculate(
        &self,
        skeleton: &Skeleton,
        mapper: &dyn CoordinateMapper,
    ) -> Option<Placement> {
        let centre_shoulder = skeleton.joint(JointType::ShoulderCenter);
        if !centre_shoulder.is_tracked() {
            trace!(
                "Centre shoulder is {:?}, not placing shirt",
                centre_shoulder.tracking_state
            );
            return None;
        }

        let project = |joint_type: JointType| {
            let point = mapper.skeleton_to_screen(&skeleton.joint(joint_type).position);
            if point.is_none() {
                debug!("Could not map {:?} to screen; skip frame", joint_type);
            }
            point
        };

        let destination = project(JointType::ShoulderCenter)?;
        let left_shoulder = project(JointType::ShoulderLeft)?;
        let right_shoulder = project(JointType::ShoulderRight)?;
        let head = project(JointType::Head)?;
        let hip = project(JointType::HipCenter)?;

        let width = distance_points(&left_shoulder, &right_shoulder) * self.settings.width_scale;
        let height = distance_points(&head, &hip) * self.settings.height_scale;

        Some(Placement {
            destination,
            width,
            height,
            top_offset: self.settings.top_offset,
        })
    }
}

impl Default for PlacementCalculator {
    fn default() -> Self {
        PlacementCalculator::new(PlacementSettings::default())
    }
}
