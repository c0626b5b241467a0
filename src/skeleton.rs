use serde::{Deserialize, Serialize};

/// Up to this many bodies can be reported in a single frame
pub const MAX_SKELETONS: usize = 6;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum JointType {
    HipCenter,
    Spine,
    ShoulderCenter,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
}

impl JointType {
    pub const COUNT: usize = 20;

    pub const ALL: [JointType; JointType::COUNT] = [
        JointType::HipCenter,
        JointType::Spine,
        JointType::ShoulderCenter,
        JointType::Head,
        JointType::ShoulderLeft,
        JointType::ElbowLeft,
        JointType::WristLeft,
        JointType::HandLeft,
        JointType::ShoulderRight,
        JointType::ElbowRight,
        JointType::WristRight,
        JointType::HandRight,
        JointType::HipLeft,
        JointType::KneeLeft,
        JointType::AnkleLeft,
        JointType::FootLeft,
        JointType::HipRight,
        JointType::KneeRight,
        JointType::AnkleRight,
        JointType::FootRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum JointTrackingState {
    #[default]
    NotTracked,
    /// Position is a guess by the sensor, e.g. the joint is occluded
    Inferred,
    Tracked,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SkeletonTrackingState {
    #[default]
    NotTracked,
    /// Only the overall body position is known; joints are not usable
    PositionOnly,
    Tracked,
}

/// Position in sensor space, in metres: x to the right, y up, z away from the sensor
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SkeletonPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SkeletonPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        SkeletonPoint { x, y, z }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Joint {
    pub position: SkeletonPoint,
    #[serde(default)]
    pub tracking_state: JointTrackingState,
}

impl Joint {
    pub fn new(position: SkeletonPoint, tracking_state: JointTrackingState) -> Self {
        Joint {
            position,
            tracking_state,
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.tracking_state == JointTrackingState::Tracked
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Skeleton {
    #[serde(default)]
    pub tracking_id: u32,
    #[serde(default)]
    pub tracking_state: SkeletonTrackingState,
    /// Indexed by [`JointType::index`]; missing trailing entries count as not tracked
    #[serde(default)]
    pub joints: Vec<Joint>,
}

impl Skeleton {
    pub fn new(tracking_id: u32, tracking_state: SkeletonTrackingState) -> Self {
        Skeleton {
            tracking_id,
            tracking_state,
            joints: vec![Joint::default(); JointType::COUNT],
        }
    }

    pub fn joint(&self, joint_type: JointType) -> Joint {
        self.joints
            .get(joint_type.index())
            .copied()
            .unwrap_or_default()
    }

    pub fn set_joint(&mut self, joint_type: JointType, joint: Joint) {
        if self.joints.len() < JointType::COUNT {
            self.joints.resize(JointType::COUNT, Joint::default());
        }
        self.joints[joint_type.index()] = joint;
    }

    pub fn is_tracked(&self) -> bool {
        self.tracking_state == SkeletonTrackingState::Tracked
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonFrame {
    pub frame_number: u64,
    pub skeletons: Vec<Skeleton>,
}

impl SkeletonFrame {
    pub fn tracked_skeletons(&self) -> impl Iterator<Item = &Skeleton> {
        self.skeletons
            .iter()
            .take(MAX_SKELETONS)
            .filter(|s| s.is_tracked())
    }
}

/// Bone connections (start joint, end joint), drawn in the debug overlay
pub const BONES: [(JointType, JointType); 19] = [
    // Torso
    (JointType::Head, JointType::ShoulderCenter),
    (JointType::ShoulderCenter, JointType::ShoulderLeft),
    (JointType::ShoulderCenter, JointType::ShoulderRight),
    (JointType::ShoulderCenter, JointType::Spine),
    (JointType::Spine, JointType::HipCenter),
    (JointType::HipCenter, JointType::HipLeft),
    (JointType::HipCenter, JointType::HipRight),
    // Left arm
    (JointType::ShoulderLeft, JointType::ElbowLeft),
    (JointType::ElbowLeft, JointType::WristLeft),
    (JointType::WristLeft, JointType::HandLeft),
    // Right arm
    (JointType::ShoulderRight, JointType::ElbowRight),
    (JointType::ElbowRight, JointType::WristRight),
    (JointType::WristRight, JointType::HandRight),
    // Left leg
    (JointType::HipLeft, JointType::KneeLeft),
    (JointType::KneeLeft, JointType::AnkleLeft),
    (JointType::AnkleLeft, JointType::FootLeft),
    // Right leg
    (JointType::HipRight, JointType::KneeRight),
    (JointType::KneeRight, JointType::AnkleRight),
    (JointType::AnkleRight, JointType::FootRight),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneStyle {
    Tracked,
    Inferred,
}

/// A bone is only drawn if neither end is lost and at least one end is tracked;
/// it only counts as tracked when both ends are.
pub fn bone_style(a: JointTrackingState, b: JointTrackingState) -> Option<BoneStyle> {
    use JointTrackingState::*;
    match (a, b) {
        (NotTracked, _) | (_, NotTracked) => None,
        (Inferred, Inferred) => None,
        (Tracked, Tracked) => Some(BoneStyle::Tracked),
        _ => Some(BoneStyle::Inferred),
    }
}
