use log::{debug, info};

use crate::{
    mapping::CoordinateMapper,
    skeleton::SkeletonFrame,
    systems::{placement::Placement, wardrobe::Wardrobe, Systems},
    voice::{parse_command, RecognitionEvent, VoiceCommand},
};

/// Everything the overlay knows between frames. Owned by a single thread (the UI
/// thread, or the headless main loop); sensor frames and speech events are
/// handed to it over channels.
pub struct OverlaySession {
    systems: Systems,
    /// The placement the shirt is currently drawn at
    placement: Option<Placement>,
    debug: bool,
    recognized_text: Option<String>,
    frames_processed: u64,
}

impl OverlaySession {
    pub fn new(systems: Systems, debug: bool) -> Self {
        OverlaySession {
            systems,
            placement: None,
            debug,
            recognized_text: None,
            frames_processed: 0,
        }
    }

    /// Run every tracked skeleton through placement and the jitter filter. Returns the
    /// new placement if the shirt should be redrawn; with several people in view the
    /// last accepted one wins.
    pub fn process_frame(
        &mut self,
        frame: &SkeletonFrame,
        mapper: &dyn CoordinateMapper,
    ) -> Option<Placement> {
        self.frames_processed += 1;
        let Systems {
            placement_calculator,
            jitter_filter,
            ..
        } = &mut self.systems;

        let mut redraw = None;
        for skeleton in frame.tracked_skeletons() {
            if let Some(placement) = placement_calculator.calculate(skeleton, mapper) {
                if jitter_filter.accept(placement.destination) {
                    redraw = Some(placement);
                }
            }
        }

        if let Some(placement) = redraw {
            debug!(
                "Frame #{}: redraw shirt at {:?}",
                frame.frame_number,
                placement.rect()
            );
            self.placement = Some(placement);
        }
        redraw
    }

    pub fn handle_recognition(&mut self, event: RecognitionEvent) -> Option<VoiceCommand> {
        match event {
            RecognitionEvent::Recognizing(text) => {
                if self.debug {
                    self.recognized_text = Some(text);
                }
                None
            }
            RecognitionEvent::Recognized(text) => {
                info!("Recognised speech: \"{}\"", text);
                let command = parse_command(&text);
                if self.debug {
                    self.recognized_text = Some(text);
                }
                if let Some(command) = command {
                    self.apply_command(command);
                }
                command
            }
            RecognitionEvent::NoMatch => {
                debug!("NOMATCH: speech could not be recognised");
                None
            }
        }
    }

    pub fn apply_command(&mut self, command: VoiceCommand) {
        match command {
            VoiceCommand::Next => {
                self.systems.wardrobe.select_next();
                self.systems.jitter_filter.reset();
            }
            VoiceCommand::Previous => {
                self.systems.wardrobe.select_previous();
                self.systems.jitter_filter.reset();
            }
            VoiceCommand::ToggleDebug => {
                self.debug = !self.debug;
                info!("Debug overlay {}", if self.debug { "on" } else { "off" });
            }
        }
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.systems.wardrobe
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn recognized_text(&self) -> Option<&str> {
        self.recognized_text.as_deref()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::HangerConfig,
        mapping::ColorCameraMapper,
        skeleton::{
            Joint, JointTrackingState, JointType, Skeleton, SkeletonPoint, SkeletonTrackingState,
        },
    };

    fn session(debug: bool) -> OverlaySession {
        let names = vec!["red".into(), "green".into(), "blue".into()];
        let systems = Systems::new(&HangerConfig::default(), names).unwrap();
        OverlaySession::new(systems, debug)
    }

    /// A person standing 2m in front of the sensor, shifted sideways by `dx` metres
    fn person(dx: f32, state: SkeletonTrackingState) -> Skeleton {
        let mut skeleton = Skeleton::new(1, state);
        let tracked =
            |x: f32, y: f32| Joint::new(SkeletonPoint::new(x + dx, y, 2.), JointTrackingState::Tracked);
        skeleton.set_joint(JointType::ShoulderCenter, tracked(0., 0.3));
        skeleton.set_joint(JointType::ShoulderLeft, tracked(-0.2, 0.25));
        skeleton.set_joint(JointType::ShoulderRight, tracked(0.2, 0.25));
        skeleton.set_joint(JointType::Head, tracked(0., 0.5));
        skeleton.set_joint(JointType::HipCenter, tracked(0., -0.2));
        skeleton
    }

    fn frame(frame_number: u64, skeletons: Vec<Skeleton>) -> SkeletonFrame {
        SkeletonFrame {
            frame_number,
            skeletons,
        }
    }

    #[test]
    fn test_tracked_person_gets_a_shirt() {
        let mut s = session(false);
        let mapper = ColorCameraMapper::default();
        let placement = s
            .process_frame(
                &frame(1, vec![person(0., SkeletonTrackingState::Tracked)]),
                &mapper,
            )
            .unwrap();
        assert_eq!(s.placement(), Some(&placement));
        let (x, _y) = placement.destination;
        assert!((x - 320.).abs() < 0.01);
        assert!(placement.width > 0.);
        assert!(placement.height > placement.width);
    }

    #[test]
    fn test_small_movements_keep_the_shirt_in_place() {
        let mut s = session(false);
        let mapper = ColorCameraMapper::default();
        let first = s
            .process_frame(
                &frame(1, vec![person(0., SkeletonTrackingState::Tracked)]),
                &mapper,
            )
            .unwrap();
        // 1mm at 2m is well under a pixel
        assert!(s
            .process_frame(
                &frame(2, vec![person(0.001, SkeletonTrackingState::Tracked)]),
                &mapper,
            )
            .is_none());
        assert_eq!(s.placement(), Some(&first));
        // 10cm is tens of pixels
        assert!(s
            .process_frame(
                &frame(3, vec![person(0.1, SkeletonTrackingState::Tracked)]),
                &mapper,
            )
            .is_some());
        assert_ne!(s.placement(), Some(&first));
    }

    #[test]
    fn test_untracked_bodies_are_ignored() {
        let mut s = session(false);
        let mapper = ColorCameraMapper::default();
        let result = s.process_frame(
            &frame(
                1,
                vec![
                    person(0., SkeletonTrackingState::PositionOnly),
                    person(0.5, SkeletonTrackingState::NotTracked),
                ],
            ),
            &mapper,
        );
        assert!(result.is_none());
        assert!(s.placement().is_none());
        assert_eq!(s.frames_processed(), 1);
    }

    #[test]
    fn test_last_tracked_body_wins() {
        let mut s = session(false);
        let mapper = ColorCameraMapper::default();
        let placement = s
            .process_frame(
                &frame(
                    1,
                    vec![
                        person(-0.5, SkeletonTrackingState::Tracked),
                        person(0.5, SkeletonTrackingState::Tracked),
                    ],
                ),
                &mapper,
            )
            .unwrap();
        assert!(placement.destination.0 > 320.);
    }

    #[test]
    fn test_voice_commands_cycle_shirts() {
        let mut s = session(false);
        assert_eq!(
            s.handle_recognition(RecognitionEvent::Recognized("Next.".into())),
            Some(VoiceCommand::Next)
        );
        assert_eq!(s.wardrobe().current_name(), "green");
        s.handle_recognition(RecognitionEvent::Recognized("Go back.".into()));
        s.handle_recognition(RecognitionEvent::Recognized("Previous.".into()));
        assert_eq!(s.wardrobe().current_name(), "blue");
        assert_eq!(
            s.handle_recognition(RecognitionEvent::Recognized("Nice shirt.".into())),
            None
        );
        assert_eq!(s.handle_recognition(RecognitionEvent::NoMatch), None);
        assert_eq!(s.wardrobe().current_name(), "blue");
    }

    #[test]
    fn test_shirt_change_redraws_at_same_spot() {
        let mut s = session(false);
        let mapper = ColorCameraMapper::default();
        let still = frame(1, vec![person(0., SkeletonTrackingState::Tracked)]);
        assert!(s.process_frame(&still, &mapper).is_some());
        assert!(s.process_frame(&still, &mapper).is_none());
        s.apply_command(VoiceCommand::Next);
        assert!(s.process_frame(&still, &mapper).is_some());
    }

    #[test]
    fn test_recognised_text_only_kept_in_debug_mode() {
        let mut s = session(false);
        s.handle_recognition(RecognitionEvent::Recognizing("deb".into()));
        assert_eq!(s.recognized_text(), None);

        s.handle_recognition(RecognitionEvent::Recognized("Debug.".into()));
        assert!(s.debug());
        s.handle_recognition(RecognitionEvent::Recognizing("hello".into()));
        assert_eq!(s.recognized_text(), Some("hello"));
        s.handle_recognition(RecognitionEvent::Recognized("Hello world.".into()));
        assert_eq!(s.recognized_text(), Some("Hello world."));

        s.handle_recognition(RecognitionEvent::Recognized("debug".into()));
        assert!(!s.debug());
    }
}
