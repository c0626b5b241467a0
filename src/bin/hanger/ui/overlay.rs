use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Ui};
use map_range::MapRange;

use hanger::{
    mapping::CoordinateMapper,
    skeleton::{bone_style, BoneStyle, JointTrackingState, JointType, Skeleton, BONES},
    Point2D,
};

use crate::model::{Model, OverlayColours};

/// Maps colour-frame pixels onto the part of the window showing the frame
struct Viewport {
    rect: Rect,
    frame_size: (f32, f32),
}

impl Viewport {
    fn fit(available: Rect, frame_size: (u32, u32)) -> Self {
        let (w, h) = (frame_size.0 as f32, frame_size.1 as f32);
        let scale = (available.width() / w).min(available.height() / h);
        let rect = Rect::from_center_size(available.center(), vec2(w * scale, h * scale));
        Viewport {
            rect,
            frame_size: (w, h),
        }
    }

    fn to_screen(&self, p: Point2D) -> Pos2 {
        let (x, y) = p;
        let (w, h) = self.frame_size;
        pos2(
            x.map_range(0. ..w, self.rect.left()..self.rect.right()),
            y.map_range(0. ..h, self.rect.top()..self.rect.bottom()),
        )
    }
}

pub fn render_overlay(model: &Model, ui: &mut Ui) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let viewport = Viewport::fit(response.rect, model.mapper.frame_size());
    painter.rect_filled(viewport.rect, 0.0, Color32::from_gray(24));

    let painter = painter.with_clip_rect(viewport.rect);
    let session = &model.session;

    if let Some(placement) = session.placement() {
        if let Some(texture) = model.shirt_texture(session.wardrobe().current_index()) {
            let (left, top, width, height) = placement.rect();
            let rect = Rect::from_min_max(
                viewport.to_screen((left, top)),
                viewport.to_screen((left + width, top + height)),
            );
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }

    if session.debug() {
        if let Some(frame) = &model.latest_frame {
            for skeleton in frame.tracked_skeletons() {
                draw_skeleton(&painter, skeleton, &model.mapper, &model.colours, &viewport);
            }
        }
        if let Some(text) = session.recognized_text() {
            painter.text(
                viewport.rect.left_top() + vec2(12.0, 12.0),
                Align2::LEFT_TOP,
                text,
                FontId::proportional(20.0),
                Color32::WHITE,
            );
        }
    }
}

fn draw_skeleton(
    painter: &Painter,
    skeleton: &Skeleton,
    mapper: &dyn CoordinateMapper,
    colours: &OverlayColours,
    viewport: &Viewport,
) {
    let screen = |joint_type: JointType| {
        mapper
            .skeleton_to_screen(&skeleton.joint(joint_type).position)
            .map(|p| viewport.to_screen(p))
    };

    for (a, b) in BONES.iter() {
        let style = bone_style(
            skeleton.joint(*a).tracking_state,
            skeleton.joint(*b).tracking_state,
        );
        if let (Some(style), Some(start), Some(end)) = (style, screen(*a), screen(*b)) {
            let stroke = match style {
                BoneStyle::Tracked => colours.tracked_bone,
                BoneStyle::Inferred => colours.inferred_bone,
            };
            painter.line_segment([start, end], stroke);
        }
    }

    for joint_type in JointType::ALL {
        let colour = match skeleton.joint(joint_type).tracking_state {
            JointTrackingState::Tracked => colours.tracked_joint,
            JointTrackingState::Inferred => colours.inferred_joint,
            JointTrackingState::NotTracked => continue,
        };
        if let Some(centre) = screen(joint_type) {
            painter.circle_filled(centre, colours.joint_radius, colour);
        }
    }
}
