use glam::{Vec2, Vec4};
use slider_core::{ProgressBar, SlideTransform};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub skew_deg: f32,
    pub softness: f32,
    pub _pad: [f32; 2],
}

pub const MAX_INSTANCES: usize = 256;

// Card geometry relative to the window
pub const CARD_WIDTH_RATIO: f32 = 0.85; // of one item width
pub const CARD_HEIGHT_RATIO: f32 = 0.55; // of the window height
pub const BACKDROP_SCALE: f32 = 1.12;
pub const BADGE_SCALE: f32 = 0.3;
pub const PROGRESS_HEIGHT: f32 = 6.0; // px
pub const PROGRESS_MARGIN: f32 = 32.0; // px from the bottom edge

pub const SLIDE_COLORS: [[f32; 3]; 6] = [
    [0.91, 0.45, 0.32],
    [0.29, 0.56, 0.89],
    [0.36, 0.75, 0.52],
    [0.95, 0.77, 0.29],
    [0.62, 0.44, 0.86],
    [0.88, 0.38, 0.62],
];

#[inline]
fn slide_color(index: usize) -> Vec4 {
    let [r, g, b] = SLIDE_COLORS[index % SLIDE_COLORS.len()];
    Vec4::new(r, g, b, 1.0)
}

fn quad(center: Vec2, size: Vec2, color: Vec4, skew_deg: f32, softness: f32) -> InstanceData {
    InstanceData {
        center: center.to_array(),
        size: size.to_array(),
        color: color.to_array(),
        skew_deg,
        softness,
        _pad: [0.0; 2],
    }
}

/// Three quads per visible slide (backdrop, card, badge on the parallax
/// layers) followed by the progress track and fill.
pub fn build_instances(
    transforms: &[SlideTransform],
    bar: &ProgressBar,
    item_width: f32,
    viewport: Vec2,
) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity((transforms.len() * 3 + 2).min(MAX_INSTANCES));
    let origin = viewport * 0.5;
    let card = Vec2::new(item_width * CARD_WIDTH_RATIO, viewport.y * CARD_HEIGHT_RATIO);

    for t in transforms.iter().filter(|t| t.visible) {
        if instances.len() + 3 > MAX_INSTANCES - 2 {
            log::warn!("[scene] instance budget reached, dropping slides");
            break;
        }
        let scale = t.scale as f32;
        let alpha = t.opacity as f32;
        let color = slide_color(t.index);
        let softness = (t.blur_px as f32 / card.x.max(1.0)).min(0.25);
        let skew = t.skew_deg as f32;

        let backdrop = color * Vec4::new(0.35, 0.35, 0.35, alpha * 0.6);
        instances.push(quad(
            origin + Vec2::new(t.layers[0] as f32, 0.0),
            card * scale * BACKDROP_SCALE,
            backdrop,
            0.0,
            softness,
        ));
        instances.push(quad(
            origin + Vec2::new(t.translate_x as f32, 0.0),
            card * scale,
            color.truncate().extend(alpha),
            skew + t.rotate_deg as f32,
            softness,
        ));
        instances.push(quad(
            origin + Vec2::new(t.layers[2] as f32, card.y * 0.25 * scale),
            card * scale * BADGE_SCALE,
            Vec4::new(1.0, 1.0, 1.0, alpha * 0.85),
            skew,
            softness,
        ));
    }

    let track_width = viewport.x - PROGRESS_MARGIN * 2.0;
    let y = viewport.y - PROGRESS_MARGIN;
    instances.push(quad(
        Vec2::new(origin.x, y),
        Vec2::new(track_width, PROGRESS_HEIGHT),
        Vec4::new(1.0, 1.0, 1.0, 0.15),
        0.0,
        0.0,
    ));
    let fill = track_width * bar.fill as f32;
    instances.push(quad(
        Vec2::new(PROGRESS_MARGIN + fill * 0.5, y),
        Vec2::new(fill, PROGRESS_HEIGHT),
        Vec4::new(1.0, 1.0, 1.0, 0.9),
        0.0,
        0.0,
    ));
    instances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(index: usize, translate_x: f64, visible: bool) -> SlideTransform {
        SlideTransform {
            index,
            translate_x,
            distance: translate_x / 100.0,
            opacity: 1.0,
            scale: 1.0,
            blur_px: 0.0,
            skew_deg: 0.0,
            rotate_deg: 0.0,
            layers: [translate_x * 0.2, translate_x * 0.5, translate_x * 0.8],
            visible,
        }
    }

    #[test]
    fn hidden_slides_are_skipped() {
        let transforms = [transform(0, 0.0, true), transform(1, 400.0, false)];
        let bar = ProgressBar { fill: 0.5, lead: 0.0 };
        let instances = build_instances(&transforms, &bar, 100.0, Vec2::new(800.0, 600.0));
        assert_eq!(instances.len(), 3 + 2);
        assert_eq!(instances[1].center, [400.0, 300.0]);
    }

    #[test]
    fn progress_fill_starts_at_the_left_margin() {
        let bar = ProgressBar { fill: 0.25, lead: 0.0 };
        let instances = build_instances(&[], &bar, 100.0, Vec2::new(864.0, 600.0));
        let fill = instances[1];
        assert_eq!(fill.size[0], 200.0);
        assert_eq!(fill.center[0], PROGRESS_MARGIN + 100.0);
    }

    #[test]
    fn instance_budget_is_respected() {
        let transforms: Vec<_> = (0..200).map(|i| transform(i, 0.0, true)).collect();
        let bar = ProgressBar { fill: 0.0, lead: 0.0 };
        let instances = build_instances(&transforms, &bar, 100.0, Vec2::new(800.0, 600.0));
        assert!(instances.len() <= MAX_INSTANCES);
    }
}
