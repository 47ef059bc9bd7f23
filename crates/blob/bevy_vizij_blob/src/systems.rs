use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::components::{BlobLabel, BlobSphere};
use crate::resources::{BlobController, BlobTransitionEvent};
use vizij_blob_core::{InputAdapter, Rgb, ScrollEvent};

/// winit reports +y for wheel-up; the core follows the DOM convention (+deltaY = scroll down).
fn to_scroll_event(ev: &MouseWheel) -> ScrollEvent {
    ScrollEvent {
        delta_x: ev.x,
        delta_y: -ev.y,
    }
}

fn to_bevy_color(c: Rgb) -> Color {
    Color::srgb(c.r, c.g, c.b)
}

/// Forward every vertical wheel event; the controller drops the ones that arrive
/// mid-transition. Horizontal-only swipes are not scrolls.
pub fn scroll_input_system(mut wheel: EventReader<MouseWheel>, mut ctrl: ResMut<BlobController>) {
    let adapter = InputAdapter::new();
    for ev in wheel.read() {
        if ev.y == 0.0 {
            continue;
        }
        adapter.on_scroll(&mut ctrl.0, &to_scroll_event(ev));
    }
}

pub fn tick_controller_system(
    time: Res<Time>,
    mut ctrl: ResMut<BlobController>,
    mut events: EventWriter<BlobTransitionEvent>,
) {
    let out = ctrl.0.update(time.delta_seconds());
    for ev in &out.events {
        events.send(BlobTransitionEvent(ev.clone()));
    }
}

/// Copy the controller's RenderState into the clear color, sphere and label transforms.
pub fn apply_render_state_system(
    ctrl: Res<BlobController>,
    mut clear: ResMut<ClearColor>,
    mut spheres: Query<
        (&mut Transform, Option<&Handle<StandardMaterial>>),
        (With<BlobSphere>, Without<BlobLabel>),
    >,
    mut labels: Query<(&BlobLabel, &mut Transform), Without<BlobSphere>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let state = ctrl.0.state();

    clear.0 = to_bevy_color(state.background);

    for (mut tf, handle) in spheres.iter_mut() {
        tf.rotation = Quat::from_rotation_y(state.sphere_rotation_y);

        let (Some(handle), Some(mats)) = (handle, materials.as_deref_mut()) else {
            continue;
        };
        if let Some(mat) = mats.get_mut(handle) {
            let m = &state.material;
            mat.perceptual_roughness = m.roughness;
            mat.metallic = m.metalness;
            mat.clearcoat = m.clearcoat;
            mat.clearcoat_perceptual_roughness = m.clearcoat_roughness;
            mat.specular_transmission = m.transmission;
        }
    }

    for (label, mut tf) in labels.iter_mut() {
        if let Some(ls) = state.labels.get(label.index) {
            tf.translation = Vec3::new(ls.position[0], ls.position[1], ls.position[2]);
            tf.scale = Vec3::splat(ls.scale);
        }
    }
}
