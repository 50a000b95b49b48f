//! Camera, scripted intro and per-layer model matrices.
//!
//! Nothing here touches a GPU; the web frontend feeds [`SceneTransforms`]
//! straight into its uniform buffers each frame.

use crate::anim::{Ease, Timeline, Tween};
use crate::constants::*;
use crate::model::DeviceClass;
use glam::{Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(z: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RAD,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Clip-space projection (WebGPU depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

/// Per-device tuning picked once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub globe_point_size_px: f32,
    pub quake_size_scale: f32,
    pub bokeh_count: usize,
    pub bokeh_size_px: f32,
    pub globe_spin_rad_per_sec: f32,
    pub ring_spin_rad_per_sec: f32,
    pub ring_scale: f32,
    pub nebula_scale: f32,
}

impl SceneConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => Self::default(),
            DeviceClass::Mobile => Self {
                globe_point_size_px: 3.0,
                quake_size_scale: 0.75,
                bokeh_count: 48,
                bokeh_size_px: 40.0,
                ..Self::default()
            },
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            globe_point_size_px: 4.0,
            quake_size_scale: 1.0,
            bokeh_count: 120,
            bokeh_size_px: 64.0,
            globe_spin_rad_per_sec: 0.06,
            ring_spin_rad_per_sec: RING_SPIN_RAD_PER_SEC,
            ring_scale: 1.35,
            nebula_scale: 6.0,
        }
    }
}

/// Seconds since the first frame, from `requestAnimationFrame` timestamps.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneClock {
    start_ms: Option<f64>,
    last_ms: f64,
}

impl SceneClock {
    /// Advance to `now_ms`; returns `(elapsed_sec, dt_sec)`.
    pub fn tick(&mut self, now_ms: f64) -> (f32, f32) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let dt = if self.last_ms > 0.0 {
            ((now_ms - self.last_ms) / 1000.0).max(0.0)
        } else {
            0.0
        };
        self.last_ms = now_ms;
        (((now_ms - start) / 1000.0) as f32, dt as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroKey {
    BackgroundAlpha,
    NebulaAlpha,
    GlobeAlpha,
    RingAlpha,
    RingScale,
    CameraZ,
    Scatter,
}

/// Values driven by the intro; all fades end at 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroState {
    pub background_alpha: f32,
    pub nebula_alpha: f32,
    pub globe_alpha: f32,
    pub ring_alpha: f32,
    pub ring_scale: f32,
    pub camera_z: f32,
    pub scatter: f32,
}

impl IntroState {
    pub fn settled() -> Self {
        Self {
            background_alpha: 1.0,
            nebula_alpha: 1.0,
            globe_alpha: 1.0,
            ring_alpha: 1.0,
            ring_scale: 1.0,
            camera_z: CAMERA_Z_END,
            scatter: 0.0,
        }
    }
}

/// The scripted fade-in and camera dolly that runs when the page opens.
#[derive(Clone, Debug)]
pub struct IntroTimeline {
    timeline: Timeline<IntroKey>,
}

impl Default for IntroTimeline {
    fn default() -> Self {
        let mut timeline = Timeline::new();
        timeline
            .add(
                IntroKey::BackgroundAlpha,
                Tween::new(0.0, 1.0, INTRO_BACKGROUND_FADE_SEC, Ease::SineOut),
            )
            .add(
                IntroKey::NebulaAlpha,
                Tween::new(0.0, 1.0, INTRO_GLOBE_FADE_SEC, Ease::QuadOut).delayed(0.2),
            )
            .add(
                IntroKey::GlobeAlpha,
                Tween::new(0.0, 1.0, INTRO_GLOBE_FADE_SEC, Ease::CubicOut)
                    .delayed(INTRO_GLOBE_DELAY_SEC),
            )
            .add(
                IntroKey::Scatter,
                Tween::new(INTRO_SCATTER_START, 0.0, INTRO_CAMERA_SEC, Ease::ExpoOut)
                    .delayed(INTRO_GLOBE_DELAY_SEC),
            )
            .add(
                IntroKey::CameraZ,
                Tween::new(CAMERA_Z_START, CAMERA_Z_END, INTRO_CAMERA_SEC, Ease::CubicInOut),
            )
            .add(
                IntroKey::RingAlpha,
                Tween::new(0.0, 1.0, INTRO_RING_SEC, Ease::SineInOut).delayed(INTRO_RING_DELAY_SEC),
            )
            .add(
                IntroKey::RingScale,
                Tween::new(0.8, 1.0, INTRO_RING_SEC, Ease::BackOut).delayed(INTRO_RING_DELAY_SEC),
            );
        Self { timeline }
    }
}

impl IntroTimeline {
    pub fn duration(&self) -> f32 {
        self.timeline.duration()
    }

    pub fn state(&self, t: f32) -> IntroState {
        let done = IntroState::settled();
        let tl = &self.timeline;
        IntroState {
            background_alpha: tl.value_or(IntroKey::BackgroundAlpha, t, done.background_alpha),
            nebula_alpha: tl.value_or(IntroKey::NebulaAlpha, t, done.nebula_alpha),
            globe_alpha: tl.value_or(IntroKey::GlobeAlpha, t, done.globe_alpha),
            ring_alpha: tl.value_or(IntroKey::RingAlpha, t, done.ring_alpha),
            ring_scale: tl.value_or(IntroKey::RingScale, t, done.ring_scale),
            camera_z: tl.value_or(IntroKey::CameraZ, t, done.camera_z),
            scatter: tl.value_or(IntroKey::Scatter, t, done.scatter),
        }
    }
}

/// Model matrices and camera for one frame.
#[derive(Clone, Debug)]
pub struct SceneTransforms {
    pub camera: Camera,
    pub globe_rotation: Quat,
    pub globe: Mat4,
    pub ring: Mat4,
    pub nebula: Mat4,
    pub bokeh: Mat4,
    pub background: Mat4,
}

impl SceneTransforms {
    pub fn at(t: f32, config: &SceneConfig, intro: &IntroState, aspect: f32) -> Self {
        let tilt = Quat::from_rotation_x(GLOBE_TILT_RAD);
        let globe_rotation = tilt * Quat::from_rotation_y(config.globe_spin_rad_per_sec * t);
        let globe = Mat4::from_quat(globe_rotation);

        // rides on the globe, counter-spinning about the same tilted axis
        let ring_rotation = globe_rotation * Quat::from_rotation_y(config.ring_spin_rad_per_sec * t);
        let ring = Mat4::from_scale_rotation_translation(
            Vec3::splat(config.ring_scale * intro.ring_scale),
            ring_rotation,
            Vec3::ZERO,
        );

        let nebula = Mat4::from_scale_rotation_translation(
            Vec3::splat(config.nebula_scale),
            Quat::from_rotation_z(NEBULA_SPIN_RAD_PER_SEC * t),
            Vec3::new(0.0, 0.0, NEBULA_DISTANCE),
        );

        Self {
            camera: Camera::looking_at_origin(intro.camera_z, aspect.max(1e-3)),
            globe_rotation,
            globe,
            ring,
            nebula,
            bokeh: Mat4::IDENTITY,
            background: Mat4::IDENTITY,
        }
    }

    /// Unit vector from the globe centre toward the camera, in the globe's
    /// local frame. Quake positions are compared against this.
    pub fn toward_camera_in_globe_space(&self) -> Vec3 {
        let world = (self.camera.eye - self.camera.target).normalize_or_zero();
        self.globe_rotation.inverse() * world
    }
}
