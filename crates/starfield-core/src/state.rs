//! Visual-side state types shared with the frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for both native and web targets. The frontends consume them
//! to build camera matrices and to upload per-particle instance buffers.

use crate::config::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

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
    /// Camera for the backdrop scene: positioned at the sway offset, looking
    /// straight down the negative view axis.
    pub fn backdrop(aspect: f32, sway: Vec3) -> Self {
        Self {
            eye: sway,
            target: sway + Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Per-line instance record uploaded to the GPU. The vertex shader expands
/// each record into a screen-space quad so thickness is honored.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineInstance {
    pub head: [f32; 3],
    pub thickness: f32,
    pub tail: [f32; 3],
    pub _pad: f32,
    pub head_color: [f32; 4],
    pub tail_color: [f32; 4],
}

/// Per-star instance record; opacity travels in the color alpha channel.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub center: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}
