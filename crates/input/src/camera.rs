//! Camera-relative movement resolution.
//!
//! The player steers on the horizontal plane relative to where the camera
//! faces, but the field only understands unit steps along the grid axes.
//! Each requested direction is rotated by the camera yaw and snapped to
//! the dominant axis, so after orbiting the view a quarter turn "left"
//! still means left on screen.

/// A steering intent on the horizontal plane, in screen terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Forward,
    Backward,
    Left,
    Right,
}

/// Resolve a screen-relative direction into a grid step `(dx, dz)` for the
/// given camera yaw in degrees. Yaw 0 puts the camera in front of the field
/// looking toward -z.
pub fn camera_relative_delta(yaw_deg: f32, dir: MoveDir) -> (i8, i8) {
    let yaw = yaw_deg.to_radians();
    // Forward points from the camera into the scene.
    let (fx, fz) = (-yaw.sin(), -yaw.cos());
    let (vx, vz) = match dir {
        MoveDir::Forward => (fx, fz),
        MoveDir::Backward => (-fx, -fz),
        MoveDir::Left => (fz, -fx),
        MoveDir::Right => (-fz, fx),
    };
    // Snap to the dominant grid axis; ties go to x.
    if vx.abs() >= vz.abs() {
        (if vx >= 0.0 { 1 } else { -1 }, 0)
    } else {
        (0, if vz >= 0.0 { 1 } else { -1 })
    }
}
