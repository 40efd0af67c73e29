//! Angular helpers shared by every time or position based mode
//!
//! All angles are in degrees. Phases grow without bound over the uptime of the
//! device, so wrapping uses a real modulo instead of a single +-360 step.

/// Full turn in degrees
pub const FULL_TURN: f32 = 360.0;

/// Wrap an angle into `[-180, 180)`
#[inline]
pub fn wrap180(degrees: f32) -> f32 {
    wrap360(degrees + 180.0) - 180.0
}

/// Wrap an angle into `[0, 360)`
#[inline]
pub fn wrap360(degrees: f32) -> f32 {
    let wrapped = libm::fmodf(degrees, FULL_TURN);
    if wrapped < 0.0 {
        // -0.00001 + 360 rounds to 360 in f32
        let shifted = wrapped + FULL_TURN;
        if shifted >= FULL_TURN { 0.0 } else { shifted }
    } else {
        wrapped
    }
}

/// Same as [`wrap360`] for `f64` phases
#[inline]
pub fn wrap360_f64(degrees: f64) -> f64 {
    let wrapped = libm::fmod(degrees, f64::from(FULL_TURN));
    if wrapped < 0.0 {
        wrapped + f64::from(FULL_TURN)
    } else {
        wrapped
    }
}

/// Unsigned angular distance in `[0, 180]`
#[inline]
pub fn distance(degrees: f32) -> f32 {
    libm::fabsf(wrap180(degrees))
}

/// Map a channel byte onto `[0, 360]` degrees
#[inline]
pub fn byte_to_degrees(value: u8) -> f32 {
    f32::from(value) * FULL_TURN / 255.0
}

/// Map a channel byte onto `[0, 1]`
#[inline]
pub fn byte_to_unit(value: u8) -> f32 {
    f32::from(value) / 255.0
}
