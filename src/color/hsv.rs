//! HSV to RGB conversion
//!
//! Works on floating point hue in degrees so the rainbow modes can sweep the
//! whole wheel without 8-bit hue quantisation.

use super::Rgb;

/// Convert HSV to RGB.
///
/// `hue` is in degrees `[0, 360)`, anything outside (or NaN) folds to 0.
/// `sat` and `val` are fractions in `[0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    if sat <= 0.0 {
        let v = to_channel(val);
        return Rgb { r: v, g: v, b: v };
    }

    let hue = if (0.0..360.0).contains(&hue) { hue } else { 0.0 };
    let sector_f = hue / 60.0;
    let sector = sector_f as u8;
    let fract = sector_f - f32::from(sector);

    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * fract);
    let t = val * (1.0 - sat * (1.0 - fract));

    let (r, g, b) = match sector {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Interpret a payload color triple as (hue, saturation, value) bytes.
///
/// The hue byte covers the wheel as `360 * h / 256`, so 255 stays just short
/// of wrapping back to red.
pub fn hsv_bytes_to_rgb(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv_to_rgb(
        360.0 * f32::from(hue) / 256.0,
        f32::from(sat) / 255.0,
        f32::from(val) / 255.0,
    )
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(fraction: f32) -> u8 {
    (fraction * 255.0) as u8
}
