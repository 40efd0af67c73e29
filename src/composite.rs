//! Blend & composite engine
//!
//! Resolves decoded parameters into a [`Composite`], which answers "what color
//! is pixel `i`" for the current frame. Time-driven modes advance their phase
//! here, once per frame, before any pixel is evaluated.

use embassy_time::Instant;
use heapless::Vec;

use crate::angle::{FULL_TURN, distance, wrap360};
use crate::bounds::segment_of;
use crate::color::{Rgbw, hsv_to_rgb};
use crate::config::Configuration;
use crate::decoder::{BlinkParams, ColorPair, ModeParams, PixelChannels};
use crate::phase::{MAX_SEGMENTS, PhaseEngine};

/// Limit a ramp to the feature it softens (and to its complement).
#[inline]
pub fn clamp_ramp(ramp: f32, feature: f32) -> f32 {
    let limit = feature.min(FULL_TURN - feature).max(0.0);
    ramp.min(limit)
}

/// Trapezoid profile over an angular distance.
///
/// 1 up to `half_width - half_ramp`, 0 from `half_width + half_ramp`,
/// linear in between. Without a ramp the edge is hard and inclusive.
pub fn trapezoid(distance: f32, half_width: f32, half_ramp: f32) -> f32 {
    if half_ramp <= 0.0 {
        return if distance <= half_width { 1.0 } else { 0.0 };
    }
    let inner = half_width - half_ramp;
    let outer = half_width + half_ramp;
    if distance <= inner {
        1.0
    } else if distance >= outer {
        0.0
    } else {
        (outer - distance) / (2.0 * half_ramp)
    }
}

/// Balance of a spatial band of `width` degrees with a `ramp` wide edge.
///
/// A zero-width band is never lit.
#[inline]
pub fn band_balance(distance: f32, width: f32, ramp: f32) -> f32 {
    if width <= 0.0 {
        0.0
    } else {
        trapezoid(distance, width / 2.0, ramp / 2.0)
    }
}

/// Balance of a blink cycle at `phase`: lit for `duty` degrees centered on 0.
#[inline]
pub fn blink_balance(phase: f32, duty: f32, ramp: f32) -> f32 {
    trapezoid(distance(phase), duty / 2.0, ramp / 4.0)
}

/// `balance * a + (1 - balance) * b`
#[inline]
pub fn balance_channel(balance: f32, a: u8, b: u8) -> f32 {
    balance * f32::from(a) + (1.0 - balance) * f32::from(b)
}

/// Balance the pair, then scale by intensity.
///
/// Intensity comes last so two colors mix at full level before dimming.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mix(colors: ColorPair, balance: f32, intensity: f32) -> Rgbw {
    let channel = |a: u8, b: u8| (intensity * balance_channel(balance, a, b)) as u8;
    let ColorPair { primary, secondary } = colors;
    Rgbw::new(
        channel(primary.r, secondary.r),
        channel(primary.g, secondary.g),
        channel(primary.b, secondary.b),
        channel(primary.w, secondary.w),
    )
}

/// Maps pixel indices to angles along the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMap {
    pub pixel_count: u16,
    /// Number of times the full circle repeats along the strip
    pub segment_count: u16,
    pub reverse: bool,
}

impl SpatialMap {
    pub fn new(config: &Configuration, pixel_count: u16) -> Self {
        Self {
            pixel_count,
            segment_count: config.segment_count,
            reverse: config.reverse,
        }
    }

    /// `360 * flip * pixel / pixel_count * segment_count`
    pub fn angle(&self, pixel: u16) -> f32 {
        if self.pixel_count == 0 {
            return 0.0;
        }
        let flip = if self.reverse { -1.0 } else { 1.0 };
        FULL_TURN * flip * f32::from(pixel) / f32::from(self.pixel_count)
            * f32::from(self.segment_count)
    }
}

/// Center of an edge-bounded slider in degrees.
///
/// `position` and `width` are in pixels. The center is pulled in by half the
/// width on both ends so a band at either extreme still fits on the strip.
pub fn slider_center(position: f32, width: f32, pixel_count: u16) -> f32 {
    if pixel_count == 0 {
        return 0.0;
    }
    let pixels = f32::from(pixel_count);
    let half = pixels / 2.0;
    let compensated = (position - half) / half * ((pixels - width) / 2.0) + half;
    compensated * FULL_TURN / pixels
}

/// Per-frame color source
#[derive(Debug, Clone)]
pub enum Composite<'a> {
    /// Colors straight from the payload
    Pixels(PixelChannels<'a>),
    /// Same color on every pixel
    Fill(Rgbw),
    /// One color per contiguous segment
    Segments {
        colors: Vec<Rgbw, MAX_SEGMENTS>,
        pixel_count: u16,
    },
    /// A band of `width` degrees centered at `center`, over the secondary color
    Band {
        colors: ColorPair,
        intensity: f32,
        center: f32,
        width: f32,
        ramp: f32,
        spatial: SpatialMap,
    },
    /// Hue wheel along the strip, rotated by `offset`
    Hue {
        saturation: f32,
        value: f32,
        offset: f32,
        spatial: SpatialMap,
    },
}

impl Composite<'_> {
    /// Final color of `pixel`
    pub fn color(&self, pixel: u16) -> Rgbw {
        match self {
            Self::Pixels(channels) => channels.color(pixel),
            Self::Fill(color) => *color,
            Self::Segments {
                colors,
                pixel_count,
            } => {
                let segment_count = u16::try_from(colors.len()).unwrap_or(u16::MAX);
                segment_of(pixel, segment_count, *pixel_count)
                    .and_then(|segment| colors.get(usize::from(segment)).copied())
                    .unwrap_or(Rgbw::BLACK)
            }
            Self::Band {
                colors,
                intensity,
                center,
                width,
                ramp,
                spatial,
            } => {
                let d = distance(spatial.angle(pixel) - center);
                mix(*colors, band_balance(d, *width, *ramp), *intensity)
            }
            Self::Hue {
                saturation,
                value,
                offset,
                spatial,
            } => {
                let hue = wrap360(spatial.angle(pixel) - offset);
                Rgbw::from(hsv_to_rgb(hue, *saturation, *value))
            }
        }
    }
}

/// Resolve decoded parameters into a color source for this frame.
///
/// Advances the phase of time-driven modes, so call it once per frame.
pub fn resolve<'a>(
    params: ModeParams<'a>,
    config: &Configuration,
    pixel_count: u16,
    phase: &mut PhaseEngine,
    now: Instant,
) -> Composite<'a> {
    let spatial = SpatialMap::new(config, pixel_count);

    match params {
        ModeParams::PixelMap(channels) => Composite::Pixels(channels),
        ModeParams::Uniform {
            colors,
            intensity,
            balance,
        } => Composite::Fill(mix(colors, balance, intensity)),
        ModeParams::Blink(blocks) => {
            if let (1, Some(block)) = (blocks.len(), blocks.block(0)) {
                let current = phase.advance(block.speed, now);
                return Composite::Fill(blink_color(&block, current));
            }
            let count = usize::from(blocks.len());
            let mut colors = Vec::new();
            for (index, block) in blocks.iter().enumerate() {
                let current = phase.advance_segment(
                    config.phase_anchoring,
                    index,
                    count,
                    block.speed,
                    now,
                );
                // decode caps the block count at the capacity
                let _ = colors.push(blink_color(&block, current));
            }
            Composite::Segments {
                colors,
                pixel_count,
            }
        }
        ModeParams::Slider {
            colors,
            intensity,
            position,
            width,
        } => {
            let pixels = f32::from(pixel_count.max(1));
            Composite::Band {
                colors,
                intensity,
                center: slider_center(position, width, pixel_count),
                width: width * FULL_TURN / pixels,
                ramp: 0.0,
                spatial,
            }
        }
        ModeParams::SmoothSlider {
            colors,
            intensity,
            position,
            width,
            ramp,
        } => Composite::Band {
            colors,
            intensity,
            center: position,
            width,
            ramp: clamp_ramp(ramp, width),
            spatial,
        },
        ModeParams::Spinner {
            colors,
            intensity,
            speed,
            width,
            ramp,
        } => Composite::Band {
            colors,
            intensity,
            center: phase.advance(speed, now),
            width,
            ramp: clamp_ramp(ramp, width),
            spatial,
        },
        ModeParams::RainbowSlider {
            saturation,
            value,
            position,
        } => Composite::Hue {
            saturation,
            value,
            offset: position,
            spatial,
        },
        ModeParams::RainbowSpinner {
            saturation,
            value,
            speed,
        } => Composite::Hue {
            saturation,
            value,
            offset: phase.advance(speed, now),
            spatial,
        },
    }
}

fn blink_color(block: &BlinkParams, phase: f32) -> Rgbw {
    let ramp = clamp_ramp(block.ramp, block.duty);
    mix(block.colors, blink_balance(phase, block.duty, ramp), block.intensity)
}
