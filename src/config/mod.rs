//! Fixture configuration and live configuration changes
//!
//! The configuration belongs to the surrounding application (settings page,
//! persisted storage). It reaches the renderer either at construction or as
//! [`ConfigChange`] messages queued on a [`ConfigChannel`], which the renderer
//! drains before decoding each frame.

mod queue;

pub use queue::{ConfigChannel, ConfigReceiver, ConfigSender, TryReceiveError, TrySendError};

use crate::color::ChannelLayout;
use crate::phase::PhaseAnchoring;

/// Divisor that maps a full speed byte to one turn per second
pub const DEFAULT_SPEED_DIVISOR: f32 = 255.0;

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Universe this renderer listens to
    pub universe: u16,
    /// Byte offset of the first channel in the payload
    pub channel_offset: u16,
    /// Channels per strip pixel (3 or 4)
    pub channels_per_pixel: u8,
    /// Whether the white channel of a 4-channel strip is driven
    pub white_enabled: bool,
    /// Interpret color triples as hue, saturation, value
    pub hsv_input: bool,
    /// Flip spatial direction
    pub reverse: bool,
    /// Segments for the blink mode, angular multiplier for spatial modes
    pub segment_count: u16,
    /// Divides the raw speed byte into turns per second
    pub speed_divisor: f32,
    /// Run output channels through the gamma table
    pub gamma_correction: bool,
    /// Anti-rollback anchor policy for segmented modes
    pub phase_anchoring: PhaseAnchoring,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            universe: 1,
            channel_offset: 0,
            channels_per_pixel: 3,
            white_enabled: false,
            hsv_input: false,
            reverse: false,
            segment_count: 1,
            speed_divisor: DEFAULT_SPEED_DIVISOR,
            gamma_correction: false,
            phase_anchoring: PhaseAnchoring::Shared,
        }
    }
}

impl Configuration {
    /// Channel layout of a single payload color
    pub const fn layout(&self) -> ChannelLayout {
        ChannelLayout::from_channels(self.channels_per_pixel, self.white_enabled)
    }

    /// Convert a raw speed byte to turns per second.
    ///
    /// Motion is disabled unless the divisor is positive and the quotient is
    /// finite, so a zero, negative, NaN or subnormal divisor yields 0.
    pub fn speed(&self, raw: u8) -> f32 {
        let divisor = self.speed_divisor;
        if divisor.is_nan() || divisor <= 0.0 {
            return 0.0;
        }
        let speed = f32::from(raw) / divisor;
        if speed.is_finite() { speed } else { 0.0 }
    }

    #[must_use]
    pub const fn with_universe(mut self, universe: u16) -> Self {
        self.universe = universe;
        self
    }

    #[must_use]
    pub const fn with_channel_offset(mut self, offset: u16) -> Self {
        self.channel_offset = offset;
        self
    }

    /// Set channels per pixel and white usage
    #[must_use]
    pub const fn with_channels(mut self, channels_per_pixel: u8, white_enabled: bool) -> Self {
        self.channels_per_pixel = channels_per_pixel;
        self.white_enabled = white_enabled;
        self
    }

    #[must_use]
    pub const fn with_hsv_input(mut self, hsv_input: bool) -> Self {
        self.hsv_input = hsv_input;
        self
    }

    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub const fn with_segment_count(mut self, segment_count: u16) -> Self {
        self.segment_count = segment_count;
        self
    }

    #[must_use]
    pub const fn with_speed_divisor(mut self, speed_divisor: f32) -> Self {
        self.speed_divisor = speed_divisor;
        self
    }

    #[must_use]
    pub const fn with_gamma_correction(mut self, gamma_correction: bool) -> Self {
        self.gamma_correction = gamma_correction;
        self
    }

    #[must_use]
    pub const fn with_phase_anchoring(mut self, anchoring: PhaseAnchoring) -> Self {
        self.phase_anchoring = anchoring;
        self
    }

    /// Apply a single change in place
    pub fn apply(&mut self, change: ConfigChange) {
        match change {
            ConfigChange::Replace(config) => *self = config,
            ConfigChange::Universe(universe) => self.universe = universe,
            ConfigChange::ChannelOffset(offset) => self.channel_offset = offset,
            ConfigChange::Channels {
                channels_per_pixel,
                white_enabled,
            } => {
                self.channels_per_pixel = channels_per_pixel;
                self.white_enabled = white_enabled;
            }
            ConfigChange::HsvInput(hsv_input) => self.hsv_input = hsv_input,
            ConfigChange::Reverse(reverse) => self.reverse = reverse,
            ConfigChange::SegmentCount(segment_count) => self.segment_count = segment_count,
            ConfigChange::SpeedDivisor(divisor) => self.speed_divisor = divisor,
            ConfigChange::GammaCorrection(gamma) => self.gamma_correction = gamma,
            ConfigChange::PhaseAnchoring(anchoring) => self.phase_anchoring = anchoring,
        }
    }
}

/// A configuration update queued by the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigChange {
    /// Swap the whole configuration
    Replace(Configuration),
    Universe(u16),
    ChannelOffset(u16),
    Channels {
        channels_per_pixel: u8,
        white_enabled: bool,
    },
    HsvInput(bool),
    Reverse(bool),
    SegmentCount(u16),
    SpeedDivisor(f32),
    GammaCorrection(bool),
    PhaseAnchoring(PhaseAnchoring),
}

impl ConfigChange {
    /// Whether both changes touch the same setting, so the later one wins
    pub fn same_setting(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
