//! Channel decoder
//!
//! Turns the payload of one frame into typed parameters for the selected
//! mode. Validation happens up front: a frame for another universe or one too
//! short for the mode is rejected before a single channel is read, so an
//! undersized frame can never produce a partial update.

use crate::angle::{byte_to_degrees, byte_to_unit};
use crate::color::{ChannelLayout, Rgb, Rgbw, hsv_bytes_to_rgb};
use crate::config::Configuration;
use crate::mode::ModeId;
use crate::phase::MAX_SEGMENTS;

/// One received frame, borrowed from the transport for a single call
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub universe: u16,
    /// Length reported by the transport
    pub length: u16,
    /// Accepted for completeness, frames are never reordered
    pub sequence: u8,
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    pub const fn new(universe: u16, length: u16, sequence: u8, payload: &'a [u8]) -> Self {
        Self {
            universe,
            length,
            sequence,
            payload,
        }
    }

    /// Frame whose length is the payload size
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_payload(universe: u16, sequence: u8, payload: &'a [u8]) -> Self {
        let length = payload.len().min(usize::from(u16::MAX)) as u16;
        Self::new(universe, length, sequence, payload)
    }

    /// Bytes that are both reported and actually present
    pub fn data(&self) -> &'a [u8] {
        let payload = self.payload;
        let len = usize::from(self.length).min(payload.len());
        &payload[..len]
    }
}

/// Why a frame produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame addressed to another universe
    WrongUniverse,
    /// Fewer channels after the offset than the mode needs
    Insufficient { required: usize, available: usize },
    /// Segmented mode configured with zero segments
    NoSegments,
    /// More segments than [`MAX_SEGMENTS`]
    TooManySegments(u16),
    /// Reserved mode slot
    Reserved,
}

/// Primary color and the color it is balanced against.
///
/// Single-color modes balance against black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub primary: Rgbw,
    pub secondary: Rgbw,
}

impl ColorPair {
    pub const fn new(primary: Rgbw, secondary: Rgbw) -> Self {
        Self { primary, secondary }
    }

    pub const fn single(primary: Rgbw) -> Self {
        Self::new(primary, Rgbw::BLACK)
    }
}

/// Per-pixel colors of the pixel map mode, read lazily from the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelChannels<'a> {
    data: &'a [u8],
    layout: ChannelLayout,
    hsv_input: bool,
}

impl PixelChannels<'_> {
    /// Color of `pixel`, black past the end of the data
    pub fn color(&self, pixel: u16) -> Rgbw {
        let mut reader = ChannelReader {
            data: self.data,
            cursor: usize::from(pixel) * self.layout.channels(),
        };
        reader.color(self.layout, self.hsv_input)
    }
}

/// Parameters of one blink segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkParams {
    pub colors: ColorPair,
    pub intensity: f32,
    /// Turns per second
    pub speed: f32,
    /// Degrees, not yet clamped against the duty cycle
    pub ramp: f32,
    /// Degrees of the cycle spent on the primary color
    pub duty: f32,
}

/// Blink parameter blocks, read lazily from the payload.
///
/// The payload length is checked once in [`decode`], so every block below
/// [`BlinkBlocks::len`] is fully present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkBlocks<'a> {
    data: &'a [u8],
    mode: ModeId,
    count: u16,
    config: Configuration,
}

impl<'a> BlinkBlocks<'a> {
    /// Number of blocks, one per segment
    pub const fn len(&self) -> u16 {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Block `index`, `None` past the last one
    pub fn block(&self, index: u16) -> Option<BlinkParams> {
        if index >= self.count {
            return None;
        }
        let layout = self.config.layout();
        let stride = self.mode.color_count() * layout.channels() + self.mode.control_channels();
        let mut reader = ChannelReader {
            data: self.data,
            cursor: usize::from(index) * stride,
        };
        let hsv = self.config.hsv_input;
        Some(BlinkParams {
            colors: reader.colors(self.mode, layout, hsv),
            intensity: reader.unit(),
            speed: self.config.speed(reader.byte()),
            ramp: reader.degrees(),
            duty: reader.degrees(),
        })
    }

    /// Blocks in segment order
    pub fn iter(&self) -> impl Iterator<Item = BlinkParams> + 'a {
        let blocks = *self;
        (0..blocks.count).filter_map(move |index| blocks.block(index))
    }
}

/// Decoded parameter set of one frame
#[derive(Debug, Clone, PartialEq)]
pub enum ModeParams<'a> {
    PixelMap(PixelChannels<'a>),
    Uniform {
        colors: ColorPair,
        intensity: f32,
        /// 1 = primary, 0 = secondary
        balance: f32,
    },
    /// One block per segment; the two-color blink has exactly one
    Blink(BlinkBlocks<'a>),
    /// Position and width in pixels
    Slider {
        colors: ColorPair,
        intensity: f32,
        position: f32,
        width: f32,
    },
    /// Position, width and ramp in degrees
    SmoothSlider {
        colors: ColorPair,
        intensity: f32,
        position: f32,
        width: f32,
        ramp: f32,
    },
    Spinner {
        colors: ColorPair,
        intensity: f32,
        speed: f32,
        width: f32,
        ramp: f32,
    },
    RainbowSlider {
        saturation: f32,
        value: f32,
        position: f32,
    },
    RainbowSpinner {
        saturation: f32,
        value: f32,
        speed: f32,
    },
}

/// Channels `mode` needs after the offset
pub const fn required_channels(
    mode: ModeId,
    layout: ChannelLayout,
    segment_count: u16,
    pixel_count: u16,
) -> usize {
    let channels = layout.channels();
    match mode {
        ModeId::PixelMap => channels * pixel_count as usize,
        ModeId::Blink => (channels + mode.control_channels()) * segment_count as usize,
        _ => mode.color_count() * channels + mode.control_channels(),
    }
}

/// Decode `frame` for `mode`.
///
/// `pixel_count` is the length of the output strip; the pixel map and the
/// edge-bounded sliders depend on it.
pub fn decode<'a>(
    frame: &Frame<'a>,
    config: &Configuration,
    mode: ModeId,
    pixel_count: u16,
) -> Result<ModeParams<'a>, DecodeError> {
    if frame.universe != config.universe {
        return Err(DecodeError::WrongUniverse);
    }
    if mode.is_reserved() {
        return Err(DecodeError::Reserved);
    }
    if mode == ModeId::Blink {
        if config.segment_count == 0 {
            return Err(DecodeError::NoSegments);
        }
        if usize::from(config.segment_count) > MAX_SEGMENTS {
            return Err(DecodeError::TooManySegments(config.segment_count));
        }
    }

    let layout = config.layout();
    let data = frame.data();
    let offset = usize::from(config.channel_offset);
    let available = data.len().saturating_sub(offset);
    let required = required_channels(mode, layout, config.segment_count, pixel_count);
    if offset > data.len() || available < required {
        return Err(DecodeError::Insufficient {
            required,
            available,
        });
    }

    let mut reader = ChannelReader {
        data: &data[offset..],
        cursor: 0,
    };
    let hsv = config.hsv_input;
    let pixels = f32::from(pixel_count);

    let params = match mode {
        ModeId::PixelMap => ModeParams::PixelMap(PixelChannels {
            data: reader.data,
            layout,
            hsv_input: hsv,
        }),
        ModeId::Uniform | ModeId::UniformMix => {
            let colors = reader.colors(mode, layout, hsv);
            let intensity = reader.unit();
            let balance = if mode == ModeId::UniformMix {
                reader.unit()
            } else {
                1.0
            };
            ModeParams::Uniform {
                colors,
                intensity,
                balance,
            }
        }
        ModeId::Blink | ModeId::BlinkMix => ModeParams::Blink(BlinkBlocks {
            data: reader.data,
            mode,
            count: if mode == ModeId::Blink {
                config.segment_count
            } else {
                1
            },
            config: *config,
        }),
        ModeId::Slider | ModeId::SliderMix => ModeParams::Slider {
            colors: reader.colors(mode, layout, hsv),
            intensity: reader.unit(),
            position: f32::from(reader.byte()) * (pixels - 1.0).max(0.0) / 255.0,
            width: f32::from(reader.byte()) * pixels / 255.0,
        },
        ModeId::SmoothSlider | ModeId::SmoothSliderMix => ModeParams::SmoothSlider {
            colors: reader.colors(mode, layout, hsv),
            intensity: reader.unit(),
            position: reader.degrees(),
            width: reader.degrees(),
            ramp: reader.degrees(),
        },
        ModeId::Spinner | ModeId::SpinnerMix => ModeParams::Spinner {
            colors: reader.colors(mode, layout, hsv),
            intensity: reader.unit(),
            speed: config.speed(reader.byte()),
            width: reader.degrees(),
            ramp: reader.degrees(),
        },
        ModeId::RainbowSlider => ModeParams::RainbowSlider {
            saturation: reader.unit(),
            value: reader.unit(),
            position: reader.degrees(),
        },
        ModeId::RainbowSpinner => ModeParams::RainbowSpinner {
            saturation: reader.unit(),
            value: reader.unit(),
            speed: config.speed(reader.byte()),
        },
        ModeId::Reserved13 | ModeId::Reserved14 | ModeId::Reserved15 | ModeId::Reserved16 => {
            return Err(DecodeError::Reserved);
        }
    };

    Ok(params)
}

/// Sequential reader over the channels of one fixture
struct ChannelReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl ChannelReader<'_> {
    fn byte(&mut self) -> u8 {
        let value = self.data.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        value
    }

    fn unit(&mut self) -> f32 {
        byte_to_unit(self.byte())
    }

    fn degrees(&mut self) -> f32 {
        byte_to_degrees(self.byte())
    }

    fn color(&mut self, layout: ChannelLayout, hsv_input: bool) -> Rgbw {
        let (r, g, b) = (self.byte(), self.byte(), self.byte());
        let white = if layout.has_white() { self.byte() } else { 0 };
        let rgb = if hsv_input {
            hsv_bytes_to_rgb(r, g, b)
        } else {
            Rgb { r, g, b }
        };
        Rgbw::from_rgb(rgb, white)
    }

    fn colors(&mut self, mode: ModeId, layout: ChannelLayout, hsv_input: bool) -> ColorPair {
        let primary = self.color(layout, hsv_input);
        if mode.color_count() == 2 {
            ColorPair::new(primary, self.color(layout, hsv_input))
        } else {
            ColorPair::single(primary)
        }
    }
}
