use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelOutput;
use crate::color::{ChannelLayout, Rgbw, gamma_correct};
use crate::composite::resolve;
use crate::config::{ConfigReceiver, Configuration};
#[cfg(feature = "esp32-log")]
use crate::decoder::DecodeError;
pub use crate::decoder::Frame;
use crate::decoder::decode;
use crate::mode::ModeId;
use crate::phase::PhaseEngine;

/// Half-level colors for the single-pixel status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl StatusColor {
    const LEVEL: u8 = 128;

    pub const fn color(self) -> Rgbw {
        let l = Self::LEVEL;
        match self {
            Self::Red => Rgbw::new(l, 0, 0, 0),
            Self::Green => Rgbw::new(0, l, 0, 0),
            Self::Blue => Rgbw::new(0, 0, l, 0),
            Self::Yellow => Rgbw::new(l, l, 0, 0),
            Self::Cyan => Rgbw::new(0, l, l, 0),
            Self::Magenta => Rgbw::new(l, 0, l, 0),
        }
    }
}

/// Pixel renderer - the main orchestrator
///
/// Owns the output, the configuration and the animation phase. Every received
/// frame goes through [`Renderer::render`], which either repaints the whole
/// strip and flushes once, or leaves it untouched.
pub struct Renderer<'a, O: PixelOutput, const CHANGES: usize> {
    output: O,
    changes: ConfigReceiver<'a, CHANGES>,
    config: Configuration,
    phase: PhaseEngine,
}

impl<'a, O: PixelOutput, const CHANGES: usize> Renderer<'a, O, CHANGES> {
    /// Create a renderer listening for configuration changes on `changes`
    pub const fn new(
        output: O,
        config: Configuration,
        changes: ConfigReceiver<'a, CHANGES>,
    ) -> Self {
        Self {
            output,
            changes,
            config,
            phase: PhaseEngine::new(),
        }
    }

    /// Render one frame
    ///
    /// Call this from the transport callback for every received frame.
    /// Frames for other universes, frames too short for `mode` and reserved
    /// modes produce no writes and no flush.
    pub fn render(&mut self, mode: ModeId, frame: &Frame<'_>, now: Instant) {
        self.process_changes();

        let pixel_count = self.output.pixel_count();
        if pixel_count == 0 {
            return;
        }

        let params = match decode(frame, &self.config, mode, pixel_count) {
            Ok(params) => params,
            #[cfg(feature = "esp32-log")]
            Err(DecodeError::WrongUniverse) => return,
            #[cfg(feature = "esp32-log")]
            Err(error) => {
                println!(
                    "[Renderer.render] frame rejected for {}: {:?}",
                    mode.as_str(),
                    error
                );
                return;
            }
            #[cfg(not(feature = "esp32-log"))]
            Err(_) => return,
        };

        let composite = resolve(params, &self.config, pixel_count, &mut self.phase, now);
        self.write_pixels(pixel_count, |pixel| composite.color(pixel));
    }

    /// Paint every pixel with `color` and flush once
    ///
    /// Works without a frame, e.g. to show a solid color while the network
    /// comes up. Pending configuration changes are applied first.
    pub fn fill(&mut self, color: Rgbw) {
        self.process_changes();
        let pixel_count = self.output.pixel_count();
        self.write_pixels(pixel_count, |_| color);
    }

    /// Turn every pixel off
    pub fn blackout(&mut self) {
        self.fill(Rgbw::BLACK);
    }

    /// Light only the first pixel, the rest of the strip goes dark
    pub fn status(&mut self, status: StatusColor) {
        self.process_changes();
        let color = status.color();
        let pixel_count = self.output.pixel_count();
        self.write_pixels(pixel_count, |pixel| {
            if pixel == 0 { color } else { Rgbw::BLACK }
        });
    }

    /// Write `pixel_count` pixels in order, yielding after each, then flush.
    fn write_pixels(&mut self, pixel_count: u16, color_of: impl Fn(u16) -> Rgbw) {
        if pixel_count == 0 {
            return;
        }
        let layout = self.config.layout();
        let gamma = self.config.gamma_correction;

        for pixel in 0..pixel_count {
            let mut color = color_of(pixel);
            if gamma {
                color = gamma_correct(color);
            }
            match layout {
                ChannelLayout::Rgb => self.output.set_pixel(pixel, color.rgb()),
                ChannelLayout::Rgbw => self.output.set_pixel_rgbw(pixel, color.rgb(), color.w),
            }
            self.output.yield_now();
        }
        self.output.flush();
    }

    /// Apply queued configuration changes
    fn process_changes(&mut self) {
        let changes = self.changes;
        for change in changes.drain() {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer.process_changes] applying {:?}", change);
            self.config.apply(change);
        }
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Replace the configuration directly, bypassing the change queue
    pub const fn set_config(&mut self, config: Configuration) {
        self.config = config;
    }

    /// Phase anchors, mostly useful for inspection
    pub const fn phase(&self) -> &PhaseEngine {
        &self.phase
    }
}
