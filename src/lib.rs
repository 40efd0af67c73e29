#![no_std]

pub mod angle;
pub mod bounds;
pub mod color;
pub mod composite;
pub mod config;
pub mod decoder;
pub mod mode;
pub mod phase;
pub mod renderer;

pub use bounds::{SegmentBounds, segment_bounds, segment_of};
pub use composite::{Composite, resolve};
pub use config::{
    ConfigChange, ConfigChannel, ConfigReceiver, ConfigSender, Configuration,
    DEFAULT_SPEED_DIVISOR, TryReceiveError, TrySendError,
};
pub use decoder::{
    BlinkBlocks, BlinkParams, ColorPair, DecodeError, Frame, ModeParams, decode,
    required_channels,
};
pub use mode::ModeId;
pub use phase::{MAX_SEGMENTS, PhaseAnchoring, PhaseEngine, PhaseState};
pub use renderer::{Renderer, StatusColor};

pub use color::{ChannelLayout, Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract pixel output trait
///
/// Implement this trait to support different strip drivers.
/// The renderer is generic over this trait.
pub trait PixelOutput {
    /// Number of pixels on the strip
    fn pixel_count(&self) -> u16;

    /// Stage the color of one pixel
    fn set_pixel(&mut self, index: u16, color: Rgb);

    /// Stage the color of one pixel with a white value.
    ///
    /// Strips without a white channel drop it.
    fn set_pixel_rgbw(&mut self, index: u16, color: Rgb, white: u8) {
        let _ = white;
        self.set_pixel(index, color);
    }

    /// Push staged pixels to the strip
    fn flush(&mut self);

    /// Called between pixels so long strips don't starve other tasks
    fn yield_now(&mut self) {}
}
