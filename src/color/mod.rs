mod gamma;
mod hsv;
mod layout;

pub use gamma::{GAMMA8, gamma8, gamma_correct};
pub use hsv::{hsv_bytes_to_rgb, hsv_to_rgb};
pub use layout::ChannelLayout;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Color with a dedicated white channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Extend an RGB color with a white value
    pub const fn from_rgb(rgb: Rgb, w: u8) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, w)
    }

    /// Color part without the white channel
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Apply `f` to every channel, white included
    #[must_use]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.w))
    }
}

impl From<Rgb> for Rgbw {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb, 0)
    }
}
