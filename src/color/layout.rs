/// How many channels one color occupies in the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, white
    Rgbw,
}

impl ChannelLayout {
    /// Select the layout from the strip channel count and white flag.
    ///
    /// A 4-channel strip with white disabled is addressed as RGB.
    pub const fn from_channels(channels_per_pixel: u8, white_enabled: bool) -> Self {
        if channels_per_pixel == 4 && white_enabled {
            Self::Rgbw
        } else {
            Self::Rgb
        }
    }

    /// Number of payload bytes per color
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgbw => 4,
        }
    }

    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw)
    }
}
