//! Animation mode registry
//!
//! Every mode is selected by a raw id coming from the fixture setup. Ids 13-16
//! are reserved slots that render nothing.

const MODE_NAME_PIXEL_MAP: &str = "pixel_map";
const MODE_NAME_UNIFORM: &str = "uniform";
const MODE_NAME_UNIFORM_MIX: &str = "uniform_mix";
const MODE_NAME_BLINK: &str = "blink";
const MODE_NAME_BLINK_MIX: &str = "blink_mix";
const MODE_NAME_SLIDER: &str = "slider";
const MODE_NAME_SLIDER_MIX: &str = "slider_mix";
const MODE_NAME_SMOOTH_SLIDER: &str = "smooth_slider";
const MODE_NAME_SMOOTH_SLIDER_MIX: &str = "smooth_slider_mix";
const MODE_NAME_SPINNER: &str = "spinner";
const MODE_NAME_SPINNER_MIX: &str = "spinner_mix";
const MODE_NAME_RAINBOW_SLIDER: &str = "rainbow_slider";
const MODE_NAME_RAINBOW_SPINNER: &str = "rainbow_spinner";
const MODE_NAME_RESERVED: &str = "reserved";

const MODE_ID_PIXEL_MAP: u8 = 0;
const MODE_ID_UNIFORM: u8 = 1;
const MODE_ID_UNIFORM_MIX: u8 = 2;
const MODE_ID_BLINK: u8 = 3;
const MODE_ID_BLINK_MIX: u8 = 4;
const MODE_ID_SLIDER: u8 = 5;
const MODE_ID_SLIDER_MIX: u8 = 6;
const MODE_ID_SMOOTH_SLIDER: u8 = 7;
const MODE_ID_SMOOTH_SLIDER_MIX: u8 = 8;
const MODE_ID_SPINNER: u8 = 9;
const MODE_ID_SPINNER_MIX: u8 = 10;
const MODE_ID_RAINBOW_SLIDER: u8 = 11;
const MODE_ID_RAINBOW_SPINNER: u8 = 12;
const MODE_ID_RESERVED_13: u8 = 13;
const MODE_ID_RESERVED_14: u8 = 14;
const MODE_ID_RESERVED_15: u8 = 15;
const MODE_ID_RESERVED_16: u8 = 16;

/// Known mode ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    /// Every pixel takes its own color from the payload
    PixelMap = MODE_ID_PIXEL_MAP,
    /// Single uniform color scaled by intensity
    Uniform = MODE_ID_UNIFORM,
    /// Two colors mixed by a balance channel
    UniformMix = MODE_ID_UNIFORM_MIX,
    /// Color blinking against black, one parameter block per segment
    Blink = MODE_ID_BLINK,
    /// Uniform fill blinking between two colors
    BlinkMix = MODE_ID_BLINK_MIX,
    /// Hard-edged band moved between the strip edges
    Slider = MODE_ID_SLIDER,
    /// Hard-edged band over a background color
    SliderMix = MODE_ID_SLIDER_MIX,
    /// Soft-edged band, continuous over the strip ends
    SmoothSlider = MODE_ID_SMOOTH_SLIDER,
    /// Soft-edged band over a background color
    SmoothSliderMix = MODE_ID_SMOOTH_SLIDER_MIX,
    /// Soft-edged band spinning along the strip
    Spinner = MODE_ID_SPINNER,
    /// Spinning band over a background color
    SpinnerMix = MODE_ID_SPINNER_MIX,
    /// Static hue wheel with a movable offset
    RainbowSlider = MODE_ID_RAINBOW_SLIDER,
    /// Hue wheel rotating over time
    RainbowSpinner = MODE_ID_RAINBOW_SPINNER,
    Reserved13 = MODE_ID_RESERVED_13,
    Reserved14 = MODE_ID_RESERVED_14,
    Reserved15 = MODE_ID_RESERVED_15,
    Reserved16 = MODE_ID_RESERVED_16,
}

impl ModeId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_PIXEL_MAP => Self::PixelMap,
            MODE_ID_UNIFORM => Self::Uniform,
            MODE_ID_UNIFORM_MIX => Self::UniformMix,
            MODE_ID_BLINK => Self::Blink,
            MODE_ID_BLINK_MIX => Self::BlinkMix,
            MODE_ID_SLIDER => Self::Slider,
            MODE_ID_SLIDER_MIX => Self::SliderMix,
            MODE_ID_SMOOTH_SLIDER => Self::SmoothSlider,
            MODE_ID_SMOOTH_SLIDER_MIX => Self::SmoothSliderMix,
            MODE_ID_SPINNER => Self::Spinner,
            MODE_ID_SPINNER_MIX => Self::SpinnerMix,
            MODE_ID_RAINBOW_SLIDER => Self::RainbowSlider,
            MODE_ID_RAINBOW_SPINNER => Self::RainbowSpinner,
            MODE_ID_RESERVED_13 => Self::Reserved13,
            MODE_ID_RESERVED_14 => Self::Reserved14,
            MODE_ID_RESERVED_15 => Self::Reserved15,
            MODE_ID_RESERVED_16 => Self::Reserved16,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PixelMap => MODE_NAME_PIXEL_MAP,
            Self::Uniform => MODE_NAME_UNIFORM,
            Self::UniformMix => MODE_NAME_UNIFORM_MIX,
            Self::Blink => MODE_NAME_BLINK,
            Self::BlinkMix => MODE_NAME_BLINK_MIX,
            Self::Slider => MODE_NAME_SLIDER,
            Self::SliderMix => MODE_NAME_SLIDER_MIX,
            Self::SmoothSlider => MODE_NAME_SMOOTH_SLIDER,
            Self::SmoothSliderMix => MODE_NAME_SMOOTH_SLIDER_MIX,
            Self::Spinner => MODE_NAME_SPINNER,
            Self::SpinnerMix => MODE_NAME_SPINNER_MIX,
            Self::RainbowSlider => MODE_NAME_RAINBOW_SLIDER,
            Self::RainbowSpinner => MODE_NAME_RAINBOW_SPINNER,
            Self::Reserved13 | Self::Reserved14 | Self::Reserved15 | Self::Reserved16 => {
                MODE_NAME_RESERVED
            }
        }
    }

    /// Parse a mode by name. Reserved slots have no name of their own.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_PIXEL_MAP => Some(Self::PixelMap),
            MODE_NAME_UNIFORM => Some(Self::Uniform),
            MODE_NAME_UNIFORM_MIX => Some(Self::UniformMix),
            MODE_NAME_BLINK => Some(Self::Blink),
            MODE_NAME_BLINK_MIX => Some(Self::BlinkMix),
            MODE_NAME_SLIDER => Some(Self::Slider),
            MODE_NAME_SLIDER_MIX => Some(Self::SliderMix),
            MODE_NAME_SMOOTH_SLIDER => Some(Self::SmoothSlider),
            MODE_NAME_SMOOTH_SLIDER_MIX => Some(Self::SmoothSliderMix),
            MODE_NAME_SPINNER => Some(Self::Spinner),
            MODE_NAME_SPINNER_MIX => Some(Self::SpinnerMix),
            MODE_NAME_RAINBOW_SLIDER => Some(Self::RainbowSlider),
            MODE_NAME_RAINBOW_SPINNER => Some(Self::RainbowSpinner),
            _ => None,
        }
    }

    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::Reserved13 | Self::Reserved14 | Self::Reserved15 | Self::Reserved16
        )
    }

    /// Number of payload colors the mode reads (per segment for [`ModeId::Blink`])
    pub const fn color_count(self) -> usize {
        match self {
            Self::Uniform
            | Self::Blink
            | Self::Slider
            | Self::SmoothSlider
            | Self::Spinner => 1,
            Self::UniformMix
            | Self::BlinkMix
            | Self::SliderMix
            | Self::SmoothSliderMix
            | Self::SpinnerMix => 2,
            Self::PixelMap
            | Self::RainbowSlider
            | Self::RainbowSpinner
            | Self::Reserved13
            | Self::Reserved14
            | Self::Reserved15
            | Self::Reserved16 => 0,
        }
    }

    /// Number of single-byte control channels following the colors
    pub const fn control_channels(self) -> usize {
        match self {
            Self::Uniform => 1,
            Self::UniformMix => 2,
            Self::Slider | Self::SliderMix | Self::RainbowSlider | Self::RainbowSpinner => 3,
            Self::Blink
            | Self::BlinkMix
            | Self::SmoothSlider
            | Self::SmoothSliderMix
            | Self::Spinner
            | Self::SpinnerMix => 4,
            Self::PixelMap
            | Self::Reserved13
            | Self::Reserved14
            | Self::Reserved15
            | Self::Reserved16 => 0,
        }
    }
}

impl TryFrom<u8> for ModeId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(value)
    }
}
