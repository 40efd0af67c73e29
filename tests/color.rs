mod tests {
    use dmx_pixel_composer::color::{
        ChannelLayout, Rgb, Rgbw, gamma8, gamma_correct, hsv_bytes_to_rgb, hsv_to_rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_hsv_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), BLUE);
        assert_eq!(
            hsv_to_rgb(60.0, 1.0, 1.0),
            Rgb {
                r: 255,
                g: 255,
                b: 0
            }
        );
    }

    #[test]
    fn test_hsv_grey() {
        assert_eq!(
            hsv_to_rgb(200.0, 0.0, 0.5),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
        assert_eq!(hsv_to_rgb(200.0, 1.0, 0.0), Rgb::default());
    }

    #[test]
    fn test_hsv_hue_out_of_range() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(f32::NAN, 1.0, 1.0), RED);
    }

    #[test]
    fn test_hsv_bytes() {
        assert_eq!(hsv_bytes_to_rgb(0, 255, 255), RED);
        assert_eq!(hsv_bytes_to_rgb(128, 255, 255), CYAN);
        assert_eq!(hsv_bytes_to_rgb(77, 0, 0), Rgb::default());
    }

    #[test]
    fn test_gamma() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(128), 37);
        assert_eq!(gamma8(255), 255);
        assert_eq!(
            gamma_correct(Rgbw::new(128, 255, 0, 128)),
            Rgbw::new(37, 255, 0, 37)
        );
    }

    #[test]
    fn test_rgbw_parts() {
        let color = Rgbw::from_rgb(CYAN, 9);
        assert_eq!(color.rgb(), CYAN);
        assert_eq!(color.w, 9);
        assert_eq!(Rgbw::from(RED), Rgbw::new(255, 0, 0, 0));
    }

    #[test]
    fn test_channel_layout() {
        assert_eq!(ChannelLayout::from_channels(3, false), ChannelLayout::Rgb);
        assert_eq!(ChannelLayout::from_channels(3, true), ChannelLayout::Rgb);
        assert_eq!(ChannelLayout::from_channels(4, false), ChannelLayout::Rgb);
        assert_eq!(ChannelLayout::from_channels(4, true), ChannelLayout::Rgbw);
        assert_eq!(ChannelLayout::Rgb.channels(), 3);
        assert_eq!(ChannelLayout::Rgbw.channels(), 4);
    }
}
