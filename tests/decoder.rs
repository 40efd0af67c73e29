mod tests {
    use dmx_pixel_composer::color::{ChannelLayout, Rgbw};
    use dmx_pixel_composer::decoder::BlinkParams;
    use dmx_pixel_composer::{
        ColorPair, Configuration, DecodeError, Frame, ModeId, ModeParams, decode,
        required_channels,
    };

    const RED: Rgbw = Rgbw::new(255, 0, 0, 0);
    const GREEN: Rgbw = Rgbw::new(0, 255, 0, 0);

    fn frame(payload: &[u8]) -> Frame<'_> {
        Frame::from_payload(1, 0, payload)
    }

    #[test]
    fn test_required_channels() {
        let rgb = ChannelLayout::Rgb;
        let rgbw = ChannelLayout::Rgbw;
        assert_eq!(required_channels(ModeId::PixelMap, rgb, 1, 10), 30);
        assert_eq!(required_channels(ModeId::PixelMap, rgbw, 1, 10), 40);
        assert_eq!(required_channels(ModeId::Uniform, rgb, 1, 10), 4);
        assert_eq!(required_channels(ModeId::UniformMix, rgb, 1, 10), 8);
        assert_eq!(required_channels(ModeId::Blink, rgb, 3, 10), 21);
        assert_eq!(required_channels(ModeId::Blink, rgbw, 2, 10), 16);
        assert_eq!(required_channels(ModeId::BlinkMix, rgb, 3, 10), 10);
        assert_eq!(required_channels(ModeId::Slider, rgb, 1, 10), 6);
        assert_eq!(required_channels(ModeId::SliderMix, rgb, 1, 10), 9);
        assert_eq!(required_channels(ModeId::SmoothSlider, rgb, 1, 10), 7);
        assert_eq!(required_channels(ModeId::SmoothSliderMix, rgbw, 1, 10), 12);
        assert_eq!(required_channels(ModeId::Spinner, rgb, 1, 10), 7);
        assert_eq!(required_channels(ModeId::SpinnerMix, rgb, 1, 10), 10);
        assert_eq!(required_channels(ModeId::RainbowSlider, rgbw, 1, 10), 3);
        assert_eq!(required_channels(ModeId::RainbowSpinner, rgb, 1, 10), 3);
    }

    #[test]
    fn test_wrong_universe() {
        let config = Configuration::default();
        let payload = [255, 0, 0, 255];
        let result = decode(
            &Frame::from_payload(9, 0, &payload),
            &config,
            ModeId::Uniform,
            10,
        );
        assert_eq!(result, Err(DecodeError::WrongUniverse));
    }

    #[test]
    fn test_insufficient_channels() {
        let config = Configuration::default();
        assert_eq!(
            decode(&frame(&[255, 0, 0]), &config, ModeId::Uniform, 10),
            Err(DecodeError::Insufficient {
                required: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_channel_offset() {
        let config = Configuration::default().with_channel_offset(2);
        assert_eq!(
            decode(&frame(&[9, 9, 255, 0, 0, 255]), &config, ModeId::Uniform, 10),
            Ok(ModeParams::Uniform {
                colors: ColorPair::single(RED),
                intensity: 1.0,
                balance: 1.0,
            })
        );
        assert_eq!(
            decode(&frame(&[9, 9, 255, 0, 0]), &config, ModeId::Uniform, 10),
            Err(DecodeError::Insufficient {
                required: 4,
                available: 3
            })
        );
        assert_eq!(
            decode(&frame(&[9]), &config, ModeId::Uniform, 10),
            Err(DecodeError::Insufficient {
                required: 4,
                available: 0
            })
        );
    }

    #[test]
    fn test_uniform_mix_balance() {
        let config = Configuration::default();
        let payload = [255, 0, 0, 0, 255, 0, 255, 0];
        assert_eq!(
            decode(&frame(&payload), &config, ModeId::UniformMix, 10),
            Ok(ModeParams::Uniform {
                colors: ColorPair::new(RED, GREEN),
                intensity: 1.0,
                balance: 0.0,
            })
        );
    }

    #[test]
    fn test_hsv_input() {
        let config = Configuration::default().with_hsv_input(true);
        let payload = [0, 255, 255, 255];
        let Ok(ModeParams::Uniform { colors, .. }) =
            decode(&frame(&payload), &config, ModeId::Uniform, 10)
        else {
            panic!("uniform frame rejected");
        };
        assert_eq!(colors.primary, RED);
    }

    #[test]
    fn test_rgbw_color() {
        let config = Configuration::default().with_channels(4, true);
        let payload = [1, 2, 3, 4, 255];
        let Ok(ModeParams::Uniform { colors, .. }) =
            decode(&frame(&payload), &config, ModeId::Uniform, 10)
        else {
            panic!("uniform frame rejected");
        };
        assert_eq!(colors.primary, Rgbw::new(1, 2, 3, 4));
    }

    #[test]
    fn test_four_channels_without_white_read_as_rgb() {
        let config = Configuration::default().with_channels(4, false);
        let payload = [1, 2, 3, 255];
        let Ok(ModeParams::Uniform { colors, intensity, .. }) =
            decode(&frame(&payload), &config, ModeId::Uniform, 10)
        else {
            panic!("uniform frame rejected");
        };
        assert_eq!(colors.primary, Rgbw::new(1, 2, 3, 0));
        assert!((intensity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pixel_map() {
        let config = Configuration::default();
        let payload = [1, 2, 3, 4, 5, 6];
        let Ok(ModeParams::PixelMap(pixels)) =
            decode(&frame(&payload), &config, ModeId::PixelMap, 2)
        else {
            panic!("pixel map frame rejected");
        };
        assert_eq!(pixels.color(0), Rgbw::new(1, 2, 3, 0));
        assert_eq!(pixels.color(1), Rgbw::new(4, 5, 6, 0));
        assert_eq!(pixels.color(5), Rgbw::BLACK);
    }

    #[test]
    fn test_blink_segments() {
        let config = Configuration::default()
            .with_segment_count(2)
            .with_speed_divisor(256.0);
        let payload = [
            255, 0, 0, 255, 64, 0, 255, //
            0, 255, 0, 0, 32, 255, 0,
        ];
        let Ok(ModeParams::Blink(blocks)) =
            decode(&frame(&payload), &config, ModeId::Blink, 10)
        else {
            panic!("blink frame rejected");
        };
        assert_eq!(
            blocks.iter().collect::<Vec<_>>(),
            vec![
                BlinkParams {
                    colors: ColorPair::single(RED),
                    intensity: 1.0,
                    speed: 0.25,
                    ramp: 0.0,
                    duty: 360.0,
                },
                BlinkParams {
                    colors: ColorPair::single(GREEN),
                    intensity: 0.0,
                    speed: 0.125,
                    ramp: 360.0,
                    duty: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_blink_mix_has_one_block() {
        let config = Configuration::default().with_segment_count(4);
        let payload = [255, 0, 0, 0, 255, 0, 255, 0, 0, 0];
        let Ok(ModeParams::Blink(blocks)) =
            decode(&frame(&payload), &config, ModeId::BlinkMix, 10)
        else {
            panic!("blink frame rejected");
        };
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks.block(0).unwrap().colors, ColorPair::new(RED, GREEN));
        assert_eq!(blocks.block(1), None);
    }

    #[test]
    fn test_blink_segment_limits() {
        let payload = [0xFF; 16];
        let config = Configuration::default().with_segment_count(0);
        assert_eq!(
            decode(&frame(&payload), &config, ModeId::Blink, 10),
            Err(DecodeError::NoSegments)
        );

        let config = Configuration::default().with_segment_count(74);
        assert_eq!(
            decode(&frame(&payload), &config, ModeId::Blink, 10),
            Err(DecodeError::TooManySegments(74))
        );
    }

    #[test]
    fn test_blink_full_universe() {
        // 73 blocks of 7 channels fill 511 of the 512 slots
        let config = Configuration::default().with_segment_count(73);
        let payload = [0x80; 512];
        let Ok(ModeParams::Blink(blocks)) =
            decode(&frame(&payload), &config, ModeId::Blink, 73)
        else {
            panic!("blink frame rejected");
        };
        assert_eq!(blocks.len(), 73);
        assert_eq!(blocks.iter().count(), 73);
        assert_eq!(blocks.block(72).unwrap().colors, ColorPair::single(Rgbw::new(128, 128, 128, 0)));
    }

    #[test]
    fn test_reserved_mode() {
        let config = Configuration::default();
        let payload = [0xFF; 16];
        assert_eq!(
            decode(&frame(&payload), &config, ModeId::Reserved15, 10),
            Err(DecodeError::Reserved)
        );
    }

    #[test]
    fn test_slider_pixel_units() {
        let config = Configuration::default();
        let payload = [255, 0, 0, 255, 255, 255];
        assert_eq!(
            decode(&frame(&payload), &config, ModeId::Slider, 11),
            Ok(ModeParams::Slider {
                colors: ColorPair::single(RED),
                intensity: 1.0,
                position: 10.0,
                width: 11.0,
            })
        );
    }

    #[test]
    fn test_speed_divisor_zero_disables_motion() {
        let config = Configuration::default().with_speed_divisor(0.0);
        let payload = [255, 0, 0, 255, 200, 90, 10];
        let Ok(ModeParams::Spinner { speed, .. }) =
            decode(&frame(&payload), &config, ModeId::Spinner, 10)
        else {
            panic!("spinner frame rejected");
        };
        assert!(speed.abs() < f32::EPSILON);
    }
}
