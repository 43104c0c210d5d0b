mod tests {
    use ledbox_anim::control::{StripControl, blend_rgb_toward, blend_u8_toward};
    use ledbox_anim::{OutputDriver, Rgb};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[derive(Default)]
    struct CaptureDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for CaptureDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[test]
    fn test_fill_range() {
        let mut strip = StripControl::<10>::new(255);
        strip.fill(RED, 3, 4);

        for (i, pixel) in strip.pixels().iter().enumerate() {
            if (3..7).contains(&i) {
                assert_eq!(*pixel, RED, "pixel {i} should be filled");
            } else {
                assert_eq!(*pixel, BLACK, "pixel {i} should be untouched");
            }
        }
    }

    #[test]
    fn test_fill_count_clamped_to_strip_end() {
        let mut strip = StripControl::<10>::new(255);
        strip.fill(RED, 8, 100);

        assert_eq!(strip.pixels()[7], BLACK);
        assert_eq!(strip.pixels()[8], RED);
        assert_eq!(strip.pixels()[9], RED);
    }

    #[test]
    fn test_fill_first_clamped_to_last_pixel() {
        let mut strip = StripControl::<10>::new(255);
        strip.fill(RED, 100, 5);

        assert_eq!(&strip.pixels()[..9], &[BLACK; 9]);
        assert_eq!(strip.pixels()[9], RED);
    }

    #[test]
    fn test_fill_zero_count_is_noop() {
        let mut strip = StripControl::<10>::new(255);
        strip.fill(RED, 2, 0);
        assert_eq!(strip.pixels(), &[BLACK; 10]);
    }

    #[test]
    fn test_fill_solid() {
        let mut strip = StripControl::<10>::new(255);
        strip.fill_solid(WHITE);
        assert_eq!(strip.pixels(), &[WHITE; 10]);
    }

    #[test]
    fn test_blend_u8_monotonic_upward() {
        let mut current = 0u8;
        let mut previous = current;
        let mut steps = 0;
        while blend_u8_toward(&mut current, 255, 75) {
            assert!(current > previous, "must move strictly toward the target");
            previous = current;
            steps += 1;
            assert!(steps < 256, "must converge in a bounded number of calls");
        }
        assert_eq!(current, 255);
    }

    #[test]
    fn test_blend_u8_monotonic_downward() {
        let mut current = 200u8;
        let mut steps = 0;
        while blend_u8_toward(&mut current, 10, 75) {
            steps += 1;
            assert!(steps < 256);
        }
        assert_eq!(current, 10);
    }

    #[test]
    fn test_blend_u8_idempotent_at_convergence() {
        let mut current = 42u8;
        assert!(!blend_u8_toward(&mut current, 42, 75));
        assert_eq!(current, 42);
        assert!(!blend_u8_toward(&mut current, 42, 255));
        assert_eq!(current, 42);
    }

    #[test]
    fn test_blend_u8_never_overshoots() {
        // One step away at full rate still lands exactly on the target.
        let mut current = 254u8;
        blend_u8_toward(&mut current, 255, 255);
        assert_eq!(current, 255);

        let mut current = 1u8;
        blend_u8_toward(&mut current, 0, 255);
        assert_eq!(current, 0);
    }

    #[test]
    fn test_blend_rgb_converges_from_any_start() {
        let targets = [BLACK, WHITE, RED, Rgb::new(13, 200, 77)];
        let starts = [WHITE, BLACK, Rgb::new(1, 254, 128)];

        for target in targets {
            for start in starts {
                let mut current = start;
                let mut steps = 0;
                while blend_rgb_toward(&mut current, target, 75) {
                    steps += 1;
                    assert!(steps < 256, "{start:?} -> {target:?} did not converge");
                }
                assert_eq!(current, target);
            }
        }
    }

    #[test]
    fn test_blend_rgb_changed_reflects_any_channel() {
        let mut current = Rgb::new(10, 20, 30);
        // Only the blue channel differs.
        assert!(blend_rgb_toward(&mut current, Rgb::new(10, 20, 31), 255));
        assert_eq!(current, Rgb::new(10, 20, 31));
        assert!(!blend_rgb_toward(&mut current, Rgb::new(10, 20, 31), 255));
    }

    #[test]
    fn test_present_scales_by_brightness() {
        let mut strip = StripControl::<4>::new(255);
        strip.fill_solid(Rgb::new(200, 100, 50));
        strip.set_brightness(128);

        let mut driver = CaptureDriver::default();
        strip.present(&mut driver);

        assert_eq!(driver.frames.len(), 1);
        assert_eq!(driver.frames[0], vec![Rgb::new(100, 50, 25); 4]);
        // Stored pixels keep their unscaled values.
        assert_eq!(strip.pixels(), &[Rgb::new(200, 100, 50); 4]);
    }

    #[test]
    fn test_present_full_brightness_passthrough() {
        let mut strip = StripControl::<4>::new(255);
        strip.fill_solid(Rgb::new(200, 100, 50));
        strip.set_brightness(255);

        let mut driver = CaptureDriver::default();
        strip.present(&mut driver);
        assert_eq!(driver.frames[0], vec![Rgb::new(200, 100, 50); 4]);
    }

    #[test]
    fn test_brightness_is_reversible() {
        let mut strip = StripControl::<4>::new(255);
        strip.fill_solid(Rgb::new(200, 100, 50));

        let mut driver = CaptureDriver::default();
        strip.set_brightness(10);
        strip.present(&mut driver);
        strip.set_brightness(255);
        strip.present(&mut driver);

        // Dimming then restoring loses no color data.
        assert_eq!(driver.frames[1], vec![Rgb::new(200, 100, 50); 4]);
    }

    #[test]
    fn test_brightness_clamped_to_cap() {
        let mut strip = StripControl::<4>::new(100);
        strip.set_brightness(255);
        assert_eq!(strip.brightness(), 100);
        strip.set_brightness(40);
        assert_eq!(strip.brightness(), 40);
    }
}
