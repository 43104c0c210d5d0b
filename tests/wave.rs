mod tests {
    use embassy_time::Instant;
    use ledbox_anim::animation::{Animation, WaveAnimation};
    use ledbox_anim::{Rgb, StripControl};

    fn run_schedule<const N: usize>(schedule: &[u64]) -> Vec<Rgb> {
        let mut strip = StripControl::<N>::new(255);
        let mut anim = WaveAnimation::new();
        anim.begin(&mut strip);
        for &ms in schedule {
            anim.draw(Instant::from_millis(ms), &mut strip);
        }
        strip.pixels().to_vec()
    }

    #[test]
    fn test_draw_is_deterministic_for_identical_deltas() {
        let schedule = [0u64, 16, 32, 48, 64, 80, 500, 516];
        let first = run_schedule::<60>(&schedule);
        let second = run_schedule::<60>(&schedule);
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_depends_only_on_deltas_not_absolute_time() {
        // Same delta sequence from two different epochs renders the same
        // pixels: the animation tracks elapsed time, not the wall clock.
        let from_zero = run_schedule::<60>(&[0, 16, 32, 48]);
        let offset: Vec<u64> = [0u64, 16, 32, 48].iter().map(|ms| ms + 100_000).collect();
        let from_later = run_schedule::<60>(&offset);
        assert_eq!(from_zero, from_later);
    }

    #[test]
    fn test_output_evolves_over_time() {
        let early = run_schedule::<60>(&[0, 16]);
        let late = run_schedule::<60>(&[0, 16, 2000, 2016, 4000, 4016]);
        assert_ne!(early, late);
    }

    #[test]
    fn test_no_pixel_goes_fully_black() {
        // The deepen pass floors every channel.
        for schedule in [&[0u64][..], &[0, 16, 32][..], &[0, 1000, 9000][..]] {
            let pixels = run_schedule::<60>(schedule);
            for pixel in pixels {
                assert!(pixel.r >= 2);
                assert!(pixel.g >= 5);
                assert!(pixel.b >= 7);
            }
        }
    }

    #[test]
    fn test_begin_clears_to_base_color() {
        let mut strip = StripControl::<8>::new(255);
        strip.fill_solid(Rgb::new(255, 255, 255));

        let mut anim = WaveAnimation::new();
        anim.begin(&mut strip);
        assert_eq!(strip.pixels(), &[Rgb::new(2, 6, 10); 8]);
    }

    #[test]
    fn test_layers_desynchronize_across_the_strip() {
        // Four phase-shifted layers should not collapse into a uniform
        // color across a long strip.
        let pixels = run_schedule::<120>(&[0, 16, 32, 48, 64]);
        let first = pixels[0];
        assert!(pixels.iter().any(|p| *p != first));
    }
}
