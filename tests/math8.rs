mod tests {
    use ledbox_anim::math8::{blend8, qadd8, scale8, scale8_video, sin8, sin16};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_nonzero_guarantee() {
        // A nonzero input with a nonzero scale never rounds to zero.
        assert_eq!(scale8_video(1, 75), 1);
        assert_eq!(scale8_video(3, 1), 1);
        for value in 1..=255u8 {
            for scale in [1u8, 10, 75, 200, 255] {
                assert_ne!(scale8_video(value, scale), 0);
            }
        }
    }

    #[test]
    fn test_scale8_video_zero_stays_zero() {
        assert_eq!(scale8_video(0, 255), 0);
        assert_eq!(scale8_video(255, 0), 0);
        assert_eq!(scale8_video(0, 0), 0);
    }

    #[test]
    fn test_scale8_video_values() {
        assert_eq!(scale8_video(255, 255), 255);
        assert_eq!(scale8_video(200, 128), 101);
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(100, 100), 200);
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(255, 255), 255);
        assert_eq!(qadd8(0, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_sin16_quadrants() {
        assert_eq!(sin16(0), 0);
        assert_eq!(sin16(16384), 32645);
        assert_eq!(sin16(32768), 0);
        assert_eq!(sin16(49152), -32645);
    }

    #[test]
    fn test_sin16_symmetry() {
        for theta in (0..=u16::MAX).step_by(257) {
            let y = sin16(theta);
            assert_eq!(sin16(theta.wrapping_add(32768)), -y);
            assert!((-32645..=32645).contains(&y));
        }
    }

    #[test]
    fn test_sin8_range() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 0);
    }
}
