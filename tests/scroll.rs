mod tests {
    use myrtio_light_sequencer::mode::{Mode, ScrollText, ScrollTextMode};
    use myrtio_light_sequencer::{BUILTIN_FONT, Bitmask, Font, LightCount};

    /// 'A' is three columns wide, 'B' two, everything else blank
    struct TestFont;

    static TEST_FONT: TestFont = TestFont;

    impl Font for TestFont {
        fn glyph_width(&self, ch: u8) -> u8 {
            match ch {
                b'A' => 3,
                b'B' => 2,
                _ => 0,
            }
        }

        fn glyph_column(&self, ch: u8, column: u8) -> Bitmask {
            let columns: &[Bitmask] = match ch {
                b'A' => &[0b001, 0b010, 0b100],
                b'B' => &[0b011, 0b110],
                _ => &[],
            };
            columns.get(usize::from(column)).copied().unwrap_or(0)
        }
    }

    const EIGHT: LightCount = LightCount::new(8);

    fn run(mode: &mut ScrollTextMode, lights: LightCount, ticks: u32) -> Vec<Bitmask> {
        (0..ticks).map(|tick| mode.tick(tick, lights)).collect()
    }

    #[test]
    fn test_scroll_walks_text_once() {
        let mut mode = ScrollTextMode::new(ScrollText::truncated("AB"), &TEST_FONT);
        let masks = run(&mut mode, EIGHT, 12);
        assert_eq!(
            masks,
            vec![0b001, 0b010, 0b100, 0, 0b011, 0b110, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(mode.state().current_char, 0);

        // Still dark much later, 'A' is never revisited
        assert!(run(&mut mode, EIGHT, 50).iter().all(|&mask| mask == 0));
    }

    #[test]
    fn test_scroll_reset_restarts() {
        let mut mode = ScrollTextMode::new(ScrollText::truncated("AB"), &TEST_FONT);
        run(&mut mode, EIGHT, 20);
        mode.reset();
        assert_eq!(mode.state().char_index, 0);
        assert_eq!(mode.state().current_char, b'A');
        assert_eq!(mode.state().char_width, 4);
        assert_eq!(mode.state().column, 0);
        assert_eq!(run(&mut mode, EIGHT, 2), vec![0b001, 0b010]);
    }

    #[test]
    fn test_scroll_centers_glyph() {
        let mut mode = ScrollTextMode::new(ScrollText::truncated("B"), &TEST_FONT);
        let masks = run(&mut mode, LightCount::new(12), 3);
        assert_eq!(masks, vec![0b01100, 0b11000, 0]);
    }

    #[test]
    fn test_scroll_empty_text_is_dark() {
        let mut mode = ScrollTextMode::new(ScrollText::truncated(""), &TEST_FONT);
        assert!(run(&mut mode, EIGHT, 5).iter().all(|&mask| mask == 0));
    }

    #[test]
    fn test_scroll_text_truncated() {
        let long = "A".repeat(150);
        let text = ScrollText::truncated(&long);
        assert_eq!(text.len(), 100);
        assert_eq!(text.char_at(99), b'A');
        assert_eq!(text.char_at(100), 0);

        let text = ScrollText::truncated("AB\0CD");
        assert_eq!(text.as_bytes(), b"AB");
    }

    #[test]
    fn test_scroll_full_buffer_ends_dark() {
        let long = "A".repeat(150);
        let mut mode = ScrollTextMode::new(ScrollText::truncated(&long), &TEST_FONT);
        let masks = run(&mut mode, EIGHT, 100 * 4 + 10);
        assert_eq!(masks[399], 0);
        assert_eq!(masks[396], 0b001);
        assert!(masks[400..].iter().all(|&mask| mask == 0));
    }

    #[test]
    fn test_scroll_set_text_rewinds() {
        let mut mode = ScrollTextMode::new(ScrollText::truncated("A"), &TEST_FONT);
        run(&mut mode, EIGHT, 10);
        mode.set_text("B");
        assert_eq!(mode.text().as_bytes(), b"B");
        assert_eq!(run(&mut mode, EIGHT, 2), vec![0b011, 0b110]);
    }

    #[test]
    fn test_scroll_skips_zero_width_glyphs() {
        // Unknown characters have width 0 here, only the spacing column shows
        let mut mode = ScrollTextMode::new(ScrollText::truncated("?B"), &TEST_FONT);
        assert_eq!(run(&mut mode, EIGHT, 4), vec![0, 0b011, 0b110, 0]);
    }

    #[test]
    fn test_builtin_font() {
        assert_eq!(BUILTIN_FONT.glyph_width(b'A'), 5);
        assert_eq!(BUILTIN_FONT.glyph_width(b'I'), 3);
        assert_eq!(BUILTIN_FONT.glyph_column(b'a', 0), BUILTIN_FONT.glyph_column(b'A', 0));
        assert_eq!(BUILTIN_FONT.glyph_column(b'H', 2), 0x08);
        assert_eq!(BUILTIN_FONT.glyph_column(b'H', 5), 0);

        // Unknown characters are blank but keep their place
        assert_eq!(BUILTIN_FONT.glyph_width(b'~'), 3);
        assert!((0..3).all(|column| BUILTIN_FONT.glyph_column(b'~', column) == 0));
    }

    #[test]
    fn test_builtin_font_fits_height() {
        for ch in 0..=u8::MAX {
            for column in 0..BUILTIN_FONT.glyph_width(ch) {
                assert!(BUILTIN_FONT.glyph_column(ch, column) < 1 << 8);
            }
        }
    }
}
