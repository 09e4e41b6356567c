mod tests {
    use embassy_time::Duration;
    use myrtio_light_sequencer::{
        ButtonId, ButtonInput, InputDebouncer, InputTimings, KeyEvent, Level, Timestamp,
    };

    #[derive(Default)]
    struct Buttons {
        levels: [Level; 3],
    }

    impl Buttons {
        fn set(&mut self, id: ButtonId, level: Level) {
            self.levels[id.index()] = level;
        }
    }

    impl ButtonInput for Buttons {
        fn read(&mut self, id: ButtonId) -> Level {
            self.levels[id.index()]
        }
    }

    fn at(ms: u32) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    fn event(button: ButtonId, level: Level, repeat_count: u16) -> KeyEvent {
        KeyEvent {
            button,
            level,
            repeat_count,
        }
    }

    #[test]
    fn test_press_reported_once() {
        let mut debouncer = InputDebouncer::default();
        let mut buttons = Buttons::default();

        assert!(debouncer.poll(&mut buttons, at(100)).is_empty());

        buttons.set(ButtonId::Faster, Level::High);
        let events = debouncer.poll(&mut buttons, at(110));
        assert_eq!(events.as_slice(), &[event(ButtonId::Faster, Level::High, 0)]);
        assert_eq!(debouncer.level(ButtonId::Faster), Level::High);

        for ms in 111..300 {
            assert!(debouncer.poll(&mut buttons, at(ms)).is_empty());
        }
    }

    #[test]
    fn test_bounce_inside_window_ignored() {
        let mut debouncer = InputDebouncer::default();
        let mut buttons = Buttons::default();

        buttons.set(ButtonId::Slower, Level::High);
        assert_eq!(debouncer.poll(&mut buttons, at(100)).len(), 1);

        // Contact bounce right after the press
        buttons.set(ButtonId::Slower, Level::Low);
        assert!(debouncer.poll(&mut buttons, at(101)).is_empty());
        buttons.set(ButtonId::Slower, Level::High);
        assert!(debouncer.poll(&mut buttons, at(102)).is_empty());
        buttons.set(ButtonId::Slower, Level::Low);
        assert!(debouncer.poll(&mut buttons, at(104)).is_empty());

        // Window over: the settled level is reported exactly once
        let events = debouncer.poll(&mut buttons, at(105));
        assert_eq!(events.as_slice(), &[event(ButtonId::Slower, Level::Low, 0)]);
        assert!(debouncer.poll(&mut buttons, at(106)).is_empty());
    }

    #[test]
    fn test_held_button_repeats_periodically() {
        let mut debouncer = InputDebouncer::default();
        let mut buttons = Buttons::default();
        buttons.set(ButtonId::Mode, Level::High);

        let mut seen = Vec::new();
        for ms in 100..=700 {
            for e in debouncer.poll(&mut buttons, at(ms)) {
                seen.push((ms, e.repeat_count));
            }
        }
        assert_eq!(seen, vec![(100, 0), (300, 1), (500, 2), (700, 3)]);

        buttons.set(ButtonId::Mode, Level::Low);
        let events = debouncer.poll(&mut buttons, at(750));
        assert_eq!(events.as_slice(), &[event(ButtonId::Mode, Level::Low, 0)]);

        // Released buttons never repeat
        for ms in 751..1500 {
            assert!(debouncer.poll(&mut buttons, at(ms)).is_empty());
        }

        // Repeat count starts over on the next press
        buttons.set(ButtonId::Mode, Level::High);
        let events = debouncer.poll(&mut buttons, at(1500));
        assert_eq!(events.as_slice(), &[event(ButtonId::Mode, Level::High, 0)]);
    }

    #[test]
    fn test_events_in_button_order() {
        let mut debouncer = InputDebouncer::default();
        let mut buttons = Buttons::default();
        buttons.set(ButtonId::Faster, Level::High);
        buttons.set(ButtonId::Slower, Level::High);
        buttons.set(ButtonId::Mode, Level::High);

        let buttons_seen: Vec<ButtonId> = debouncer
            .poll(&mut buttons, at(50))
            .iter()
            .map(|e| e.button)
            .collect();
        assert_eq!(
            buttons_seen,
            vec![ButtonId::Slower, ButtonId::Mode, ButtonId::Faster]
        );
    }

    #[test]
    fn test_clock_wrap_does_not_fake_repeat() {
        let mut debouncer = InputDebouncer::default();
        let mut buttons = Buttons::default();
        let start = Timestamp::from_millis(u32::MAX - 50);

        buttons.set(ButtonId::Faster, Level::High);
        assert_eq!(debouncer.poll(&mut buttons, start).len(), 1);

        // 100 ms later, past the counter wrap
        assert!(debouncer.poll(&mut buttons, start.wrapping_add_millis(100)).is_empty());

        let events = debouncer.poll(&mut buttons, start.wrapping_add_millis(200));
        assert_eq!(events.as_slice(), &[event(ButtonId::Faster, Level::High, 1)]);
    }

    #[test]
    fn test_custom_timings() {
        let mut debouncer = InputDebouncer::new(InputTimings {
            debounce: Duration::from_millis(20),
            repeat: Duration::from_millis(50),
        });
        let mut buttons = Buttons::default();
        buttons.set(ButtonId::Slower, Level::High);

        assert_eq!(debouncer.poll(&mut buttons, at(100)).len(), 1);
        buttons.set(ButtonId::Slower, Level::Low);
        assert!(debouncer.poll(&mut buttons, at(119)).is_empty());
        assert_eq!(debouncer.poll(&mut buttons, at(120)).len(), 1);

        buttons.set(ButtonId::Slower, Level::High);
        assert_eq!(debouncer.poll(&mut buttons, at(140)).len(), 1);
        let events = debouncer.poll(&mut buttons, at(190));
        assert_eq!(events.as_slice(), &[event(ButtonId::Slower, Level::High, 1)]);
    }
}
