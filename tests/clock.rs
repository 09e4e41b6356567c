mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_sequencer::Timestamp;

    #[test]
    fn test_elapsed_across_wrap() {
        let before = Timestamp::from_millis(u32::MAX - 4);
        let after = before.wrapping_add_millis(10);
        assert_eq!(after.as_millis(), 5);
        assert_eq!(after.millis_since(before), 10);
        assert_eq!(after.elapsed_since(before), Duration::from_millis(10));
    }

    #[test]
    fn test_from_instant_keeps_low_bits() {
        let instant = Instant::from_millis((1 << 32) + 7);
        assert_eq!(Timestamp::from(instant).as_millis(), 7);
    }
}
