mod tests {
    use chaselight::{
        ChaseRunner, DelayNs, Direction, LEVEL_QUIET, LineTiming, OutputPort, PALETTE,
        SampleSource, SYMBOL_BUFFER_LEN, Transmitter,
    };

    #[derive(Default)]
    struct RecordingPort {
        writes: Vec<u8>,
    }

    impl OutputPort for RecordingPort {
        fn write(&mut self, code: u8) {
            self.writes.push(code);
        }
    }

    /// Scripted stand-in for the continuously sampling ADC
    struct FixedSample(u16);

    impl SampleSource for FixedSample {
        fn read(&mut self) -> u16 {
            self.0
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn runner(sample: u16) -> ChaseRunner<RecordingPort, FixedSample, NoopDelay> {
        let tx = Transmitter::new(RecordingPort::default(), LineTiming::new(0, 0));
        ChaseRunner::new(tx, FixedSample(sample), NoopDelay)
    }

    #[test]
    fn test_tick_returns_sample_as_delay() {
        let mut runner = runner(42);
        assert_eq!(runner.tick(), 42);
    }

    #[test]
    fn test_tick_transmits_one_frame() {
        let mut runner = runner(0);
        runner.tick();

        let writes = &runner.transmitter().port().writes;
        assert_eq!(writes.len(), SYMBOL_BUFFER_LEN + 2);
        assert_eq!(writes[0], LEVEL_QUIET);
        assert_eq!(*writes.last().unwrap(), LEVEL_QUIET);
    }

    #[test]
    fn test_tick_advances_animation_before_encoding() {
        let mut runner = runner(0);
        runner.tick();

        // The first frame lights pixel 0 with palette entry 0, and the
        // transmitted symbols reflect the post-advance store.
        assert_eq!(runner.animation().step(), 1);
        assert_eq!(runner.animation().direction(), Direction::Forward);
        assert_eq!(runner.pixels().as_slice()[0], PALETTE[0]);

        let writes = runner.transmitter().port().writes.clone();
        let mut encoder = chaselight::FrameEncoder::new();
        let expected = encoder.encode(runner.pixels());
        assert_eq!(&writes[1..=SYMBOL_BUFFER_LEN], expected);
    }

    #[test]
    fn test_every_tick_retransmits_in_full() {
        let mut runner = runner(7);
        for frames in 1..=5 {
            runner.tick();
            let writes = &runner.transmitter().port().writes;
            assert_eq!(writes.len(), frames * (SYMBOL_BUFFER_LEN + 2));
        }
    }
}
