/// Timing parameters of one read cycle.
///
/// Durations measured while receiving are counted in ticks of
/// [`tick_us`](Self::tick_us) microseconds. The defaults are tuned for a
/// 10 µs tick; a different tick needs the tick counts rescaled to match.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long the line is held low to request a reading, in ms.
    pub start_low_ms: u32,
    /// How long the line is released high before listening, in µs.
    pub start_high_us: u32,
    /// Sampling resolution, in µs.
    pub tick_us: u32,
    /// Ticks each half of the acknowledgment may last before the sensor is
    /// considered absent.
    pub ack_timeout_ticks: u16,
    /// High pulses longer than this many ticks are a 1 bit. A pulse of
    /// exactly this length is a 0 bit.
    pub bit_threshold_ticks: u16,
    /// Upper bound on each phase of a data bit, in ticks.
    ///
    /// `None` waits indefinitely, so a line that stops toggling in the middle
    /// of a frame blocks `read` forever.
    pub bit_timeout_ticks: Option<u16>,
}

impl Timing {
    /// Timing for a 10 µs tick: 18 ms request, 40 µs release, ack bound of
    /// 9 ticks, bit threshold of 4 ticks, no bit timeout.
    pub const fn new() -> Self {
        Timing {
            start_low_ms: 18,
            start_high_us: 40,
            tick_us: 10,
            ack_timeout_ticks: 9,
            bit_threshold_ticks: 4,
            bit_timeout_ticks: None,
        }
    }

    /// Sets how long the request holds the line low.
    pub const fn with_start_low_ms(mut self, ms: u32) -> Self {
        self.start_low_ms = ms;
        self
    }

    /// Sets how long the line is released before listening.
    pub const fn with_start_high_us(mut self, us: u32) -> Self {
        self.start_high_us = us;
        self
    }

    /// Changes the sampling resolution together with the thresholds that
    /// depend on it.
    pub const fn with_tick(
        mut self,
        tick_us: u32,
        ack_timeout_ticks: u16,
        bit_threshold_ticks: u16,
    ) -> Self {
        self.tick_us = tick_us;
        self.ack_timeout_ticks = ack_timeout_ticks;
        self.bit_threshold_ticks = bit_threshold_ticks;
        self
    }

    /// Bounds the wait for each data pulse, turning a stuck line into
    /// [`DhtError::MidFrameTimeout`](crate::DhtError::MidFrameTimeout).
    pub const fn with_bit_timeout_ticks(mut self, ticks: u16) -> Self {
        self.bit_timeout_ticks = Some(ticks);
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::new()
    }
}
