use embedded_hal::delay::DelayNs;

use crate::error::{DhtError, ErrorCode};
use crate::frame::{FRAME_LEN, RawFrame};
use crate::model::SensorModel;
use crate::pin::IoPin;
use crate::reading::Reading;
use crate::timing::Timing;

/// Driver for the DHT11 and DHT22 temperature and humidity sensors.
///
/// The driver owns the data pin for its whole lifetime; `read` takes
/// `&mut self`, so reads on one sensor can never overlap.
pub struct Dht<PIN, D> {
    pin: PIN,
    delay: D,
    model: SensorModel,
    timing: Timing,
}

impl<PIN, DELAY, E> Dht<PIN, DELAY>
where
    PIN: IoPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the driver with the default [`Timing`].
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the sensor's data line.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `model` - Which sensor is attached; fixes how frames are decoded.
    pub fn new(pin: PIN, delay: DELAY, model: SensorModel) -> Self {
        Self::with_timing(pin, delay, model, Timing::default())
    }

    /// Creates a new instance of the driver with custom timing.
    pub fn with_timing(pin: PIN, delay: DELAY, model: SensorModel, timing: Timing) -> Self {
        Dht {
            pin,
            delay,
            model,
            timing,
        }
    }

    /// Creates a driver for a DHT11 with the default [`Timing`].
    pub fn dht11(pin: PIN, delay: DELAY) -> Self {
        Self::new(pin, delay, SensorModel::Dht11)
    }

    /// Creates a driver for a DHT22 with the default [`Timing`].
    pub fn dht22(pin: PIN, delay: DELAY) -> Self {
        Self::new(pin, delay, SensorModel::Dht22)
    }

    /// The sensor model frames are decoded for.
    pub fn model(&self) -> SensorModel {
        self.model
    }

    /// The timing used for every read cycle.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Releases the pin and the delay provider.
    pub fn free(self) -> (PIN, DELAY) {
        (self.pin, self.delay)
    }

    /// Reads a temperature and humidity measurement from the sensor.
    ///
    /// This method performs the complete communication sequence:
    /// sending a start signal, waiting for the sensor's acknowledgment,
    /// reading 5 bytes, validating the checksum, and decoding the result
    /// for the configured [`SensorModel`].
    ///
    /// The caller must leave at least [`SensorModel::min_interval_ms`]
    /// between reads; the driver does not track time between calls.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if a communication or checksum error occurs.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        let frame = self.read_frame()?;
        trace!("raw frame: {}", frame);

        match frame.decode(self.model) {
            Ok(reading) => Ok(reading),
            Err(err) => {
                warn!(
                    "checksum mismatch: received {}, computed {}",
                    frame.checksum(),
                    frame.computed_checksum()
                );
                Err(err)
            }
        }
    }

    /// Like [`read`](Self::read), but reports the outcome as a status code
    /// next to the values. When the code is not [`ErrorCode::Ok`] the values
    /// are all zero and must not be used.
    pub fn read_with_code(&mut self) -> (Reading, ErrorCode) {
        match self.read() {
            Ok(reading) => (reading, ErrorCode::Ok),
            Err(err) => (Reading::zeroed(self.model), err.code()),
        }
    }

    /// Runs one read cycle and returns the received bytes without checking
    /// the checksum.
    pub fn read_frame(&mut self) -> Result<RawFrame, DhtError<E>> {
        self.start()?;

        let mut data = [0; FRAME_LEN];
        for b in data.iter_mut() {
            *b = self.read_byte()?;
        }

        // Idle state between reads is an actively driven high line.
        self.pin.set_output_mode()?;
        self.pin.set_high()?;

        Ok(RawFrame::new(data))
    }

    /// Sends the start signal and waits for the sensor's acknowledgment.
    ///
    /// The line is pulled low long enough to wake the sensor, released,
    /// and then the sensor answers with roughly 80us low followed by
    /// 80us high.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        let timing = self.timing;
        debug!("requesting reading from {}", self.model);

        // MCU sends start request
        self.pin.set_output_mode()?;
        self.pin.set_low()?;
        self.delay.delay_ms(timing.start_low_ms);
        self.pin.set_high()?;
        self.delay.delay_us(timing.start_high_us);
        self.pin.set_input_mode()?;

        let limit = Some(timing.ack_timeout_ticks);
        let acked = Self::count_ticks_while(
            &mut self.delay,
            timing.tick_us,
            limit,
            DhtError::NoResponse,
            || self.pin.is_low(),
        )
        .and_then(|_| {
            Self::count_ticks_while(
                &mut self.delay,
                timing.tick_us,
                limit,
                DhtError::NoResponse,
                || self.pin.is_high(),
            )
        });

        if let Err(DhtError::NoResponse) = acked {
            warn!("no acknowledgment from the sensor");
        }
        acked.map(|_| ())
    }

    /// Reads one byte (8 bits) from the sensor, most significant bit first.
    fn read_byte(&mut self) -> Result<u8, DhtError<E>> {
        let mut byte: u8 = 0;

        for _ in 0..8 {
            byte = (byte << 1) | u8::from(self.read_bit()?);
        }

        Ok(byte)
    }

    /// Reads a single bit from the sensor.
    ///
    /// Every bit starts with the line low; the length of the following high
    /// pulse carries the value. A pulse longer than
    /// [`Timing::bit_threshold_ticks`] is a 1.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        let timing = self.timing;
        let limit = timing.bit_timeout_ticks;

        // Wait for the start of the data pulse
        match limit {
            None => while self.pin.is_low()? {},
            Some(_) => {
                Self::count_ticks_while(
                    &mut self.delay,
                    timing.tick_us,
                    limit,
                    DhtError::MidFrameTimeout,
                    || self.pin.is_low(),
                )?;
            }
        }

        let high_ticks = Self::count_ticks_while(
            &mut self.delay,
            timing.tick_us,
            limit,
            DhtError::MidFrameTimeout,
            || self.pin.is_high(),
        )?;

        Ok(high_ticks > timing.bit_threshold_ticks)
    }

    /// Counts ticks for as long as `condition` holds.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider
    /// * `tick_us` - Length of one tick
    /// * `limit` - Most ticks allowed; `None` waits forever
    /// * `on_timeout` - Error returned once `limit` is exceeded
    /// * `condition` - Closure that returns true while the line is in the
    ///   state being timed
    fn count_ticks_while<F>(
        delay: &mut DELAY,
        tick_us: u32,
        limit: Option<u16>,
        on_timeout: DhtError<E>,
        mut condition: F,
    ) -> Result<u16, DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        let mut ticks: u16 = 0;
        while condition()? {
            delay.delay_us(tick_us);
            ticks = ticks.saturating_add(1);
            if limit.is_some_and(|limit| ticks > limit) {
                return Err(on_timeout);
            }
        }
        Ok(ticks)
    }
}
