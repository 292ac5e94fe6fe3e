use core::fmt;

/// Possible errors from the DHT driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The sensor did not acknowledge the start request in time.
    NoResponse,
    /// Checksum did not match the received data.
    ChecksumMismatch {
        /// Checksum byte transmitted by the sensor.
        expected: u8,
        /// Sum of the four data bytes, modulo 256.
        computed: u8,
    },
    /// A data pulse did not finish within the configured bit timeout.
    ///
    /// Only returned when [`Timing::bit_timeout_ticks`](crate::Timing::bit_timeout_ticks)
    /// is set.
    MidFrameTimeout,
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> DhtError<E> {
    /// Collapses the error into the sensor's three-way status code.
    ///
    /// Pin failures and mid-frame timeouts both mean the sensor could not be
    /// read, so they are reported as [`ErrorCode::NoResponse`].
    pub fn code(&self) -> ErrorCode {
        match self {
            DhtError::ChecksumMismatch { .. } => ErrorCode::ChecksumMismatch,
            DhtError::NoResponse | DhtError::MidFrameTimeout | DhtError::PinError(_) => {
                ErrorCode::NoResponse
            }
        }
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::NoResponse => f.write_str("no response from the sensor"),
            DhtError::ChecksumMismatch { expected, computed } => write!(
                f,
                "bad checksum from the sensor (expected {expected:#04x}, computed {computed:#04x})"
            ),
            DhtError::MidFrameTimeout => f.write_str("timed out waiting for a data pulse"),
            DhtError::PinError(err) => write!(f, "GPIO pin error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}

/// Status code accompanying every read: 0 = ok, 1 = no response,
/// 2 = bad checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// Frame received and checksum valid.
    Ok = 0,
    /// No acknowledgment from the sensor.
    NoResponse = 1,
    /// Frame received but corrupted.
    ChecksumMismatch = 2,
}

impl ErrorCode {
    /// Returns the code for the outcome of a read.
    pub fn of<T, E>(result: &Result<T, DhtError<E>>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(err) => err.code(),
        }
    }

    /// `true` only for [`ErrorCode::Ok`].
    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> Self {
        code as u8
    }
}
