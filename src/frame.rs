use crate::error::DhtError;
use crate::model::SensorModel;
use crate::reading::Reading;

/// Number of bytes the sensor sends per read.
pub const FRAME_LEN: usize = 5;

/// The five bytes received from the sensor in one read cycle:
/// humidity high/low, temperature high/low and the checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawFrame([u8; FRAME_LEN]);

impl RawFrame {
    /// Wraps five received bytes, in wire order.
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        RawFrame(bytes)
    }

    /// The five bytes, in wire order.
    pub const fn bytes(&self) -> [u8; FRAME_LEN] {
        self.0
    }

    /// The checksum byte as transmitted.
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Sum of the four data bytes, modulo 256.
    pub fn computed_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// `true` if the checksum byte matches the data bytes.
    pub fn is_valid(&self) -> bool {
        self.computed_checksum() == self.checksum()
    }

    /// Checks the frame's checksum.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::ChecksumMismatch` if the transmitted checksum does
    /// not equal the sum of the data bytes.
    pub fn validate<E>(&self) -> Result<(), DhtError<E>> {
        let computed = self.computed_checksum();
        if computed != self.checksum() {
            Err(DhtError::ChecksumMismatch {
                expected: self.checksum(),
                computed,
            })
        } else {
            Ok(())
        }
    }

    /// Validates the checksum, then decodes the data bytes for `model`.
    pub fn decode<E>(&self, model: SensorModel) -> Result<Reading, DhtError<E>> {
        self.validate()?;
        Ok(model.decode(self))
    }
}

impl From<[u8; FRAME_LEN]> for RawFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        RawFrame(bytes)
    }
}
