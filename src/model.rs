use crate::frame::RawFrame;
use crate::reading::Reading;

/// Sign bit of the DHT22 temperature high byte.
const SIGN_BIT: u8 = 0b1000_0000;

/// The sensor variant attached to the data line.
///
/// Both variants share the wire protocol; they differ in how the four data
/// bytes are interpreted and in the scale of the decoded values.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorModel {
    /// DHT11: whole-unit humidity and temperature.
    Dht11,
    /// DHT22 / AM2302: values in tenths, signed temperature.
    Dht22,
}

impl SensorModel {
    /// Shortest interval the sensor should be polled at, in milliseconds.
    ///
    /// The driver does not enforce this; reading faster usually ends in
    /// [`DhtError::NoResponse`](crate::DhtError::NoResponse).
    pub const fn min_interval_ms(self) -> u32 {
        match self {
            SensorModel::Dht11 => 1_000,
            SensorModel::Dht22 => 2_000,
        }
    }

    /// Divisor turning decoded integers into physical units.
    pub const fn scale(self) -> i32 {
        match self {
            SensorModel::Dht11 => 1,
            SensorModel::Dht22 => 10,
        }
    }

    /// Decodes the data bytes of a frame. The checksum is not looked at.
    pub fn decode(self, frame: &RawFrame) -> Reading {
        let [hum_hi, hum_lo, temp_hi, temp_lo, _] = frame.bytes();

        match self {
            SensorModel::Dht11 => {
                // Fractional bytes are always zero on the DHT11.
                let celsius = i32::from(temp_hi);
                Reading {
                    model: self,
                    humidity: i32::from(hum_hi),
                    celsius,
                    fahrenheit: dht11_fahrenheit(celsius),
                }
            }
            SensorModel::Dht22 => {
                let humidity = i32::from(u16::from_be_bytes([hum_hi, hum_lo]));

                let is_temp_negative = (temp_hi & SIGN_BIT) != 0;
                let magnitude = i32::from(u16::from_be_bytes([temp_hi & !SIGN_BIT, temp_lo]));
                let celsius = if is_temp_negative {
                    -magnitude
                } else {
                    magnitude
                };

                Reading {
                    model: self,
                    humidity,
                    celsius,
                    fahrenheit: dht22_fahrenheit(celsius),
                }
            }
        }
    }
}

/// Whole-degree Fahrenheit, rounded by offsetting before a truncating divide.
fn dht11_fahrenheit(celsius: i32) -> i32 {
    (10 * celsius * 9 / 5 + 325) / 10
}

/// Tenths of a degree Fahrenheit from tenths of a degree Celsius.
fn dht22_fahrenheit(celsius_x10: i32) -> i32 {
    (10 * celsius_x10 * 9 / 5 + 3205) / 10
}
