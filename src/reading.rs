use core::fmt;

use crate::model::SensorModel;

/// Reading returned by the sensor.
///
/// Values are integers in the model's native scale: whole units for the
/// DHT11, tenths for the DHT22 (a humidity of `657` means 65.7 %).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    /// Model the frame was decoded for; fixes the scale of the values.
    pub model: SensorModel,
    /// Relative humidity in percent.
    pub humidity: i32,
    /// Temperature in degrees Celsius.
    pub celsius: i32,
    /// Temperature in degrees Fahrenheit.
    pub fahrenheit: i32,
}

impl Reading {
    /// An all-zero reading, used where a read failed and the values carry
    /// no meaning.
    pub const fn zeroed(model: SensorModel) -> Self {
        Reading {
            model,
            humidity: 0,
            celsius: 0,
            fahrenheit: 0,
        }
    }

    /// Relative humidity in percent.
    pub fn humidity_percent(&self) -> f32 {
        self.unscale(self.humidity)
    }

    /// Temperature in degrees Celsius.
    pub fn temperature_celsius(&self) -> f32 {
        self.unscale(self.celsius)
    }

    /// Temperature in degrees Fahrenheit.
    pub fn temperature_fahrenheit(&self) -> f32 {
        self.unscale(self.fahrenheit)
    }

    fn unscale(&self, value: i32) -> f32 {
        value as f32 / self.model.scale() as f32
    }
}

/// Writes a fixed-point value with the model's implied decimal digit.
struct Fixed(i32, SensorModel);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Fixed(value, model) = *self;
        match model {
            SensorModel::Dht11 => write!(f, "{value}"),
            SensorModel::Dht22 => {
                let sign = if value < 0 { "-" } else { "" };
                let abs = value.unsigned_abs();
                write!(f, "{sign}{}.{}", abs / 10, abs % 10)
            }
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} %RH, {} °C, {} °F",
            Fixed(self.humidity, self.model),
            Fixed(self.celsius, self.model),
            Fixed(self.fahrenheit, self.model),
        )
    }
}
