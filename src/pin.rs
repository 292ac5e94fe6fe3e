use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// A GPIO pin that can be switched between driving and sampling the data line.
///
/// `embedded-hal` has no trait for changing pin direction, so the driver asks
/// for this one on top of [`InputPin`] and [`OutputPin`]. Both methods default
/// to doing nothing, which is correct for open-drain pins with a pull-up:
/// setting the output high releases the line and the sensor can pull it low.
pub trait IoPin: InputPin + OutputPin {
    /// Stops driving the line so the sensor can answer.
    fn set_input_mode(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Takes control of the line again.
    fn set_output_mode(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Adapter for open-drain pins that implement the `embedded-hal` digital
/// traits but not [`IoPin`].
#[derive(Debug)]
pub struct OpenDrain<P>(pub P);

impl<P> OpenDrain<P> {
    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: ErrorType> ErrorType for OpenDrain<P> {
    type Error = P::Error;
}

impl<P: InputPin> InputPin for OpenDrain<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.0.is_low()
    }
}

impl<P: OutputPin> OutputPin for OpenDrain<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }
}

impl<P: InputPin + OutputPin> IoPin for OpenDrain<P> {}
