pub mod commands;
pub mod display_actions;
pub mod ssd1803a;

use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c};

use crate::{CharacterDisplayError, DeviceSetupConfig, DisplayVariant};

/// Trait for device hardware implementations. Embodies the bus framing and power up
/// behavior of the controller IC, leaving the command sequencing to the display actions.
pub trait DeviceHardwareTrait<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    fn new(config: DeviceSetupConfig<I2C, DELAY, RST>) -> Self;

    /// returns the default I2C address for the device
    fn default_i2c_address() -> u8;

    /// returns the display variant the device was initialized for
    fn variant(&self) -> DisplayVariant;

    /// returns configured i2c address
    fn i2c_address(&self) -> u8;

    /// returns the i2c object. mostly used for testing
    fn i2c(&mut self) -> &mut I2C;

    /// Pulses the reset line, if one is wired. Does nothing otherwise.
    fn reset(&mut self) -> Result<(), CharacterDisplayError<I2C>>;

    /// initializes the device hardware for the given variant. On `Ok`, returns the initial
    /// configuration of the device as a tuple of (display_control, entry_mode).
    fn init(
        &mut self,
        variant: DisplayVariant,
    ) -> Result<(u8, u8), CharacterDisplayError<I2C>>;

    /// write one or more bytes to the device in a single framed transaction.
    /// `rs_setting` is `true` for data and `false` for commands.
    fn write_bytes(
        &mut self,
        rs_setting: bool,
        data: &[u8],
    ) -> Result<(), CharacterDisplayError<I2C>>;

    /// gives back the bus, delay and reset pin
    fn release(self) -> (I2C, DELAY, Option<RST>);
}
