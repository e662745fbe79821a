use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c};

use crate::{
    control_byte::ControlByte,
    driver::DeviceHardwareTrait,
    CharacterDisplayError, DeviceSetupConfig, DisplayVariant,
};

use crate::driver::commands::{
    LCD_CMD_4LINES, LCD_CMD_BOTTOM_VIEW, LCD_CMD_BS0_1, LCD_CMD_BS1_1, LCD_CMD_CLEARDISPLAY,
    LCD_CMD_DISPLAYCONTROL, LCD_CMD_ENTRYMODESET, LCD_CMD_FUNCTIONSET_RE0_IS0,
    LCD_CMD_FUNCTIONSET_RE0_IS1, LCD_CMD_FUNCTIONSET_RE1_IS0, LCD_FLAG_DISPLAYON,
    LCD_FLAG_ENTRYLEFT,
};

pub const I2C_ADDRESS_SA0_LOW: u8 = 0x3C; //  SA0 tied to VSS
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x3D; //  SA0 tied to VDD

const MAX_PAYLOAD_SIZE: usize = 128; // the full DDRAM
const MAX_BUFFER_SIZE: usize = MAX_PAYLOAD_SIZE + 1; // payload + 1 control byte.

// reset pulse timing, in ms
const RESET_HOLD_HIGH_MS: u32 = 50;
const RESET_PULSE_LOW_MS: u32 = 4;
const RESET_RECOVERY_MS: u32 = 20;

/// No reset line is wired to the display. Used as the reset pin type of a driver created
/// without one; it is never driven.
pub struct NoResetPin;

impl embedded_hal::digital::ErrorType for NoResetPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// SSD1803A device driver implementation
pub struct SSD1803A<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    buffer: [u8; MAX_BUFFER_SIZE], // buffer for I2C data
    config: DeviceSetupConfig<I2C, DELAY, RST>,
}

impl<I2C, DELAY, RST> DeviceHardwareTrait<I2C, DELAY, RST> for SSD1803A<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    fn new(config: DeviceSetupConfig<I2C, DELAY, RST>) -> Self {
        SSD1803A {
            buffer: [0; MAX_BUFFER_SIZE],
            config,
        }
    }

    fn default_i2c_address() -> u8 {
        I2C_ADDRESS_SA0_LOW
    }

    fn variant(&self) -> DisplayVariant {
        self.config.variant
    }

    fn i2c_address(&self) -> u8 {
        self.config.address
    }

    fn i2c(&mut self) -> &mut I2C {
        &mut self.config.i2c
    }

    fn reset(&mut self) -> Result<(), CharacterDisplayError<I2C>> {
        let Some(pin) = self.config.reset.as_mut() else {
            return Ok(());
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("Pulsing SSD1803A reset line");
        pin.set_high().map_err(|_| CharacterDisplayError::ResetPinError)?;
        self.config.delay.delay_ms(RESET_HOLD_HIGH_MS);
        pin.set_low().map_err(|_| CharacterDisplayError::ResetPinError)?;
        self.config.delay.delay_ms(RESET_PULSE_LOW_MS);
        pin.set_high().map_err(|_| CharacterDisplayError::ResetPinError)?;
        self.config.delay.delay_ms(RESET_RECOVERY_MS);
        Ok(())
    }

    fn init(
        &mut self,
        variant: DisplayVariant,
    ) -> Result<(u8, u8), CharacterDisplayError<I2C>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Initializing SSD1803A for {}", variant);
        self.config.variant = variant;
        self.reset()?;

        // extended instruction set: 4 line mode, bottom view, bias BS1
        self.write_bytes(false, &[LCD_CMD_FUNCTIONSET_RE1_IS0])?;
        self.write_bytes(false, &[LCD_CMD_4LINES])?;
        self.write_bytes(false, &[LCD_CMD_BOTTOM_VIEW])?;
        self.write_bytes(false, &[LCD_CMD_BS1_1])?;

        // special register set: bias BS0, then the glass specific analog settings
        self.write_bytes(false, &[LCD_CMD_FUNCTIONSET_RE0_IS1])?;
        self.write_bytes(false, &[LCD_CMD_BS0_1])?;
        self.write_bytes(false, &[variant.follower_control()])?;
        self.write_bytes(false, &[variant.power_control()])?;
        self.write_bytes(false, &[variant.default_contrast()])?;

        // return to the default bank
        self.write_bytes(false, &[LCD_CMD_FUNCTIONSET_RE0_IS0])?;

        // display on, cursor off, blink off
        let display_control: u8 = LCD_FLAG_DISPLAYON;
        self.write_bytes(false, &[LCD_CMD_DISPLAYCONTROL | display_control])?;

        self.write_bytes(false, &[LCD_CMD_CLEARDISPLAY])?;

        let entry_mode: u8 = LCD_FLAG_ENTRYLEFT;
        self.write_bytes(false, &[LCD_CMD_ENTRYMODESET | entry_mode])?;

        Ok((display_control, entry_mode))
    }

    fn write_bytes(
        &mut self,
        rs_setting: bool,
        data: &[u8],
    ) -> Result<(), CharacterDisplayError<I2C>> {
        let control_byte = ControlByte::for_stream(rs_setting).bits();
        if data.is_empty() {
            // an empty payload still goes out as a lone control byte
            self.buffer[0] = control_byte;
            return self
                .config
                .i2c
                .write(self.config.address, &self.buffer[..1])
                .map_err(CharacterDisplayError::I2cError);
        }
        for chunk in data.chunks(MAX_PAYLOAD_SIZE) {
            self.buffer[0] = control_byte;
            self.buffer[1..=chunk.len()].copy_from_slice(chunk);
            self.config
                .i2c
                .write(self.config.address, &self.buffer[..=chunk.len()])
                .map_err(CharacterDisplayError::I2cError)?;
        }
        Ok(())
    }

    fn release(self) -> (I2C, DELAY, Option<RST>) {
        (self.config.i2c, self.config.delay, self.config.reset)
    }
}
