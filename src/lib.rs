//! This Rust `embedded-hal`-based library controls character displays built on the
//! [SSD1803A](https://www.lcd-module.de/fileadmin/eng/pdf/zubehoer/SSD1803A_2_0.pdf) controller over I2C
//! in an embedded, `no_std` environment. The Electronic Assembly display modules that use this controller
//! are supported:
//!
//! - **EA DOGM204** - 20x4 characters
//! - **EA DOGS164** - 16x4 characters
//! - **EA DOGS104** - 10x4 characters
//!
//! The SSD1803A exposes more settings than fit in its instruction space, so contrast, view orientation,
//! double height line modes and the character ROM live in alternate register banks. This driver switches
//! to the right bank for each setting and returns to the default bank afterwards, so ordinary text writes
//! always work.
//!
//! Key features include:
//! - Convenient high-level API for controlling the display
//! - Top view (180 degree rotated) orientation
//! - Software contrast control
//! - 3 and 2 line double height modes on the DOGS164 and DOGS104
//! - Character ROM A, B and C selection
//! - Support for custom characters
//! - `core::fmt::Write` implementation for easy use with the `write!` macro
//! - Compatible with the `embedded-hal` traits v1.0 and later
//! - Optional support for the `defmt` and `ufmt` logging frameworks
//!
//! ## Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! ssd1803a-i2c = { version = "0.1", features = ["defmt"] }
//! ```
//! The `features = ["defmt"]` line is optional and enables the `defmt` feature, which traces the commands
//! the driver issues and allows the library's errors to be used with the `defmt` logging framework. Another
//! optional feature is `features = ["ufmt"]`, which allows the `uwriteln!` and `uwrite!` macros to be used.
//! The `one-based-positions` feature makes rows and columns start at 1 instead of 0.
//!
//! Create the display object. The I2C address depends on the SA0 strap of the module:
//! ```rust
//! use ssd1803a_i2c::{DisplayVariant, Ssd1803a, I2C_ADDRESS_SA0_HIGH};
//!
//! // board setup
//! let i2c = ...; // I2C peripheral
//! let delay = ...; // DelayNs implementation
//!
//! // SA0 tied to VSS, no reset line
//! let mut lcd = Ssd1803a::new(i2c, delay);
//! // SA0 tied to VDD, reset line wired to a GPIO
//! let mut lcd = Ssd1803a::new_with_reset_pin(i2c, I2C_ADDRESS_SA0_HIGH, reset_pin, delay);
//! ```
//! Initialize the display for the module you are using:
//! ```rust
//! if let Err(e) = lcd.init(DisplayVariant::Dogs164) {
//!    panic!("Error initializing LCD: {}", e);
//! }
//! ```
//! Use the display:
//! ```rust
//! use ssd1803a_i2c::DisplayMode;
//!
//! lcd.set_mode(DisplayMode::ViewTop)?.set_contrast(40)?.locate(1, 2)?;
//! lcd.print("Hello, world!")?;
//! // can also use the `core::fmt::write!` macro
//! use core::fmt::Write;
//!
//! write!(lcd, "Hello, world!")?;
//! ```
//!
//! ### Errors and validation
//! The SSD1803A never acknowledges a setting, so by default the driver behaves like the controller does:
//! out of range rows and columns produce whatever DDRAM address they add up to, custom character slots
//! are masked to 0..=7 and line modes the module does not have are ignored. `set_strict_validation(true)`
//! turns these cases into errors. Errors reported by the I2C bus or the reset pin are always returned.
//!
//! ### Sharing
//! The active register bank is global state of the controller. A display must be driven from one place
//! at a time; wrap it in a mutex if several tasks need it.
//!
#![no_std]
#![allow(non_camel_case_types)]
use core::fmt::Display;

use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c};

mod control_byte;
mod display_mode;
mod display_variant;
mod driver;

use driver::{display_actions::Ssd1803aDisplayActions, ssd1803a::SSD1803A, DeviceHardwareTrait};

pub use display_mode::DisplayMode;
pub use display_variant::DisplayVariant;
pub use driver::display_actions::POSITION_OFFSET;
pub use driver::ssd1803a::{NoResetPin, I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW};

#[derive(Debug, PartialEq, Copy, Clone)]
/// Errors that can occur when using the display
pub enum CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    /// I2C error returned from the underlying I2C implementation
    I2cError(I2C::Error),
    /// The reset pin could not be driven
    ResetPinError,
    /// Formatting error
    FormattingError(core::fmt::Error),
    /// Row is out of range. Strict validation only.
    RowOutOfRange,
    /// Column is out of range. Strict validation only.
    ColumnOutOfRange,
    /// Custom character location is above 7. Strict validation only.
    GlyphSlotOutOfRange,
    /// Contrast is above 63. Strict validation only.
    ContrastOutOfRange,
    /// The display variant does not support the requested mode. Strict validation only.
    UnsupportedDisplayType,
    /// A value was given for a mode that takes none. Strict validation only.
    ValueNotApplicable,
    /// The display was used before `init`. Strict validation only.
    NotInitialized,
}

impl<I2C> From<core::fmt::Error> for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn from(err: core::fmt::Error) -> Self {
        CharacterDisplayError::FormattingError(err)
    }
}

impl<I2C> From<&CharacterDisplayError<I2C>> for &'static str
where
    I2C: i2c::I2c,
{
    fn from(err: &CharacterDisplayError<I2C>) -> Self {
        match err {
            CharacterDisplayError::I2cError(_) => "I2C error",
            CharacterDisplayError::ResetPinError => "Reset pin error",
            CharacterDisplayError::FormattingError(_) => "Formatting error",
            CharacterDisplayError::RowOutOfRange => "Row out of range",
            CharacterDisplayError::ColumnOutOfRange => "Column out of range",
            CharacterDisplayError::GlyphSlotOutOfRange => "Custom character location out of range",
            CharacterDisplayError::ContrastOutOfRange => "Contrast out of range",
            CharacterDisplayError::UnsupportedDisplayType => "Unsupported display type",
            CharacterDisplayError::ValueNotApplicable => "Mode takes no value",
            CharacterDisplayError::NotInitialized => "Display not initialized",
        }
    }
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl<I2C> ufmt::uDisplay for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl<I2C> Display for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

pub struct DeviceSetupConfig<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    variant: DisplayVariant,
    i2c: I2C,
    address: u8,
    delay: DELAY,
    reset: Option<RST>,
}

/// SSD1803A character display on an I2C bus, with an optional reset line.
pub struct Ssd1803a<I2C, DELAY, RST = NoResetPin>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    device: SSD1803A<I2C, DELAY, RST>,
    actions: Ssd1803aDisplayActions<I2C, DELAY, RST>,
}

impl<I2C, DELAY> Ssd1803a<I2C, DELAY, NoResetPin>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    /// Create a new display object at the default I2C address (SA0 tied to VSS) without a reset line.
    pub fn new(i2c: I2C, delay: DELAY) -> Self {
        Self::new_with_address(
            i2c,
            <SSD1803A<I2C, DELAY, NoResetPin> as DeviceHardwareTrait<I2C, DELAY, NoResetPin>>::default_i2c_address(),
            delay,
        )
    }

    /// Create a new display object at a specific I2C address without a reset line.
    pub fn new_with_address(i2c: I2C, address: u8, delay: DELAY) -> Self {
        Self::from_config(DeviceSetupConfig {
            variant: DisplayVariant::default(),
            i2c,
            address,
            delay,
            reset: None,
        })
    }
}

impl<I2C, DELAY, RST> Ssd1803a<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Create a new display object at a specific I2C address with the reset line wired to `reset_pin`.
    /// The reset line is pulsed by `init`.
    pub fn new_with_reset_pin(i2c: I2C, address: u8, reset_pin: RST, delay: DELAY) -> Self {
        Self::from_config(DeviceSetupConfig {
            variant: DisplayVariant::default(),
            i2c,
            address,
            delay,
            reset: Some(reset_pin),
        })
    }

    fn from_config(config: DeviceSetupConfig<I2C, DELAY, RST>) -> Self {
        Self {
            device: SSD1803A::new(config),
            actions: Ssd1803aDisplayActions::default(),
        }
    }

    /// Initialize the display for `variant`. This must be called before using the display.
    /// Pulses the reset line if there is one, powers up the LCD glass with the variant's settings,
    /// clears the display and sets left to right text entry.
    pub fn init(&mut self, variant: DisplayVariant) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        let (display_control, entry_mode) = self.device.init(variant)?;
        self.actions
            .init_display_state(variant, display_control, entry_mode);
        Ok(self)
    }

    /// When enabled, out of range arguments and modes the display variant does not support are
    /// returned as errors instead of being masked or ignored. Off by default.
    pub fn set_strict_validation(&mut self, strict: bool) -> &mut Self {
        self.actions.set_strict_validation(strict);
        self
    }

    /// returns a reference to the I2C peripheral. mostly needed for testing
    #[cfg(test)]
    fn i2c(&mut self) -> &mut I2C {
        self.device.i2c()
    }

    /// returns the `DisplayVariant` the display was initialized for
    pub fn display_variant(&self) -> DisplayVariant {
        self.device.variant()
    }

    /// returns the number of rows of the display
    pub fn rows(&self) -> u8 {
        self.device.variant().rows()
    }

    /// returns the number of columns of the display
    pub fn columns(&self) -> u8 {
        self.device.variant().cols()
    }

    /// returns the configured I2C address
    pub fn i2c_address(&self) -> u8 {
        self.device.i2c_address()
    }

    /// Release the I2C bus, the delay and the reset pin, if any.
    pub fn release(self) -> (I2C, DELAY, Option<RST>) {
        self.device.release()
    }

    //--------------------------------------------------------------------------------------------------
    // high level commands, for the user!
    //--------------------------------------------------------------------------------------------------

    /// Clear the display and return the cursor to the top left position.
    pub fn clear(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.clear(&mut self.device)?;
        Ok(self)
    }

    /// Set the cursor to the home position without clearing the display.
    pub fn home(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.home(&mut self.device)?;
        Ok(self)
    }

    /// Fill a row with spaces and leave the cursor at its first column.
    pub fn clear_row(&mut self, row: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.clear_row(&mut self.device, row)?;
        Ok(self)
    }

    /// Fill `count` columns of a row with spaces, starting at `column`, and leave the cursor at `column`.
    pub fn clear_range(
        &mut self,
        row: u8,
        column: u8,
        count: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions
            .clear_range(&mut self.device, row, column, count)?;
        Ok(self)
    }

    /// Set the cursor position. Note the row comes first. Rows and columns are zero-indexed unless
    /// the `one-based-positions` feature is enabled.
    pub fn locate(&mut self, row: u8, column: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.locate(&mut self.device, row, column)?;
        Ok(self)
    }

    /// Change a display setting. `DisplayMode::Contrast` restores the variant's default contrast;
    /// use `set_contrast` to choose one.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.set_mode(&mut self.device, mode)?;
        Ok(self)
    }

    /// Change a display setting that takes a value. Only `DisplayMode::Contrast` does.
    pub fn set_mode_value(
        &mut self,
        mode: DisplayMode,
        value: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.set_mode_value(&mut self.device, mode, value)?;
        Ok(self)
    }

    /// Set the contrast, 0..=63.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions.set_contrast(&mut self.device, contrast)?;
        Ok(self)
    }

    /// Create a new custom character at `location` 0..=7. Write the location as a character
    /// to show it.
    pub fn create_char(
        &mut self,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.actions
            .create_char(&mut self.device, location, charmap)?;
        Ok(self)
    }

    /// Write one character code at the cursor position. Returns the number of bytes written.
    pub fn write_char(&mut self, value: u8) -> Result<usize, CharacterDisplayError<I2C>> {
        self.actions.write_char(&mut self.device, value)
    }

    /// Write character codes at the cursor position in one transaction. Returns the number of bytes written.
    pub fn write_buffer(&mut self, buffer: &[u8]) -> Result<usize, CharacterDisplayError<I2C>> {
        self.actions.write_buffer(&mut self.device, buffer)
    }

    /// Prints a string to the LCD at the current cursor position.
    pub fn print(&mut self, text: &str) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Printing: {}", text);
        self.actions.write_buffer(&mut self.device, text.as_bytes())?;
        Ok(self)
    }
}

/// Implement the `core::fmt::Write` trait for the display, allowing it to be used with the `write!` macro.
impl<I2C, DELAY, RST> core::fmt::Write for Ssd1803a<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    fn write_str(&mut self, s: &str) -> Result<(), core::fmt::Error> {
        if let Err(_e) = self.print(s) {
            return Err(core::fmt::Error);
        }
        Ok(())
    }
}

#[cfg(feature = "ufmt")]
/// Implement the `ufmt::uWrite` trait for the display, allowing it to be used with the `uwriteln!` and `uwrite!` macros.
impl<I2C, DELAY, RST> ufmt::uWrite for Ssd1803a<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    fn write_str(&mut self, s: &str) -> Result<(), CharacterDisplayError<I2C>> {
        self.print(s)?;
        Ok(())
    }

    type Error = CharacterDisplayError<I2C>;
}
