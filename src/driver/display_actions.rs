use core::marker::PhantomData;

use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c};

use crate::{driver::DeviceHardwareTrait, CharacterDisplayError, DisplayMode, DisplayVariant};

use crate::driver::commands::{
    CONTRAST_MAX, DDRAM_ROW_STRIDE, LCD_CMD_2LINES, LCD_CMD_3LINES_BOTTOM, LCD_CMD_3LINES_MIDDLE,
    LCD_CMD_3LINES_TOP, LCD_CMD_BOTTOM_VIEW, LCD_CMD_CLEARDISPLAY, LCD_CMD_CURSORSHIFT,
    LCD_CMD_DISPLAYCONTROL, LCD_CMD_ENTRYMODESET, LCD_CMD_FUNCTIONSET_RE0_IS0,
    LCD_CMD_FUNCTIONSET_RE0_IS0_DH1, LCD_CMD_FUNCTIONSET_RE0_IS1, LCD_CMD_FUNCTIONSET_RE1_IS0,
    LCD_CMD_RETURNHOME, LCD_CMD_ROM_SELECT, LCD_CMD_SETCGRAMADDR, LCD_CMD_SET_CONTRAST_LOW,
    LCD_CMD_SET_PWR_ICON_CONTRAST_HI, LCD_CMD_TOP_VIEW, LCD_FLAG_BLINKON,
    LCD_FLAG_CURSORON, LCD_FLAG_CURSORSHIFTLEFT, LCD_FLAG_CURSORSHIFTRIGHT, LCD_FLAG_DISPLAYON,
    LCD_FLAG_DISPLAYSHIFTLEFT, LCD_FLAG_DISPLAYSHIFTRIGHT, LCD_FLAG_ENTRYLEFT,
    LCD_FLAG_ENTRYSHIFTINCREMENT, LCD_ROM_A, LCD_ROM_B, LCD_ROM_C,
};

/// First row and column number accepted by `locate` and the row clearing helpers.
pub const POSITION_OFFSET: u8 = if cfg!(feature = "one-based-positions") { 1 } else { 0 };

const GLYPH_SLOT_MASK: u8 = 0x07;

/// Session state of the SSD1803A and the command sequences that act on it.
///
/// Many settings are only reachable after a function set command that selects one of the
/// controller's alternate register banks. Every operation here that leaves the default bank
/// returns to it before handing control back. Which default bank that is depends on the
/// active line mode: the reduced line modes need the double height function set.
///
/// The controller's bank is global state, so a display must only be driven from one place
/// at a time. No locking is done here.
pub struct Ssd1803aDisplayActions<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    entry_mode: u8,
    display_control: u8,
    ddram_start: u8,
    active_lines: u8,
    initialized: bool,
    strict: bool,
    _i2c: PhantomData<I2C>,
    _delay: PhantomData<DELAY>,
    _rst: PhantomData<RST>,
}

impl<I2C, DELAY, RST> Default for Ssd1803aDisplayActions<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    fn default() -> Self {
        Ssd1803aDisplayActions {
            entry_mode: 0,
            display_control: 0,
            ddram_start: DisplayVariant::default().ddram_start_bottom_view(),
            active_lines: 4,
            initialized: false,
            strict: false,
            _i2c: PhantomData,
            _delay: PhantomData,
            _rst: PhantomData,
        }
    }
}

impl<I2C, DELAY, RST> Ssd1803aDisplayActions<I2C, DELAY, RST>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Initialize the display state from the values the device reported after power up.
    pub fn init_display_state(
        &mut self,
        variant: DisplayVariant,
        display_control: u8,
        entry_mode: u8,
    ) {
        self.display_control = display_control;
        self.entry_mode = entry_mode;
        self.ddram_start = variant.ddram_start_bottom_view();
        self.active_lines = 4;
        self.initialized = true;
    }

    /// When enabled, out of range arguments and modes the variant does not support are
    /// reported as errors instead of being masked or ignored.
    pub fn set_strict_validation(&mut self, strict: bool) {
        self.strict = strict;
    }

    #[cfg(test)]
    pub(crate) fn active_lines(&self) -> u8 {
        self.active_lines
    }

    fn check_initialized(&self) -> Result<(), CharacterDisplayError<I2C>> {
        if self.strict && !self.initialized {
            return Err(CharacterDisplayError::NotInitialized);
        }
        Ok(())
    }

    fn send_command<DEVICE>(
        &self,
        device: &mut DEVICE,
        command: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        device.write_bytes(false, &[command])
    }

    /// Return to the default register bank matching the active line mode.
    fn restore_default_bank<DEVICE>(
        &self,
        device: &mut DEVICE,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        if self.active_lines == 4 {
            self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS0)
        } else {
            self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS0_DH1)
        }
    }

    pub fn clear<DEVICE>(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        self.send_command(device, LCD_CMD_CLEARDISPLAY)
    }

    pub fn home<DEVICE>(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        self.send_command(device, LCD_CMD_RETURNHOME)
    }

    /// Set the DDRAM address to `row` and `column`. Rows are 32 bytes apart in the DDRAM, and
    /// the start address follows the view orientation.
    pub fn locate<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        row: u8,
        column: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        let row = row.wrapping_sub(POSITION_OFFSET);
        let column = column.wrapping_sub(POSITION_OFFSET);
        if self.strict {
            let variant = device.variant();
            if row >= variant.rows() {
                return Err(CharacterDisplayError::RowOutOfRange);
            }
            if column >= variant.cols() {
                return Err(CharacterDisplayError::ColumnOutOfRange);
            }
        }
        let address = self
            .ddram_start
            .wrapping_add(row.wrapping_mul(DDRAM_ROW_STRIDE))
            .wrapping_add(column);
        self.send_command(device, address)
    }

    /// Overwrite every column of `row` with a space, then put the cursor at the start of the row.
    pub fn clear_row<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        row: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        let columns = device.variant().cols();
        for column in POSITION_OFFSET..POSITION_OFFSET + columns {
            self.locate(device, row, column)?;
            self.write_char(device, b' ')?;
        }
        self.locate(device, row, POSITION_OFFSET)
    }

    /// Overwrite `count` columns of `row` starting at `column` with spaces, then put the cursor
    /// back at `column`.
    pub fn clear_range<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        row: u8,
        column: u8,
        count: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        for i in 0..count {
            self.locate(device, row, column.wrapping_add(i))?;
            self.write_char(device, b' ')?;
        }
        self.locate(device, row, column)
    }

    pub fn set_mode<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        mode: DisplayMode,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        let variant = device.variant();
        match mode {
            DisplayMode::ViewTop => {
                self.ddram_start = variant.ddram_start_top_view();
                self.set_view(device, LCD_CMD_TOP_VIEW)
            }
            DisplayMode::ViewBottom => {
                self.ddram_start = variant.ddram_start_bottom_view();
                self.set_view(device, LCD_CMD_BOTTOM_VIEW)
            }
            DisplayMode::DisplayOn => self.update_display_control(device, LCD_FLAG_DISPLAYON, true),
            DisplayMode::DisplayOff => {
                self.update_display_control(device, LCD_FLAG_DISPLAYON, false)
            }
            DisplayMode::CursorOn => self.update_display_control(device, LCD_FLAG_CURSORON, true),
            DisplayMode::CursorOff => self.update_display_control(device, LCD_FLAG_CURSORON, false),
            DisplayMode::BlinkOn => self.update_display_control(device, LCD_FLAG_BLINKON, true),
            DisplayMode::BlinkOff => self.update_display_control(device, LCD_FLAG_BLINKON, false),
            DisplayMode::DisplayShiftLeft => {
                self.send_command(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYSHIFTLEFT)
            }
            DisplayMode::DisplayShiftRight => {
                self.send_command(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYSHIFTRIGHT)
            }
            DisplayMode::CursorShiftLeft => {
                self.send_command(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_CURSORSHIFTLEFT)
            }
            DisplayMode::CursorShiftRight => {
                self.send_command(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_CURSORSHIFTRIGHT)
            }
            DisplayMode::LeftToRight => self.update_entry_mode(device, LCD_FLAG_ENTRYLEFT, true),
            DisplayMode::RightToLeft => self.update_entry_mode(device, LCD_FLAG_ENTRYLEFT, false),
            DisplayMode::AutoscrollOn => {
                self.update_entry_mode(device, LCD_FLAG_ENTRYSHIFTINCREMENT, true)
            }
            DisplayMode::AutoscrollOff => {
                self.update_entry_mode(device, LCD_FLAG_ENTRYSHIFTINCREMENT, false)
            }
            DisplayMode::Contrast => self.reset_contrast(device),
            DisplayMode::Lines4 => self.set_line_mode(device, None, 4),
            DisplayMode::Lines3Top => self.set_line_mode(device, Some(LCD_CMD_3LINES_TOP), 3),
            DisplayMode::Lines3Middle => self.set_line_mode(device, Some(LCD_CMD_3LINES_MIDDLE), 3),
            DisplayMode::Lines3Bottom => self.set_line_mode(device, Some(LCD_CMD_3LINES_BOTTOM), 3),
            DisplayMode::Lines2 => self.set_line_mode(device, Some(LCD_CMD_2LINES), 2),
            DisplayMode::RomA => self.select_rom(device, LCD_ROM_A),
            DisplayMode::RomB => self.select_rom(device, LCD_ROM_B),
            DisplayMode::RomC => self.select_rom(device, LCD_ROM_C),
        }
    }

    /// Apply `mode` with a value. Only `DisplayMode::Contrast` takes a value; any other mode is
    /// ignored, or rejected when strict validation is on.
    pub fn set_mode_value<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        mode: DisplayMode,
        value: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        match mode {
            DisplayMode::Contrast => self.set_contrast(device, value),
            _ if self.strict => Err(CharacterDisplayError::ValueNotApplicable),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Mode {} takes no value, ignored", mode);
                Ok(())
            }
        }
    }

    /// Sets the contrast of the display. The contrast is a 6-bit value; the lower 4 bits go to
    /// the contrast set command and the upper 2 bits to the power/icon/contrast command.
    pub fn set_contrast<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        contrast: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        if self.strict && contrast > CONTRAST_MAX {
            return Err(CharacterDisplayError::ContrastOutOfRange);
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("Setting contrast to {}", contrast & CONTRAST_MAX);
        self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS1)?;
        self.send_command(device, LCD_CMD_SET_CONTRAST_LOW | (contrast & 0x0F))?;
        self.send_command(
            device,
            LCD_CMD_SET_PWR_ICON_CONTRAST_HI | ((contrast >> 4) & 0x03),
        )?;
        self.restore_default_bank(device)
    }

    /// Define the custom character at `location` (0..=7). Each byte of `charmap` is one pixel row,
    /// the lower 5 bits are used. The CGRAM address auto increments; each row goes out as its
    /// own data write.
    pub fn create_char<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        if self.strict && location > GLYPH_SLOT_MASK {
            return Err(CharacterDisplayError::GlyphSlotOutOfRange);
        }
        let location = location & GLYPH_SLOT_MASK;
        self.send_command(device, LCD_CMD_SETCGRAMADDR | (location << 3))?;
        for row in charmap {
            device.write_bytes(true, &[row])?;
        }
        Ok(())
    }

    pub fn write_char<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        value: u8,
    ) -> Result<usize, CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        device.write_bytes(true, &[value])?;
        Ok(1)
    }

    pub fn write_buffer<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        buffer: &[u8],
    ) -> Result<usize, CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.check_initialized()?;
        device.write_bytes(true, buffer)?;
        Ok(buffer.len())
    }

    fn set_view<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        view_command: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.send_command(device, LCD_CMD_FUNCTIONSET_RE1_IS0)?;
        self.send_command(device, view_command)?;
        self.restore_default_bank(device)
    }

    fn update_display_control<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        flag: u8,
        on: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        if on {
            self.display_control |= flag;
        } else {
            self.display_control &= !flag;
        }
        self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS1)?;
        self.send_command(device, LCD_CMD_DISPLAYCONTROL | self.display_control)?;
        self.restore_default_bank(device)
    }

    fn update_entry_mode<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        flag: u8,
        on: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        if on {
            self.entry_mode |= flag;
        } else {
            self.entry_mode &= !flag;
        }
        self.send_command(device, LCD_CMD_ENTRYMODESET | self.entry_mode)
    }

    /// Resend the variant's power up contrast. The DOGM204 always goes back to the 4 line
    /// default bank here, the other variants follow the active line mode.
    fn reset_contrast<DEVICE>(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        let variant = device.variant();
        self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS1)?;
        self.send_command(device, variant.power_control())?;
        self.send_command(device, variant.default_contrast())?;
        if variant.contrast_reset_forces_four_lines() {
            self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS0)
        } else {
            self.restore_default_bank(device)
        }
    }

    /// Switch between the 4 line layout and the double height layouts. `layout_command` is the
    /// extended instruction set row layout, `None` for plain 4 line mode which is selected by the
    /// default bank function set alone.
    fn set_line_mode<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        layout_command: Option<u8>,
        lines: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        let variant = device.variant();
        if !variant.supports_line_modes() {
            if self.strict {
                return Err(CharacterDisplayError::UnsupportedDisplayType);
            }
            #[cfg(feature = "defmt")]
            defmt::warn!("{} has no {} line mode, ignored", variant, lines);
            return Ok(());
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("Switching to {} line mode", lines);
        match layout_command {
            Some(layout) => {
                self.send_command(device, LCD_CMD_FUNCTIONSET_RE1_IS0)?;
                self.send_command(device, layout)?;
                self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS0_DH1)?;
            }
            None => self.send_command(device, LCD_CMD_FUNCTIONSET_RE0_IS0)?,
        }
        self.active_lines = lines;
        Ok(())
    }

    /// Select the character ROM. The ROM id follows the ROM select command as a data byte while
    /// the extended instruction set is active.
    fn select_rom<DEVICE>(
        &mut self,
        device: &mut DEVICE,
        rom: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DEVICE: DeviceHardwareTrait<I2C, DELAY, RST>,
    {
        self.send_command(device, LCD_CMD_FUNCTIONSET_RE1_IS0)?;
        self.send_command(device, LCD_CMD_ROM_SELECT)?;
        device.write_bytes(true, &[rom])?;
        self.restore_default_bank(device)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;
    use crate::driver::ssd1803a::{NoResetPin, I2C_ADDRESS_SA0_LOW, SSD1803A};
    use crate::DeviceSetupConfig;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        i2c::{Mock as I2cMock, Transaction as I2cTransaction},
    };

    type Device = SSD1803A<I2cMock, NoopDelay, NoResetPin>;
    type Actions = Ssd1803aDisplayActions<I2cMock, NoopDelay, NoResetPin>;

    const P: u8 = POSITION_OFFSET;

    fn cmd(command: u8) -> I2cTransaction {
        I2cTransaction::write(I2C_ADDRESS_SA0_LOW, std::vec![0x00, command])
    }

    fn data(bytes: &[u8]) -> I2cTransaction {
        let mut frame = std::vec![0x40];
        frame.extend_from_slice(bytes);
        I2cTransaction::write(I2C_ADDRESS_SA0_LOW, frame)
    }

    fn commands(list: &[u8]) -> Vec<I2cTransaction> {
        list.iter().map(|c| cmd(*c)).collect()
    }

    /// A device and display state as they are right after `init`, without the init traffic.
    fn setup(variant: DisplayVariant, expected: &[I2cTransaction]) -> (Device, Actions) {
        let config = DeviceSetupConfig {
            variant,
            i2c: I2cMock::new(expected),
            address: I2C_ADDRESS_SA0_LOW,
            delay: NoopDelay,
            reset: None,
        };
        let device = SSD1803A::new(config);
        let mut actions = Actions::default();
        actions.init_display_state(variant, LCD_FLAG_DISPLAYON, LCD_FLAG_ENTRYLEFT);
        (device, actions)
    }

    #[test]
    fn test_clear_and_home() {
        let expected = commands(&[0x01, 0x02]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.clear(&mut device).unwrap();
        actions.home(&mut device).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_locate_then_write_char() {
        // 0x80 + 2 * 0x20 + 5
        let expected = std::vec![cmd(0xC5), data(b"A")];
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.locate(&mut device, 2 + P, 5 + P).unwrap();
        assert_eq!(actions.write_char(&mut device, b'A').unwrap(), 1);
        device.i2c().done();
    }

    #[test]
    fn test_view_top_and_back_restores_cursor_base() {
        let expected = commands(&[
            0x3A, 0x05, 0x38, // top view
            0x80 + 0x20 + 0x0A + 3, // locate(1, 3) in top view
            0x3A, 0x06, 0x38, // bottom view
            0x80 + 0x20 + 3, // locate(1, 3) in bottom view
        ]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogs104, &expected);
        let original_start = actions.ddram_start;

        actions.set_mode(&mut device, DisplayMode::ViewTop).unwrap();
        actions.locate(&mut device, 1 + P, 3 + P).unwrap();
        actions.set_mode(&mut device, DisplayMode::ViewBottom).unwrap();
        assert_eq!(actions.ddram_start, original_start);
        actions.locate(&mut device, 1 + P, 3 + P).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_display_control_bits_commute() {
        let expected = commands(&[
            0x39, 0x0E, 0x38, // cursor on
            0x39, 0x0F, 0x38, // blink on
            0x39, 0x0D, 0x38, // cursor off
            0x39, 0x0C, 0x38, // blink off
            0x39, 0x0D, 0x38, // blink on
            0x39, 0x0F, 0x38, // cursor on
            0x39, 0x0F, 0x38, // cursor on again
        ]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.set_mode(&mut device, DisplayMode::CursorOn).unwrap();
        actions.set_mode(&mut device, DisplayMode::BlinkOn).unwrap();
        let cursor_first = actions.display_control;
        actions.set_mode(&mut device, DisplayMode::CursorOff).unwrap();
        actions.set_mode(&mut device, DisplayMode::BlinkOff).unwrap();
        actions.set_mode(&mut device, DisplayMode::BlinkOn).unwrap();
        actions.set_mode(&mut device, DisplayMode::CursorOn).unwrap();
        assert_eq!(actions.display_control, cursor_first);
        actions.set_mode(&mut device, DisplayMode::CursorOn).unwrap();
        assert_eq!(actions.display_control, cursor_first);
        device.i2c().done();
    }

    #[test]
    fn test_display_off_keeps_cursor_bits() {
        let expected = commands(&[0x39, 0x0E, 0x38, 0x39, 0x0A, 0x38, 0x39, 0x0E, 0x38]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogs164, &expected);

        actions.set_mode(&mut device, DisplayMode::CursorOn).unwrap();
        actions.set_mode(&mut device, DisplayMode::DisplayOff).unwrap();
        actions.set_mode(&mut device, DisplayMode::DisplayOn).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_shift_commands_stay_in_default_bank() {
        let expected = commands(&[0x18, 0x1C, 0x10, 0x14]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.set_mode(&mut device, DisplayMode::DisplayShiftLeft).unwrap();
        actions.set_mode(&mut device, DisplayMode::DisplayShiftRight).unwrap();
        actions.set_mode(&mut device, DisplayMode::CursorShiftLeft).unwrap();
        actions.set_mode(&mut device, DisplayMode::CursorShiftRight).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_entry_mode_flags() {
        let expected = commands(&[0x07, 0x05, 0x04, 0x06]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.set_mode(&mut device, DisplayMode::AutoscrollOn).unwrap();
        actions.set_mode(&mut device, DisplayMode::RightToLeft).unwrap();
        actions.set_mode(&mut device, DisplayMode::AutoscrollOff).unwrap();
        actions.set_mode(&mut device, DisplayMode::LeftToRight).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_set_contrast_value() {
        let contrast_value = 0x24;
        let expected = commands(&[
            0x39,
            0x70 | (contrast_value & 0x0F),
            0x5C | ((contrast_value >> 4) & 0x03),
            0x38,
        ]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogs164, &expected);

        actions
            .set_mode_value(&mut device, DisplayMode::Contrast, contrast_value)
            .unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_set_contrast_bytes_for_every_value() {
        for contrast in 0..=CONTRAST_MAX {
            let expected = commands(&[
                0x39,
                0x70 | (contrast & 0x0F),
                0x5C | ((contrast >> 4) & 0x03),
                0x38,
            ]);
            let (mut device, mut actions) = setup(DisplayVariant::Dogs104, &expected);
            actions.set_contrast(&mut device, contrast).unwrap();
            device.i2c().done();
        }
    }

    #[test]
    fn test_value_ignored_for_other_modes() {
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &[]);

        actions
            .set_mode_value(&mut device, DisplayMode::CursorOn, 12)
            .unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_contrast_reset_dogm204_always_returns_to_four_lines() {
        let expected = commands(&[0x39, 0x57, 0x72, 0x38]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);
        actions.active_lines = 3;

        actions.set_mode(&mut device, DisplayMode::Contrast).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_contrast_reset_dogs164_follows_line_mode() {
        let expected = commands(&[
            0x3A, 0x1B, 0x3C, // 2 line mode
            0x39, 0x56, 0x6B, 0x3C, // contrast reset back to double height bank
        ]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogs164, &expected);

        actions.set_mode(&mut device, DisplayMode::Lines2).unwrap();
        assert_eq!(actions.active_lines, 2);
        actions.set_mode(&mut device, DisplayMode::Contrast).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_lines_3_middle_on_dogs164() {
        let expected = commands(&[0x3A, 0x17, 0x3C]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogs164, &expected);

        actions.set_mode(&mut device, DisplayMode::Lines3Middle).unwrap();
        assert_eq!(actions.active_lines, 3);
        device.i2c().done();
    }

    #[test]
    fn test_reduced_line_mode_changes_bank_restore() {
        let expected = commands(&[
            0x3A, 0x1F, 0x3C, // 3 lines, top double height
            0x39, 0x0D, 0x3C, // blink on, restored to the double height bank
            0x38, // back to 4 lines
            0x39, 0x0C, 0x38, // blink off, restored to the plain bank
        ]);
        let (mut device, mut actions) = setup(DisplayVariant::Dogs104, &expected);

        actions.set_mode(&mut device, DisplayMode::Lines3Top).unwrap();
        actions.set_mode(&mut device, DisplayMode::BlinkOn).unwrap();
        actions.set_mode(&mut device, DisplayMode::Lines4).unwrap();
        assert_eq!(actions.active_lines, 4);
        actions.set_mode(&mut device, DisplayMode::BlinkOff).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_line_modes_ignored_on_dogm204() {
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &[]);

        for mode in [
            DisplayMode::Lines2,
            DisplayMode::Lines3Top,
            DisplayMode::Lines3Middle,
            DisplayMode::Lines3Bottom,
            DisplayMode::Lines4,
        ] {
            actions.set_mode(&mut device, mode).unwrap();
        }
        assert_eq!(actions.active_lines, 4);
        device.i2c().done();
    }

    #[test]
    fn test_select_rom_writes_id_as_data() {
        let expected = std::vec![cmd(0x3A), cmd(0x72), data(&[0x04]), cmd(0x38)];
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.set_mode(&mut device, DisplayMode::RomB).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_create_char() {
        let charmap = [0b11011, 0b10001, 0b11011, 0b00000, 0b00000, 0b00100, 0b01110, 0b10001];
        let mut expected = std::vec![cmd(0x40 | (2 << 3))];
        expected.extend(charmap.iter().map(|row| data(&[*row])));
        let (mut device, mut actions) = setup(DisplayVariant::Dogs164, &expected);

        actions.create_char(&mut device, 2, charmap).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_create_char_masks_slot() {
        let charmap = [0x1F; 8];
        for slot in 8..16u8 {
            let mut expected = std::vec![cmd(0x40 | ((slot & 0x07) << 3))];
            expected.extend(charmap.iter().map(|row| data(&[*row])));
            let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);
            actions.create_char(&mut device, slot, charmap).unwrap();
            device.i2c().done();
        }
    }

    #[test]
    fn test_write_buffer_is_one_transaction() {
        let expected = std::vec![data(b"Hello World")];
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        assert_eq!(actions.write_buffer(&mut device, b"Hello World").unwrap(), 11);
        device.i2c().done();
    }

    #[test]
    fn test_clear_row() {
        let mut expected = Vec::new();
        for column in 0..10u8 {
            expected.push(cmd(0x80 + 3 * 0x20 + column));
            expected.push(data(b" "));
        }
        expected.push(cmd(0x80 + 3 * 0x20));
        let (mut device, mut actions) = setup(DisplayVariant::Dogs104, &expected);

        actions.clear_row(&mut device, 3 + P).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_clear_range() {
        let expected = std::vec![
            cmd(0x80 + 0x20 + 4),
            data(b" "),
            cmd(0x80 + 0x20 + 5),
            data(b" "),
            cmd(0x80 + 0x20 + 6),
            data(b" "),
            cmd(0x80 + 0x20 + 4),
        ];
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &expected);

        actions.clear_range(&mut device, 1 + P, 4 + P, 3).unwrap();
        device.i2c().done();
    }

    #[test]
    fn test_strict_validation() {
        let (mut device, mut actions) = setup(DisplayVariant::Dogm204, &[]);
        actions.set_strict_validation(true);

        assert!(matches!(
            actions.locate(&mut device, 4 + P, P),
            Err(CharacterDisplayError::RowOutOfRange)
        ));
        assert!(matches!(
            actions.locate(&mut device, P, 20 + P),
            Err(CharacterDisplayError::ColumnOutOfRange)
        ));
        assert!(matches!(
            actions.create_char(&mut device, 8, [0; 8]),
            Err(CharacterDisplayError::GlyphSlotOutOfRange)
        ));
        assert!(matches!(
            actions.set_contrast(&mut device, 64),
            Err(CharacterDisplayError::ContrastOutOfRange)
        ));
        assert!(matches!(
            actions.set_mode(&mut device, DisplayMode::Lines2),
            Err(CharacterDisplayError::UnsupportedDisplayType)
        ));
        assert!(matches!(
            actions.set_mode_value(&mut device, DisplayMode::BlinkOn, 1),
            Err(CharacterDisplayError::ValueNotApplicable)
        ));
        device.i2c().done();
    }

    #[test]
    fn test_strict_validation_requires_init() {
        let config = DeviceSetupConfig {
            variant: DisplayVariant::Dogm204,
            i2c: I2cMock::new(&Vec::<I2cTransaction>::new()),
            address: I2C_ADDRESS_SA0_LOW,
            delay: NoopDelay,
            reset: None::<NoResetPin>,
        };
        let mut device = SSD1803A::new(config);
        let mut actions = Actions::default();
        actions.set_strict_validation(true);

        assert!(matches!(
            actions.clear(&mut device),
            Err(CharacterDisplayError::NotInitialized)
        ));
        device.i2c().done();
    }
}
