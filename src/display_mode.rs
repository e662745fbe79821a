use core::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Display settings that can be changed with `set_mode`. Most of these live in one of the SSD1803A's
/// alternate register banks; the driver switches banks and returns to the default bank as needed.
pub enum DisplayMode {
    /// Rotate the display orientation by 180 degrees
    ViewTop,
    /// Standard display orientation
    ViewBottom,
    /// Turn the display on
    DisplayOn,
    /// Turn the display off. DDRAM content is kept.
    DisplayOff,
    /// Turn the underline cursor on
    CursorOn,
    /// Turn the underline cursor off
    CursorOff,
    /// Turn the blinking block cursor on
    BlinkOn,
    /// Turn the blinking block cursor off
    BlinkOff,
    /// Shift the display to the left without changing the DDRAM
    DisplayShiftLeft,
    /// Shift the display to the right without changing the DDRAM
    DisplayShiftRight,
    /// Move the cursor to the left without changing the DDRAM
    CursorShiftLeft,
    /// Move the cursor to the right without changing the DDRAM
    CursorShiftRight,
    /// Text flows left to right
    LeftToRight,
    /// Text flows right to left
    RightToLeft,
    /// 'right justify' text from the cursor
    AutoscrollOn,
    /// 'left justify' text from the cursor
    AutoscrollOff,
    /// Contrast. Without a value the variant's default contrast is restored, with a value
    /// (0..=63) that contrast is set.
    Contrast,
    /// 4 line mode. DOGS164 and DOGS104 only.
    Lines4,
    /// 3 line mode with the double height row at the top. DOGS164 and DOGS104 only.
    Lines3Top,
    /// 3 line mode with the double height row in the middle. DOGS164 and DOGS104 only.
    Lines3Middle,
    /// 3 line mode with the double height row at the bottom. DOGS164 and DOGS104 only.
    Lines3Bottom,
    /// 2 line mode, both rows double height. DOGS164 and DOGS104 only.
    Lines2,
    /// Character set ROM A
    RomA,
    /// Character set ROM B
    RomB,
    /// Character set ROM C
    RomC,
}

impl From<&DisplayMode> for &'static str {
    fn from(mode: &DisplayMode) -> Self {
        match mode {
            DisplayMode::ViewTop => "view top",
            DisplayMode::ViewBottom => "view bottom",
            DisplayMode::DisplayOn => "display on",
            DisplayMode::DisplayOff => "display off",
            DisplayMode::CursorOn => "cursor on",
            DisplayMode::CursorOff => "cursor off",
            DisplayMode::BlinkOn => "blink on",
            DisplayMode::BlinkOff => "blink off",
            DisplayMode::DisplayShiftLeft => "display shift left",
            DisplayMode::DisplayShiftRight => "display shift right",
            DisplayMode::CursorShiftLeft => "cursor shift left",
            DisplayMode::CursorShiftRight => "cursor shift right",
            DisplayMode::LeftToRight => "left to right",
            DisplayMode::RightToLeft => "right to left",
            DisplayMode::AutoscrollOn => "autoscroll on",
            DisplayMode::AutoscrollOff => "autoscroll off",
            DisplayMode::Contrast => "contrast",
            DisplayMode::Lines4 => "4 lines",
            DisplayMode::Lines3Top => "3 lines, top double height",
            DisplayMode::Lines3Middle => "3 lines, middle double height",
            DisplayMode::Lines3Bottom => "3 lines, bottom double height",
            DisplayMode::Lines2 => "2 lines",
            DisplayMode::RomA => "ROM A",
            DisplayMode::RomB => "ROM B",
            DisplayMode::RomC => "ROM C",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayMode {
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for DisplayMode {
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}
