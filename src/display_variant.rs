use core::fmt::Display;

use crate::driver::commands::{
    DDRAM_TOP_OFFSET_DOGS104, DDRAM_TOP_OFFSET_DOGS164, LCD_CMD_SETDDRAMADDR,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
/// The physical display module driven by the SSD1803A. This determines the number of rows and columns,
/// the register values used to power up the LCD glass, and the DDRAM offset used in top view orientation.
pub enum DisplayVariant {
    /// EA DOGM204, 20x4 characters
    #[default]
    Dogm204,
    /// EA DOGS164, 16x4 characters
    Dogs164,
    /// EA DOGS104, 10x4 characters
    Dogs104,
}

impl From<&DisplayVariant> for &'static str {
    fn from(variant: &DisplayVariant) -> Self {
        match variant {
            DisplayVariant::Dogm204 => "DOGM204 (20x4)",
            DisplayVariant::Dogs164 => "DOGS164 (16x4)",
            DisplayVariant::Dogs104 => "DOGS104 (10x4)",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayVariant {
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for DisplayVariant {
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl Display for DisplayVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

impl DisplayVariant {
    /// Get the number of rows for the display variant
    pub const fn rows(&self) -> u8 {
        4
    }

    /// Get the number of columns for the display variant
    pub const fn cols(&self) -> u8 {
        match self {
            DisplayVariant::Dogm204 => 20,
            DisplayVariant::Dogs164 => 16,
            DisplayVariant::Dogs104 => 10,
        }
    }

    /// Follower control register value (special register set, RE = 0, IS = 1)
    pub(crate) const fn follower_control(&self) -> u8 {
        match self {
            DisplayVariant::Dogm204 => 0x6E,
            DisplayVariant::Dogs164 => 0x6C,
            DisplayVariant::Dogs104 => 0x6E,
        }
    }

    /// Power control register value (special register set, RE = 0, IS = 1)
    pub(crate) const fn power_control(&self) -> u8 {
        match self {
            DisplayVariant::Dogm204 => 0x57,
            DisplayVariant::Dogs164 => 0x56,
            DisplayVariant::Dogs104 => 0x56,
        }
    }

    /// Default contrast set command (special register set, RE = 0, IS = 1)
    pub(crate) const fn default_contrast(&self) -> u8 {
        match self {
            DisplayVariant::Dogm204 => 0x72,
            DisplayVariant::Dogs164 => 0x6B,
            DisplayVariant::Dogs104 => 0x7A,
        }
    }

    /// DDRAM start address for bottom view, the power up orientation
    pub(crate) const fn ddram_start_bottom_view(&self) -> u8 {
        LCD_CMD_SETDDRAMADDR
    }

    /// DDRAM start address for top view. The 180 degree rotated glass shows the end of each
    /// 32 byte DDRAM row on the narrower modules, so the visible window moves.
    pub(crate) const fn ddram_start_top_view(&self) -> u8 {
        match self {
            DisplayVariant::Dogm204 => LCD_CMD_SETDDRAMADDR,
            DisplayVariant::Dogs164 => LCD_CMD_SETDDRAMADDR + DDRAM_TOP_OFFSET_DOGS164,
            DisplayVariant::Dogs104 => LCD_CMD_SETDDRAMADDR + DDRAM_TOP_OFFSET_DOGS104,
        }
    }

    /// Whether the variant can switch to the 3 and 2 line double height layouts
    pub(crate) const fn supports_line_modes(&self) -> bool {
        match self {
            DisplayVariant::Dogm204 => false,
            DisplayVariant::Dogs164 | DisplayVariant::Dogs104 => true,
        }
    }

    /// Whether resetting the contrast returns straight to the 4 line default bank regardless of the
    /// active line mode. Only the DOGM204 does this; it has no reduced line modes to restore.
    pub(crate) const fn contrast_reset_forces_four_lines(&self) -> bool {
        matches!(self, DisplayVariant::Dogm204)
    }
}
