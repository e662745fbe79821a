// Command table for the SSD1803A. The controller multiplexes its instruction space over
// register banks selected by the RE and IS bits of the function set command, so the same
// opcode means different things depending on which function set was sent last.

// commands available in every bank
pub const LCD_CMD_CLEARDISPLAY: u8 = 0x01; //  Clear display, set cursor position to zero
pub const LCD_CMD_RETURNHOME: u8 = 0x02; //  Set cursor position to zero
pub const LCD_CMD_ENTRYMODESET: u8 = 0x04; //  Sets the entry mode
pub const LCD_CMD_SETCGRAMADDR: u8 = 0x40; //  Set the CGRAM (character generator RAM) address
pub const LCD_CMD_SETDDRAMADDR: u8 = 0x80; //  Set the DDRAM (display data RAM) address

// flags for display entry mode
pub const LCD_FLAG_ENTRYLEFT: u8 = 0x02; //  Text flows from left to right
pub const LCD_FLAG_ENTRYSHIFTINCREMENT: u8 = 0x01; //  'right justify' text from the cursor

// display/cursor shift (RE = 0, IS = 0)
pub const LCD_CMD_CURSORSHIFT: u8 = 0x10;
pub const LCD_FLAG_DISPLAYSHIFTLEFT: u8 = 0x08;
pub const LCD_FLAG_DISPLAYSHIFTRIGHT: u8 = 0x0C;
pub const LCD_FLAG_CURSORSHIFTLEFT: u8 = 0x00;
pub const LCD_FLAG_CURSORSHIFTRIGHT: u8 = 0x04;

// DDRAM start offsets when the display is mounted top view
pub const DDRAM_TOP_OFFSET_DOGS164: u8 = 0x04;
pub const DDRAM_TOP_OFFSET_DOGS104: u8 = 0x0A;
// distance between the DDRAM start addresses of two consecutive rows
pub const DDRAM_ROW_STRIDE: u8 = 0x20;

// function set, 8 bit interface, 4 line mode, with the bank selecting bits
pub const LCD_CMD_FUNCTIONSET_RE1_IS0: u8 = 0x3A; //  extended instruction set
pub const LCD_CMD_FUNCTIONSET_RE0_IS0_DH1: u8 = 0x3C; //  default bank, double height
pub const LCD_CMD_FUNCTIONSET_RE0_IS1: u8 = 0x39; //  special register set
pub const LCD_CMD_FUNCTIONSET_RE0_IS0: u8 = 0x38; //  default bank

// extended instruction set (RE = 1, IS = 0)
pub const LCD_CMD_BS1_1: u8 = 0x1E; //  bias setting BS1 = 1
pub const LCD_CMD_TOP_VIEW: u8 = 0x05;
pub const LCD_CMD_BOTTOM_VIEW: u8 = 0x06;
pub const LCD_CMD_4LINES: u8 = 0x09;
pub const LCD_CMD_3LINES_TOP: u8 = 0x1F; //  double height row at the top
pub const LCD_CMD_3LINES_MIDDLE: u8 = 0x17; //  double height row in the middle
pub const LCD_CMD_3LINES_BOTTOM: u8 = 0x13; //  double height row at the bottom
pub const LCD_CMD_2LINES: u8 = 0x1B; //  both rows double height
pub const LCD_CMD_ROM_SELECT: u8 = 0x72; //  followed by the ROM id as a data byte
pub const LCD_ROM_A: u8 = 0x00;
pub const LCD_ROM_B: u8 = 0x04;
pub const LCD_ROM_C: u8 = 0x08;

// display on/off control
pub const LCD_CMD_DISPLAYCONTROL: u8 = 0x08;
pub const LCD_FLAG_DISPLAYON: u8 = 0x04;
pub const LCD_FLAG_CURSORON: u8 = 0x02;
pub const LCD_FLAG_BLINKON: u8 = 0x01;

// special register set (RE = 0, IS = 1)
pub const LCD_CMD_BS0_1: u8 = 0x1B; //  bias setting BS0 = 1
pub const LCD_CMD_SET_CONTRAST_LOW: u8 = 0x70; //  lower 4 bits of the contrast
pub const LCD_CMD_SET_PWR_ICON_CONTRAST_HI: u8 = 0x5C; //  booster on, icon off, upper 2 bits of contrast

pub const CONTRAST_MAX: u8 = 0x3F;
