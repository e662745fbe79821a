use bitfield::bitfield;

// The first byte of every I2C transaction to the SSD1803A. `co` set means another
// control byte follows the next data byte; `rs` selects the data register over the
// instruction register for the bytes that follow.
bitfield! {
    pub struct ControlByte(u8);
    impl Debug;
    impl BitAnd;
    pub co, set_co: 7, 7;
    pub rs, set_rs: 6, 6;
}

impl Default for ControlByte {
    fn default() -> Self {
        Self(0)
    }
}

impl Clone for ControlByte {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl ControlByte {
    /// Control byte for a stream of bytes that are all commands (`rs_setting == false`)
    /// or all data (`rs_setting == true`).
    pub fn for_stream(rs_setting: bool) -> Self {
        let mut control = ControlByte::default();
        control.set_co(0);
        control.set_rs(rs_setting as u8);
        control
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}
