use bitflags::bitflags;

bitflags! {
    /// PPU status register (`$2002`).
    ///
    /// Bit layout:
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// V S O . . . . .
    /// ```
    /// - `V`: Vertical blank flag
    /// - `S`: Sprite zero hit
    /// - `O`: Sprite overflow flag
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Sprite overflow flag (bit 5).
        const SPRITE_OVERFLOW = 0b0010_0000;
        /// Sprite zero hit flag (bit 6).
        const SPRITE_ZERO_HIT = 0b0100_0000;
        /// Vertical blank flag (bit 7). Reading `$2002` clears this bit.
        const VERTICAL_BLANK = 0b1000_0000;
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::empty()
    }
}

impl Status {
    pub fn in_vblank(self) -> bool {
        self.contains(Status::VERTICAL_BLANK)
    }

    pub fn sprite_zero_hit(self) -> bool {
        self.contains(Status::SPRITE_ZERO_HIT)
    }

    pub fn sprite_overflow(self) -> bool {
        self.contains(Status::SPRITE_OVERFLOW)
    }

    pub fn set_vblank(&mut self, value: bool) {
        self.set(Status::VERTICAL_BLANK, value);
    }

    pub fn set_sprite_zero_hit(&mut self, value: bool) {
        self.set(Status::SPRITE_ZERO_HIT, value);
    }

    pub fn set_sprite_overflow(&mut self, value: bool) {
        self.set(Status::SPRITE_OVERFLOW, value);
    }
}
