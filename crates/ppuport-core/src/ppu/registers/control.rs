use bitflags::bitflags;

use crate::memory::ppu as ppu_mem;

bitflags! {
    /// PPU control register (`$2000`).
    ///
    /// Bit layout:
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// N M S B s I n n
    /// ```
    /// - `n n`: base nametable select
    /// - `I`: VRAM increment (0=+1, 1=+32)
    /// - `s`: sprite pattern table (8x8)
    /// - `B`: background pattern table
    /// - `S`: sprite size (0=8x8, 1=8x16)
    /// - `M`: master/slave select
    /// - `N`: generate NMI at VBlank start
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Control: u8 {
        /// Base nametable address (bits 0 and 1).
        const NAMETABLE = 0b0000_0011;
        /// VRAM address increment per `$2007` access: `0` adds 1, `1` adds 32.
        const INCREMENT_32 = 0b0000_0100;
        /// Sprite pattern table for 8x8 sprites: `$0000` or `$1000`.
        const SPRITE_TABLE = 0b0000_1000;
        /// Background pattern table: `$0000` or `$1000`.
        const BACKGROUND_TABLE = 0b0001_0000;
        /// 8x16 sprites when set.
        const SPRITE_SIZE_16 = 0b0010_0000;
        /// Master/slave select. Unused on a stock console.
        const MASTER_SLAVE = 0b0100_0000;
        /// Generate an NMI at the start of VBlank.
        const GENERATE_NMI = 0b1000_0000;
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::empty()
    }
}

impl Control {
    /// Returns the nametable select bits (0..3).
    pub fn nametable_index(self) -> u8 {
        (self & Control::NAMETABLE).bits()
    }

    /// Computes the base nametable address (`$2000`, `$2400`, `$2800`, `$2C00`).
    pub fn base_nametable_addr(self) -> u16 {
        ppu_mem::NAMETABLE_BASE + u16::from(self.nametable_index()) * ppu_mem::NAMETABLE_SIZE
    }

    /// Returns the VRAM increment amount (1 or 32).
    pub fn vram_increment(self) -> u16 {
        if self.contains(Control::INCREMENT_32) {
            32
        } else {
            1
        }
    }

    pub fn sprite_pattern_table(self) -> u16 {
        if self.contains(Control::SPRITE_TABLE) {
            ppu_mem::PATTERN_TABLE_1
        } else {
            ppu_mem::PATTERN_TABLE_0
        }
    }

    pub fn background_pattern_table(self) -> u16 {
        if self.contains(Control::BACKGROUND_TABLE) {
            ppu_mem::PATTERN_TABLE_1
        } else {
            ppu_mem::PATTERN_TABLE_0
        }
    }

    pub fn use_8x16_sprites(self) -> bool {
        self.contains(Control::SPRITE_SIZE_16)
    }

    /// Indicates whether the PPU should fire an NMI at the start of VBlank.
    pub fn nmi_enabled(self) -> bool {
        self.contains(Control::GENERATE_NMI)
    }
}
