//! Shared definitions for the PPU memory map.
//!
//! Centralizing address-related constants keeps the hardware layout in one
//! location and prevents magic numbers from sneaking into the decoder and the
//! register file.

/// PPU register layout and VRAM mirror rules.
pub mod ppu {
    /// First CPU-visible PPU register address.
    pub const REGISTER_BASE: u16 = 0x2000;
    /// Last CPU address mirrored to the PPU register set.
    pub const REGISTER_MIRROR_END: u16 = 0x3FFF;
    /// Mask for decoding register mirrors (`addr & 0x0007`).
    pub const REGISTER_SELECT_MASK: u16 = 0x0007;

    /// Address mask applied to every VRAM pointer update (14-bit PPU bus).
    pub const VRAM_MIRROR_MASK: u16 = 0x3FFF;

    /// First address of the cartridge pattern memory window.
    pub const PATTERN_BASE: u16 = 0x0000;
    /// Last address (inclusive) of the pattern memory window.
    pub const PATTERN_END: u16 = 0x1FFF;
    /// Total size of both pattern tables (`$0000-$1FFF` = 8 KiB).
    pub const CHR_SIZE: usize = 0x2000;
    /// Pattern table base address for table 0.
    pub const PATTERN_TABLE_0: u16 = 0x0000;
    /// Pattern table base address for table 1.
    pub const PATTERN_TABLE_1: u16 = 0x1000;

    /// Base address of nametable 0.
    pub const NAMETABLE_BASE: u16 = 0x2000;
    /// Last address (inclusive) routed to nametable RAM.
    pub const NAMETABLE_END: u16 = 0x3EFF;
    /// Size of a single nametable in bytes.
    pub const NAMETABLE_SIZE: u16 = 0x0400;
    /// Clearing bit 12 folds `$3000-$3EFF` onto `$2000-$2EFF`.
    pub const NAMETABLE_FOLD_MASK: u16 = 0x2FFF;

    /// Size of the internal Character Internal RAM (CIRAM) used for nametables.
    /// Two physical 1 KiB tables back the four logical nametable slots.
    pub const CIRAM_SIZE: usize = 0x0800;

    /// Palette RAM base address (`$3F00`).
    pub const PALETTE_BASE: u16 = 0x3F00;
    /// Last palette address (inclusive).
    pub const PALETTE_END: u16 = 0x3FFF;
    /// Palette RAM byte count (32 bytes mirrored every 32 bytes).
    pub const PALETTE_RAM_SIZE: usize = 0x20;
    /// Palette mirroring period.
    pub const PALETTE_STRIDE: u16 = 0x20;

    /// Primary Object Attribute Memory (OAM) byte count.
    pub const OAM_RAM_SIZE: usize = 0x100;

    /// CPU register used for transferring OAM data (`$4014`).
    pub const OAM_DMA: u16 = 0x4014;
    /// Number of bytes moved by one OAM DMA transfer.
    pub const OAM_DMA_LEN: usize = 0x100;

    /// CPU-visible PPU register identifiers.
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Register {
        /// `$2000` - PPUCTRL
        Control = 0x2000,
        /// `$2001` - PPUMASK
        Mask = 0x2001,
        /// `$2002` - PPUSTATUS
        Status = 0x2002,
        /// `$2003` - OAMADDR
        OamAddr = 0x2003,
        /// `$2004` - OAMDATA
        OamData = 0x2004,
        /// `$2005` - PPUSCROLL
        Scroll = 0x2005,
        /// `$2006` - PPUADDR
        Addr = 0x2006,
        /// `$2007` - PPUDATA
        Data = 0x2007,
    }

    impl Register {
        /// Raw address backing the register.
        pub const fn addr(self) -> u16 {
            self as u16
        }

        /// Resolves the canonical register for a CPU address in `$2000-$3FFF`.
        pub const fn from_cpu_addr(addr: u16) -> Self {
            match addr & REGISTER_SELECT_MASK {
                0 => Self::Control,
                1 => Self::Mask,
                2 => Self::Status,
                3 => Self::OamAddr,
                4 => Self::OamData,
                5 => Self::Scroll,
                6 => Self::Addr,
                _ => Self::Data,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn register_mirrors_repeat_every_eight_bytes() {
            for addr in REGISTER_BASE..=REGISTER_MIRROR_END {
                let reg = Register::from_cpu_addr(addr);
                assert_eq!(reg.addr(), REGISTER_BASE + (addr & REGISTER_SELECT_MASK));
            }
        }
    }
}
