//! The PPU's 14-bit address space and its backing stores.
//!
//! ```text
//! $0000-$1FFF  pattern memory (cartridge CHR ROM/RAM)
//! $2000-$3EFF  nametable RAM, through the cartridge mirroring
//! $3F00-$3FFF  palette RAM, 32 bytes repeated eight times
//! ```
//!
//! Sprite memory (OAM) sits on its own bus but lives here too so that one
//! value owns every byte of PPU storage.

use tracing::debug;

use crate::{
    mem_block::ppu::{Ciram, OamRam, PaletteRam},
    memory::ppu as ppu_mem,
    mirroring::{self, Mirroring},
    pattern::PatternMemory,
};

/// Coarse routing of a PPU address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Pattern,
    Nametable,
    Palette,
}

impl Region {
    /// Classifies `addr` after folding it into the 14-bit PPU bus.
    pub const fn of(addr: u16) -> Self {
        match addr & ppu_mem::VRAM_MIRROR_MASK {
            ppu_mem::PATTERN_BASE..=ppu_mem::PATTERN_END => Region::Pattern,
            ppu_mem::NAMETABLE_BASE..=ppu_mem::NAMETABLE_END => Region::Nametable,
            _ => Region::Palette,
        }
    }
}

/// Owner of pattern memory, nametable RAM, palette RAM and OAM.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemorySpace {
    pattern: PatternMemory,
    ciram: Ciram,
    palette_ram: PaletteRam,
    oam: OamRam,
    mirroring: Mirroring,
}

impl MemorySpace {
    pub fn new(pattern: PatternMemory, mirroring: Mirroring) -> Self {
        Self {
            pattern,
            ciram: Ciram::new(),
            palette_ram: PaletteRam::new(),
            oam: OamRam::new(),
            mirroring,
        }
    }

    /// Clears the console-side RAM. Pattern memory belongs to the cartridge and is kept.
    pub fn reset(&mut self) {
        self.ciram.fill(0);
        self.palette_ram.fill(0);
        self.oam.fill(0);
    }

    pub fn read(&self, addr: u16) -> u8 {
        let addr = addr & ppu_mem::VRAM_MIRROR_MASK;
        match Region::of(addr) {
            Region::Pattern => self.pattern.read(addr),
            Region::Nametable => self.ciram[self.ciram_index(addr)],
            Region::Palette => self.palette_ram[palette_index(addr)],
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        let addr = addr & ppu_mem::VRAM_MIRROR_MASK;
        match Region::of(addr) {
            Region::Pattern => {
                if !self.pattern.write(addr, value) {
                    debug!(addr = format_args!("{addr:#06X}"), "write to CHR ROM dropped");
                }
            }
            Region::Nametable => {
                let index = self.ciram_index(addr);
                self.ciram[index] = value;
            }
            Region::Palette => self.palette_ram[palette_index(addr)] = value,
        }
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn pattern(&self) -> &PatternMemory {
        &self.pattern
    }

    pub(crate) fn pattern_mut(&mut self) -> &mut PatternMemory {
        &mut self.pattern
    }

    pub fn ciram(&self) -> &Ciram {
        &self.ciram
    }

    pub(crate) fn ciram_mut(&mut self) -> &mut Ciram {
        &mut self.ciram
    }

    pub fn palette_ram(&self) -> &PaletteRam {
        &self.palette_ram
    }

    pub(crate) fn palette_ram_mut(&mut self) -> &mut PaletteRam {
        &mut self.palette_ram
    }

    pub fn oam(&self) -> &OamRam {
        &self.oam
    }

    pub(crate) fn oam_mut(&mut self) -> &mut OamRam {
        &mut self.oam
    }

    #[inline]
    fn ciram_index(&self, addr: u16) -> usize {
        mirroring::decode(self.mirroring, addr) as usize
    }
}

/// Index into the 32-byte palette table for any address in `$3F00-$3FFF`.
#[inline]
pub(crate) fn palette_index(addr: u16) -> usize {
    let relative = (addr & ppu_mem::VRAM_MIRROR_MASK).wrapping_sub(ppu_mem::PALETTE_BASE);
    (relative % ppu_mem::PALETTE_STRIDE) as usize
}
