//! Nametable mirroring.
//!
//! The console carries 2 KiB of nametable RAM (CIRAM), enough for two physical
//! 1 KiB tables, while the PPU address space exposes four logical nametables at
//! `$2000`, `$2400`, `$2800` and `$2C00`. The cartridge wires CIRAM A10 to one of
//! the PPU address lines, which folds the four logical slots onto the two
//! physical tables:
//!
//! ```text
//! quadrant      horizontal   vertical
//! 0 ($2000)         0            0
//! 1 ($2400)         0            1
//! 2 ($2800)         1            0
//! 3 ($2C00)         1            1
//! ```

#[cfg(feature = "savestate-serde")]
use serde::{Deserialize, Serialize};

use crate::memory::ppu as ppu_mem;

/// Layout mirroring type for the PPU nametables, fixed by the cartridge wiring.
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mirroring {
    /// Two horizontal nametables that mirror vertically (`$2000 == $2400`).
    #[default]
    Horizontal,
    /// Two vertical nametables that mirror horizontally (`$2000 == $2800`).
    Vertical,
}

impl Mirroring {
    /// Physical 1 KiB table (0 or 1) backing a logical nametable quadrant (0..3).
    #[inline]
    pub const fn physical_table(self, quadrant: u16) -> u16 {
        match self {
            Mirroring::Horizontal => (quadrant >> 1) & 1,
            Mirroring::Vertical => quadrant & 1,
        }
    }
}

/// Maps a PPU address in `$2000-$3EFF` to an offset into the 2 KiB CIRAM.
///
/// `$3000-$3EFF` is first folded onto `$2000-$2EFF`. The result is always
/// below [`ppu_mem::CIRAM_SIZE`].
#[inline]
pub const fn decode(mode: Mirroring, addr: u16) -> u16 {
    let folded = addr & ppu_mem::NAMETABLE_FOLD_MASK;
    let relative = folded.wrapping_sub(ppu_mem::NAMETABLE_BASE) & 0x0FFF;
    let quadrant = relative / ppu_mem::NAMETABLE_SIZE;
    let within = relative % ppu_mem::NAMETABLE_SIZE;
    within + mode.physical_table(quadrant) * ppu_mem::NAMETABLE_SIZE
}
