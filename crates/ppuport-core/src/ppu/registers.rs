//! CPU-visible PPU register state and the data-port state machine.
//!
//! This module mirrors the `$2000-$2007` register set. Reads and writes are
//! order dependent: `$2005`/`$2006` share a write toggle that a `$2002` read
//! resets, and `$2007` reads below the palette are delayed by one byte through
//! the internal read buffer.

mod bit_register;
mod control;
mod latch;
mod mask;
mod status;

pub use bit_register::BitRegister;
pub use control::Control;
pub use latch::{AddrLatch, LatchPhase, PairLatch, ScrollLatch};
pub use mask::Mask;
pub use status::Status;

use tracing::trace;

use super::memory_space::{MemorySpace, Region};

/// Aggregates the state of all CPU visible PPU registers.
///
/// Backing stores are owned by [`MemorySpace`]; every port that touches them
/// borrows it for the duration of the call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Registers {
    /// Control register (`$2000`).
    pub(crate) control: Control,
    /// Mask register (`$2001`).
    pub(crate) mask: Mask,
    /// Status register (`$2002`).
    pub(crate) status: Status,
    /// Current OAM pointer driven by `$2003`/`$2004`.
    pub(crate) oam_addr: u8,
    /// Scroll latch (`$2005`).
    pub(crate) scroll: ScrollLatch,
    /// VRAM address latch (`$2006`).
    pub(crate) addr: AddrLatch,
    /// Internal buffer implementing the delayed `$2007` read behavior.
    pub(crate) vram_buffer: u8,
}

impl Registers {
    /// Creates a new register block with the power-on reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores all register values to their reset defaults.
    pub fn reset(&mut self) {
        *self = Registers::new();
    }

    pub fn write_control(&mut self, value: u8) {
        trace!("PPUCTRL <- {value:#04X}");
        self.control.replace(value);
    }

    pub fn write_mask(&mut self, value: u8) {
        trace!("PPUMASK <- {value:#04X}");
        self.mask.replace(value);
    }

    /// `$2002` read: returns the flags as they were, then clears VBlank and
    /// resets both write toggles.
    pub fn read_status(&mut self) -> u8 {
        let snapshot = self.status.bits();
        self.status.set_vblank(false);
        self.addr.reset_toggle();
        self.scroll.reset_toggle();
        snapshot
    }

    pub fn write_oam_addr(&mut self, value: u8) {
        trace!("OAMADDR <- {value:#04X}");
        self.oam_addr = value;
    }

    /// `$2004` write: stores at the OAM pointer, then advances it (wrapping).
    pub fn write_oam_data(&mut self, memory: &mut MemorySpace, value: u8) {
        trace!("OAMDATA <- {value:#04X}");
        memory.oam_mut()[self.oam_addr as usize] = value;
        self.oam_addr = self.oam_addr.wrapping_add(1);
    }

    /// `$2004` read: returns the byte at the OAM pointer without advancing it.
    pub fn read_oam_data(&self, memory: &MemorySpace) -> u8 {
        memory.oam()[self.oam_addr as usize]
    }

    pub fn write_scroll(&mut self, value: u8) {
        trace!("PPUSCROLL <- {value:#04X}");
        self.scroll.write(value);
    }

    pub fn write_addr(&mut self, value: u8) {
        trace!("PPUADDR <- {value:#04X}");
        self.addr.write(value);
    }

    /// `$2007` write: stores at the VRAM pointer, then advances it by 1 or 32.
    pub fn write_data(&mut self, memory: &mut MemorySpace, value: u8) {
        trace!("PPUDATA <- {value:#04X}");
        memory.write(self.addr.get16(), value);
        self.addr.increment(self.control.vram_increment());
    }

    /// `$2007` read.
    ///
    /// Palette addresses answer immediately. Everything below `$3F00` returns
    /// the byte fetched by the previous read and refills the buffer from the
    /// current address, so the first read after setting `$2006` yields stale
    /// data.
    pub fn read_data(&mut self, memory: &MemorySpace) -> u8 {
        let addr = self.addr.get16();
        let value = match Region::of(addr) {
            Region::Palette => memory.read(addr),
            Region::Pattern | Region::Nametable => {
                let buffered = self.vram_buffer;
                self.vram_buffer = memory.read(addr);
                buffered
            }
        };
        self.addr.increment(self.control.vram_increment());
        value
    }
}
