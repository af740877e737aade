//! Picture Processing Unit (PPU) register file and address space.
//!
//! The NES PPU exposes eight CPU-facing registers between `$2000` and `$2007`,
//! mirrored every eight bytes through `$3FFF`, plus the OAM DMA port at
//! `$4014`. This module covers that register layer and the PPU address space
//! behind it. Pixel rendering and dot timing live elsewhere; a renderer reads
//! state through the accessors here and reports VBlank and sprite flags back
//! through the `set_*` hooks.

pub mod dma;
pub mod memory_space;
pub mod registers;

mod open_bus;

use tracing::debug;

use crate::{
    config::PpuConfig,
    error::Error,
    mem_block::ppu::{Ciram, OamRam, PaletteRam},
    memory::ppu::{self as ppu_mem, Register as PpuRegister},
    mirroring::Mirroring,
    pattern::PatternMemory,
};
use dma::DmaSource;
use memory_space::MemorySpace;
use open_bus::PpuOpenBus;
pub use registers::{
    AddrLatch, BitRegister, Control, LatchPhase, Mask, PairLatch, Registers, ScrollLatch, Status,
};

/// Entry points for the CPU PPU register mirror.
///
/// One value owns every piece of PPU state. Reads mutate latches, so all access
/// goes through `&mut self`; a host running the renderer on another thread must
/// serialize access to the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ppu {
    /// Collection of CPU visible registers and their helper latches.
    pub(crate) registers: Registers,
    /// Pattern memory, nametable RAM, palette RAM and OAM.
    pub(crate) memory: MemorySpace,
    pub(crate) open_bus: PpuOpenBus,
}

impl Ppu {
    /// Creates a PPU over read-only pattern memory with the given mirroring.
    pub fn new(pattern: impl Into<Box<[u8]>>, mirroring: Mirroring) -> Result<Self, Error> {
        Self::with_config(pattern, PpuConfig::new(mirroring))
    }

    /// Creates a PPU using an explicit configuration.
    ///
    /// Fails with [`Error::EmptyPatternMemory`] when `pattern` is empty.
    pub fn with_config(pattern: impl Into<Box<[u8]>>, config: PpuConfig) -> Result<Self, Error> {
        let pattern = PatternMemory::new(pattern, config.pattern_access)?;
        debug!(
            pattern_len = pattern.len(),
            access = %config.pattern_access,
            mirroring = ?config.mirroring,
            "PPU created"
        );
        Ok(Self {
            registers: Registers::new(),
            memory: MemorySpace::new(pattern, config.mirroring),
            open_bus: PpuOpenBus::new(),
        })
    }

    /// Restores the device to its power-on state. Pattern memory is kept.
    pub fn reset(&mut self) {
        debug!("PPU reset");
        self.registers.reset();
        self.memory.reset();
        self.open_bus.reset();
    }

    /// Handles CPU writes to the mirrored PPU register space (`$2000-$3FFF`).
    pub fn cpu_write(&mut self, addr: u16, value: u8) {
        match PpuRegister::from_cpu_addr(addr) {
            PpuRegister::Control => self.write_control(value),
            PpuRegister::Mask => self.write_mask(value),
            PpuRegister::Status => {
                // read-only
                self.open_bus.drive(value);
            }
            PpuRegister::OamAddr => self.write_oam_addr(value),
            PpuRegister::OamData => self.write_oam_data(value),
            PpuRegister::Scroll => self.write_scroll(value),
            PpuRegister::Addr => self.write_addr(value),
            PpuRegister::Data => self.write_data(value),
        }
    }

    /// Handles CPU reads from the mirrored PPU register space (`$2000-$3FFF`).
    pub fn cpu_read(&mut self, addr: u16) -> u8 {
        match PpuRegister::from_cpu_addr(addr) {
            PpuRegister::Status => self.read_status(),
            PpuRegister::OamData => self.read_oam_data(),
            PpuRegister::Data => self.read_data(),
            _ => self.open_bus.value(),
        }
    }

    pub fn write_control(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_control(value);
    }

    pub fn write_mask(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_mask(value);
    }

    pub fn write_oam_addr(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_oam_addr(value);
    }

    pub fn write_oam_data(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_oam_data(&mut self.memory, value);
    }

    pub fn read_oam_data(&mut self) -> u8 {
        let value = self.registers.read_oam_data(&self.memory);
        self.open_bus.drive(value)
    }

    pub fn write_scroll(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_scroll(value);
    }

    pub fn write_addr(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_addr(value);
    }

    pub fn write_data(&mut self, value: u8) {
        self.open_bus.drive(value);
        self.registers.write_data(&mut self.memory, value);
    }

    pub fn read_data(&mut self) -> u8 {
        let value = self.registers.read_data(&self.memory);
        self.open_bus.drive(value)
    }

    pub fn read_status(&mut self) -> u8 {
        let value = self.registers.read_status();
        self.open_bus.drive(value)
    }

    /// `$4014`: copies CPU page `page` (`page * 0x100 ..= page * 0x100 + 0xFF`) into OAM.
    ///
    /// The OAM pointer is neither used nor moved.
    pub fn oam_dma<S>(&mut self, page: u8, source: &mut S)
    where
        S: DmaSource + ?Sized,
    {
        dma::transfer(page, source, self.memory.oam_mut());
    }

    /// `$4014` with a page the host has already read.
    pub fn oam_dma_page(&mut self, page: &[u8; ppu_mem::OAM_DMA_LEN]) {
        dma::transfer_page(page, self.memory.oam_mut());
    }

    /// NMI output: VBlank is set and `$2000` bit 7 enables the interrupt.
    pub fn nmi_requested(&self) -> bool {
        self.registers.control.nmi_enabled() && self.registers.status.in_vblank()
    }

    /// Renderer hook: VBlank start (`true`) or end (`false`).
    pub fn set_vblank(&mut self, value: bool) {
        self.registers.status.set_vblank(value);
    }

    pub fn set_sprite_zero_hit(&mut self, value: bool) {
        self.registers.status.set_sprite_zero_hit(value);
    }

    pub fn set_sprite_overflow(&mut self, value: bool) {
        self.registers.status.set_sprite_overflow(value);
    }

    /// Pre-render line: drops VBlank, sprite-zero hit and sprite overflow together.
    pub fn clear_frame_flags(&mut self) {
        self.registers.status = Status::empty();
    }

    pub fn control(&self) -> Control {
        self.registers.control
    }

    pub fn mask(&self) -> Mask {
        self.registers.mask
    }

    pub fn status(&self) -> Status {
        self.registers.status
    }

    pub fn scroll(&self) -> ScrollLatch {
        self.registers.scroll
    }

    /// Current 14-bit VRAM pointer.
    pub fn vram_addr(&self) -> u16 {
        self.registers.addr.get16()
    }

    pub fn oam_addr(&self) -> u8 {
        self.registers.oam_addr
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &MemorySpace {
        &self.memory
    }

    pub fn mirroring(&self) -> Mirroring {
        self.memory.mirroring()
    }

    pub fn pattern(&self) -> &PatternMemory {
        self.memory.pattern()
    }

    pub fn nametable_ram(&self) -> &Ciram {
        self.memory.ciram()
    }

    pub fn palette_ram(&self) -> &PaletteRam {
        self.memory.palette_ram()
    }

    pub fn oam(&self) -> &OamRam {
        self.memory.oam()
    }

    /// Reads the PPU address space without buffering or moving any latch.
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }
}
