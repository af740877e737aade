#![allow(dead_code)]

use anyhow::{Context, Result};
use ppuport_core::{
    Mirroring, PatternAccess, Ppu, PpuConfig,
    memory::ppu::{OAM_DMA, REGISTER_BASE, REGISTER_MIRROR_END, Register},
};

pub const CHR_SIZE: usize = 0x2000;

/// CHR image whose byte at `addr` is the low byte of `addr` xor the high byte.
pub fn chr_pattern() -> Vec<u8> {
    (0..CHR_SIZE)
        .map(|i| (i as u8) ^ ((i >> 8) as u8))
        .collect()
}

pub fn new_ppu(mirroring: Mirroring, access: PatternAccess) -> Result<Ppu> {
    let config = PpuConfig::new(mirroring).with_pattern_access(access);
    Ppu::with_config(chr_pattern(), config).context("building PPU")
}

/// Issues the two `$2006` writes the way a game would.
pub fn set_vram_addr(ppu: &mut Ppu, addr: u16) {
    let [hi, lo] = addr.to_be_bytes();
    ppu.cpu_write(Register::Addr.addr(), hi);
    ppu.cpu_write(Register::Addr.addr(), lo);
}

/// Flat 64 KiB CPU address space used as an OAM DMA source.
pub struct CpuMemory {
    pub bytes: Vec<u8>,
    pub reads: usize,
}

impl CpuMemory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; 0x10000],
            reads: 0,
        }
    }
}

impl ppuport_core::DmaSource for CpuMemory {
    fn dma_read(&mut self, addr: u16) -> u8 {
        self.reads += 1;
        self.bytes[addr as usize]
    }
}

/// Minimal CPU-side bus: PPU register window, the DMA port, and flat RAM elsewhere.
pub struct Console {
    pub ppu: Ppu,
    pub cpu: CpuMemory,
}

impl Console {
    pub fn new(ppu: Ppu) -> Self {
        Self {
            ppu,
            cpu: CpuMemory::new(),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            REGISTER_BASE..=REGISTER_MIRROR_END => self.ppu.cpu_write(addr, value),
            OAM_DMA => self.ppu.oam_dma(value, &mut self.cpu),
            _ => self.cpu.bytes[addr as usize] = value,
        }
    }
}
