#[cfg(feature = "savestate-serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::PatternAccess,
    error::Error,
    mem_block::ppu::{Ciram, OamRam, PaletteRam},
    mirroring::Mirroring,
    ppu::{AddrLatch, Control, LatchPhase, Mask, Ppu, ScrollLatch, Status},
    state::{SaveState, Snapshot, SnapshotMeta},
};

/// Serializable snapshot of the PPU register file and console-side RAM.
///
/// CHR ROM is not captured since it comes back with the cartridge; CHR RAM is.
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpuState {
    pub control: u8,
    pub mask: u8,
    pub status: u8,
    pub oam_addr: u8,
    pub scroll: [u8; 2],
    pub scroll_phase: LatchPhase,
    pub addr: [u8; 2],
    pub addr_phase: LatchPhase,
    pub vram_buffer: u8,
    pub open_bus: u8,
    pub mirroring: Mirroring,
    pub pattern_access: PatternAccess,
    /// CHR RAM contents; empty for CHR ROM.
    pub chr_ram: Vec<u8>,
    pub ciram: Vec<u8>,
    pub palette_ram: Vec<u8>,
    pub oam: Vec<u8>,
}

impl SaveState for Ppu {
    type Full = PpuState;
    type Error = Error;
    type Meta = SnapshotMeta;

    fn save_full(&self, mut meta: Self::Meta) -> Result<Snapshot<Self::Full, Self::Meta>, Self::Error> {
        meta.format_version = Self::FORMAT_VERSION;
        let regs = &self.registers;
        let mem = &self.memory;
        let pattern_access = mem.pattern().access();
        let chr_ram = match pattern_access {
            PatternAccess::Writable => mem.pattern().as_slice().to_vec(),
            PatternAccess::ReadOnly => Vec::new(),
        };
        Ok(Snapshot {
            meta,
            data: PpuState {
                control: regs.control.bits(),
                mask: regs.mask.bits(),
                status: regs.status.bits(),
                oam_addr: regs.oam_addr,
                scroll: regs.scroll.bytes(),
                scroll_phase: regs.scroll.phase(),
                addr: regs.addr.bytes(),
                addr_phase: regs.addr.phase(),
                vram_buffer: regs.vram_buffer,
                open_bus: self.open_bus.value(),
                mirroring: mem.mirroring(),
                pattern_access,
                chr_ram,
                ciram: mem.ciram().to_vec(),
                palette_ram: mem.palette_ram().to_vec(),
                oam: mem.oam().to_vec(),
            },
        })
    }

    fn load_full(
        &mut self,
        snapshot: &Snapshot<Self::Full, Self::Meta>,
    ) -> Result<(), Self::Error> {
        if snapshot.meta.format_version != Self::FORMAT_VERSION {
            return Err(Error::CorruptState("unsupported format version"));
        }
        let state = &snapshot.data;
        if state.mirroring != self.memory.mirroring() {
            return Err(Error::CorruptState("mirroring does not match cartridge"));
        }
        if state.pattern_access != self.memory.pattern().access() {
            return Err(Error::CorruptState("pattern memory kind does not match cartridge"));
        }
        if state.pattern_access == PatternAccess::Writable
            && state.chr_ram.len() != self.memory.pattern().len()
        {
            return Err(Error::CorruptState("CHR RAM size mismatch"));
        }
        let ciram = Ciram::try_from_slice(&state.ciram)
            .ok_or(Error::CorruptState("nametable RAM size mismatch"))?;
        let palette_ram = PaletteRam::try_from_slice(&state.palette_ram)
            .ok_or(Error::CorruptState("palette RAM size mismatch"))?;
        let oam = OamRam::try_from_slice(&state.oam)
            .ok_or(Error::CorruptState("OAM size mismatch"))?;

        let regs = &mut self.registers;
        regs.control = Control::from_bits_retain(state.control);
        regs.mask = Mask::from_bits_retain(state.mask);
        regs.status = Status::from_bits_retain(state.status);
        regs.oam_addr = state.oam_addr;
        regs.scroll = ScrollLatch::from_parts(state.scroll, state.scroll_phase);
        regs.addr = AddrLatch::from_parts(state.addr, state.addr_phase);
        regs.vram_buffer = state.vram_buffer;
        self.open_bus.drive(state.open_bus);

        if state.pattern_access == PatternAccess::Writable {
            self.memory
                .pattern_mut()
                .as_mut_slice()
                .copy_from_slice(&state.chr_ram);
        }
        *self.memory.ciram_mut() = ciram;
        *self.memory.palette_ram_mut() = palette_ram;
        *self.memory.oam_mut() = oam;
        Ok(())
    }
}

#[cfg(feature = "savestate-postcard")]
impl PpuState {
    pub fn to_postcard_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_stdvec(self)
    }

    pub fn from_postcard_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

#[cfg(feature = "savestate-postcard")]
impl Snapshot<PpuState, SnapshotMeta> {
    pub fn to_postcard_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_stdvec(self)
    }

    pub fn from_postcard_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
