//! OAM DMA (`$4014`): bulk copy of one CPU page into sprite memory.
//!
//! The transfer always fills OAM from index 0 through 255. Source bytes come
//! from the host's CPU address space through [`DmaSource`]; bounds checking of
//! that space is the host's job.

use tracing::trace;

use crate::{mem_block::ppu::OamRam, memory::ppu as ppu_mem};

/// CPU-memory view used by OAM DMA to fetch source bytes.
///
/// `addr` is the full CPU address, `page << 8 | offset`. Implementations should
/// behave like a CPU read, side effects included.
pub trait DmaSource {
    fn dma_read(&mut self, addr: u16) -> u8;
}

impl<F> DmaSource for F
where
    F: FnMut(u16) -> u8,
{
    #[inline]
    fn dma_read(&mut self, addr: u16) -> u8 {
        self(addr)
    }
}

/// Performs the 256 sequential reads and writes of one transfer.
pub(crate) fn transfer<S>(page: u8, source: &mut S, oam: &mut OamRam)
where
    S: DmaSource + ?Sized,
{
    trace!(page = format_args!("{page:#04X}"), "OAM DMA");
    let base = u16::from(page) << 8;
    for (offset, slot) in oam.iter_mut().enumerate() {
        *slot = source.dma_read(base | offset as u16);
    }
}

/// Copies a page the host has already read out of CPU memory.
pub(crate) fn transfer_page(page: &[u8; ppu_mem::OAM_DMA_LEN], oam: &mut OamRam) {
    oam.copy_from_slice(page);
}
