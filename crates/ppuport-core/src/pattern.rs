//! Cartridge pattern memory (CHR) as seen from the PPU.
//!
//! Boards expose either CHR ROM or CHR RAM in `$0000-$1FFF`. Both are a flat
//! byte array here; the only difference is whether data-port writes land.
//! Accesses wrap modulo the store length so a short CHR image can never be
//! indexed out of bounds.

use crate::{config::PatternAccess, error::Error, memory::ppu as ppu_mem};

/// PPU-side pattern storage.
///
/// Fields are private so every store goes through [`PatternMemory::new`] and
/// is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternMemory {
    bytes: Box<[u8]>,
    access: PatternAccess,
}

impl PatternMemory {
    /// Wraps `data` with the requested access kind.
    ///
    /// Fails with [`Error::EmptyPatternMemory`] when `data` is empty.
    pub fn new(data: impl Into<Box<[u8]>>, access: PatternAccess) -> Result<Self, Error> {
        let bytes = data.into();
        if bytes.is_empty() {
            return Err(Error::EmptyPatternMemory);
        }
        Ok(Self { bytes, access })
    }

    /// Read a byte from pattern space, wrapping to the store length.
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Self::offset(addr) % self.bytes.len()]
    }

    /// Write a byte to CHR RAM. Returns `false` when the write was dropped
    /// because the store is ROM.
    pub fn write(&mut self, addr: u16, data: u8) -> bool {
        match self.access {
            PatternAccess::Writable => {
                let len = self.bytes.len();
                self.bytes[Self::offset(addr) % len] = data;
                true
            }
            PatternAccess::ReadOnly => false,
        }
    }

    /// Access kind this store was built with.
    pub fn access(&self) -> PatternAccess {
        self.access
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Raw view for save-state restore; bypasses the ROM write guard.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; construction rejects empty stores.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    fn offset(addr: u16) -> usize {
        (addr & ppu_mem::PATTERN_END) as usize
    }
}
