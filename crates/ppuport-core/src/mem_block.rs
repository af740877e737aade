//! Fixed-size backing stores for the PPU address space.
//!
//! Stores live inline by default; the `boxed-memblock` feature moves them to
//! the heap for targets with small stacks.

use core::ops::{Deref, DerefMut};

#[cfg(feature = "boxed-memblock")]
type MemBlockStorage<T, const N: usize> = Box<[T; N]>;

#[cfg(not(feature = "boxed-memblock"))]
type MemBlockStorage<T, const N: usize> = [T; N];

#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemBlock<T, const N: usize>(MemBlockStorage<T, N>);

/// Convenience alias for a `MemBlock` of bytes.
pub type ByteBlock<const N: usize> = MemBlock<u8, N>;

pub mod ppu {
    use crate::memory::ppu as ppu_mem;

    /// Character Internal RAM (CIRAM) - the console's 2 KiB nametable RAM.
    pub type Ciram = super::ByteBlock<{ ppu_mem::CIRAM_SIZE }>;
    /// 32-entry palette color-index table.
    pub type PaletteRam = super::ByteBlock<{ ppu_mem::PALETTE_RAM_SIZE }>;
    /// Primary sprite memory: 64 entries of 4 bytes.
    pub type OamRam = super::ByteBlock<{ ppu_mem::OAM_RAM_SIZE }>;
}

impl<T, const N: usize> MemBlock<T, N> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        #[cfg(feature = "boxed-memblock")]
        {
            &*self.0
        }
        #[cfg(not(feature = "boxed-memblock"))]
        {
            &self.0
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        #[cfg(feature = "boxed-memblock")]
        {
            &mut *self.0
        }
        #[cfg(not(feature = "boxed-memblock"))]
        {
            &mut self.0
        }
    }
}

impl<T: Copy + Default, const N: usize> MemBlock<T, N> {
    pub fn new() -> Self {
        Self(new_storage())
    }

    /// Builds a block from `src`, returning `None` when the length differs from `N`.
    pub fn try_from_slice(src: &[T]) -> Option<Self> {
        if src.len() != N {
            return None;
        }
        let mut block = Self::new();
        block.as_mut_slice().copy_from_slice(src);
        Some(block)
    }
}

impl<T: Copy + Default, const N: usize> Default for MemBlock<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for MemBlock<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for MemBlock<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

#[cfg(not(feature = "boxed-memblock"))]
impl<T: Copy, const N: usize> Copy for MemBlock<T, N> {}

#[cfg(feature = "boxed-memblock")]
fn new_storage<T: Copy + Default, const N: usize>() -> MemBlockStorage<T, N> {
    Box::new([T::default(); N])
}

#[cfg(not(feature = "boxed-memblock"))]
fn new_storage<T: Copy + Default, const N: usize>() -> MemBlockStorage<T, N> {
    [T::default(); N]
}

#[cfg(test)]
mod tests {
    use super::ppu::PaletteRam;
    use super::*;

    #[test]
    fn try_from_slice_checks_length() {
        assert!(PaletteRam::try_from_slice(&[0; 31]).is_none());
        let block = ByteBlock::<4>::try_from_slice(&[1, 2, 3, 4]).expect("length matches");
        assert_eq!(block.as_slice(), &[1, 2, 3, 4]);
    }
}
