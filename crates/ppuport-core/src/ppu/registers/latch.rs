#[cfg(feature = "savestate-serde")]
use serde::{Deserialize, Serialize};

use crate::memory::ppu as ppu_mem;

/// Which half of a two-write port the next CPU write targets.
///
/// Every write advances `First -> Second -> First`; only a `$2002` read forces
/// the phase back to `First`.
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LatchPhase {
    /// Next write fills the high (first) byte.
    #[default]
    First,
    /// Next write fills the low (second) byte.
    Second,
}

impl LatchPhase {
    #[inline]
    fn index(self) -> usize {
        match self {
            LatchPhase::First => 0,
            LatchPhase::Second => 1,
        }
    }

    #[inline]
    fn toggled(self) -> Self {
        match self {
            LatchPhase::First => LatchPhase::Second,
            LatchPhase::Second => LatchPhase::First,
        }
    }
}

/// Two-byte register filled by consecutive 8-bit writes (`$2005`/`$2006`).
///
/// The combined value is `first << 8 | second`, masked with `MASK` after
/// every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PairLatch<const MASK: u16> {
    bytes: [u8; 2],
    phase: LatchPhase,
}

/// `$2006` PPUADDR: 14-bit VRAM pointer.
pub type AddrLatch = PairLatch<{ ppu_mem::VRAM_MIRROR_MASK }>;

/// `$2005` PPUSCROLL: horizontal then vertical scroll byte.
pub type ScrollLatch = PairLatch<0xFFFF>;

impl<const MASK: u16> PairLatch<MASK> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a latch from raw parts, re-applying the mask.
    pub fn from_parts(bytes: [u8; 2], phase: LatchPhase) -> Self {
        let mut latch = Self { bytes, phase };
        latch.set16(latch.get16());
        latch
    }

    /// Stores `value` in the slot selected by the phase, then flips the phase.
    pub fn write(&mut self, value: u8) {
        self.bytes[self.phase.index()] = value;
        self.phase = self.phase.toggled();
        self.set16(self.get16());
    }

    /// Combined value, first byte high.
    #[inline]
    pub fn get16(&self) -> u16 {
        u16::from_be_bytes(self.bytes)
    }

    /// Replaces both bytes at once. The phase is left alone.
    #[inline]
    pub fn set16(&mut self, value: u16) {
        self.bytes = (value & MASK).to_be_bytes();
    }

    /// Adds `step` to the combined value and re-applies the mask.
    #[inline]
    pub fn increment(&mut self, step: u16) {
        self.set16(self.get16().wrapping_add(step));
    }

    /// Points the next write back at the first byte without touching the data.
    #[inline]
    pub fn reset_toggle(&mut self) {
        self.phase = LatchPhase::First;
    }

    #[inline]
    pub fn phase(&self) -> LatchPhase {
        self.phase
    }

    #[inline]
    pub fn bytes(&self) -> [u8; 2] {
        self.bytes
    }
}

impl ScrollLatch {
    /// First byte written: horizontal scroll.
    pub fn horizontal(&self) -> u8 {
        self.bytes[0]
    }

    /// Second byte written: vertical scroll.
    pub fn vertical(&self) -> u8 {
        self.bytes[1]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn third_write_replaces_high_byte() {
        let mut addr = AddrLatch::new();
        addr.write(0x21);
        addr.write(0x08);
        assert_eq!(addr.get16(), 0x2108);
        addr.write(0x23);
        assert_eq!(addr.get16(), 0x2308);
        assert_eq!(addr.phase(), LatchPhase::Second);
    }

    #[test]
    fn address_wraps_to_fourteen_bits() {
        let mut addr = AddrLatch::new();
        addr.write(0xFF);
        addr.write(0xFF);
        assert_eq!(addr.get16(), 0x3FFF);

        addr.set16(0x7F00);
        assert_eq!(addr.get16(), 0x3F00);

        addr.set16(0x3FFF);
        addr.increment(1);
        assert_eq!(addr.get16(), 0x0000);

        addr.set16(0x3FF0);
        addr.increment(32);
        assert_eq!(addr.get16(), 0x0010);
    }

    #[test]
    fn reset_toggle_keeps_stored_bytes() {
        let mut addr = AddrLatch::new();
        addr.write(0x12);
        addr.reset_toggle();
        assert_eq!(addr.get16(), 0x1200);
        addr.write(0x24);
        addr.write(0x56);
        assert_eq!(addr.get16(), 0x2456);
    }

    #[test]
    fn scroll_is_unmasked() {
        let mut scroll = ScrollLatch::new();
        scroll.write(0xF8);
        scroll.write(0xEF);
        assert_eq!(scroll.horizontal(), 0xF8);
        assert_eq!(scroll.vertical(), 0xEF);
        assert_eq!(scroll.get16(), 0xF8EF);
    }

    #[test]
    fn from_parts_reapplies_mask() {
        let addr = AddrLatch::from_parts([0xFF, 0x01], LatchPhase::Second);
        assert_eq!(addr.get16(), 0x3F01);
        assert_eq!(addr.phase(), LatchPhase::Second);
    }

    proptest! {
        #[test]
        fn pair_of_writes_forms_masked_address(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
            let mut addr = AddrLatch::new();
            addr.write(a);
            addr.write(b);
            prop_assert_eq!(addr.get16(), (u16::from(a) << 8 | u16::from(b)) & 0x3FFF);
            addr.write(c);
            prop_assert_eq!(addr.get16(), (u16::from(c) << 8 | u16::from(b)) & 0x3FFF);
        }

        #[test]
        fn increment_never_leaves_fourteen_bits(start in any::<u16>(), step in prop::sample::select(vec![1u16, 32])) {
            let mut addr = AddrLatch::new();
            addr.set16(start);
            addr.increment(step);
            prop_assert_eq!(addr.get16(), (start & 0x3FFF).wrapping_add(step) & 0x3FFF);
        }
    }
}
