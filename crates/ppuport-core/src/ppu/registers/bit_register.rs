use bitflags::Flags;

/// Bit-indexed access shared by every 8-bit PPU flag register.
///
/// `Control`, `Mask` and `Status` are `bitflags` types; this trait gives them a
/// common get/set/replace surface so the named accessors on each register never
/// repeat the bit arithmetic.
pub trait BitRegister: Flags<Bits = u8> + Copy {
    /// Returns bit `index` (0..=7).
    #[inline]
    fn bit(&self, index: u8) -> bool {
        self.bits() & (1 << (index & 7)) != 0
    }

    /// Sets or clears bit `index` (0..=7), leaving the other bits untouched.
    #[inline]
    fn set_bit(&mut self, index: u8, value: bool) {
        let mask = 1u8 << (index & 7);
        let bits = if value {
            self.bits() | mask
        } else {
            self.bits() & !mask
        };
        *self = Self::from_bits_retain(bits);
    }

    /// Overwrites the whole register with a CPU-written byte.
    #[inline]
    fn replace(&mut self, value: u8) {
        *self = Self::from_bits_retain(value);
    }
}

impl<T: Flags<Bits = u8> + Copy> BitRegister for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ppu::registers::{Control, Mask, Status};

    #[test]
    fn set_bit_only_touches_one_bit() {
        let mut status = Status::empty();
        status.set_bit(7, true);
        status.set_bit(5, true);
        assert_eq!(status.bits(), 0b1010_0000);
        status.set_bit(7, false);
        assert_eq!(status.bits(), 0b0010_0000);
        assert!(status.bit(5));
        assert!(!status.bit(6));
    }

    #[test]
    fn replace_keeps_unnamed_bits() {
        let mut status = Status::empty();
        status.replace(0xFF);
        assert_eq!(status.bits(), 0xFF);

        let mut mask = Mask::empty();
        mask.replace(0b0001_1000);
        assert!(mask.bit(3) && mask.bit(4));
    }

    #[test]
    fn named_accessors_agree_with_bit_view() {
        let mut control = Control::empty();
        control.set_bit(2, true);
        assert_eq!(control.vram_increment(), 32);
        control.set_bit(7, true);
        assert!(control.nmi_enabled());
    }
}
