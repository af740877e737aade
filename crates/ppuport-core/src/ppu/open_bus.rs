/// PPU-local data-bus latch.
///
/// Every port access drives the PPU's internal data bus; reading a write-only
/// register returns whatever was last driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct PpuOpenBus {
    value: u8,
}

impl PpuOpenBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.value = 0;
    }

    #[inline]
    pub(crate) fn drive(&mut self, value: u8) -> u8 {
        self.value = value;
        value
    }

    #[inline]
    pub(crate) fn value(&self) -> u8 {
        self.value
    }
}
