use core::fmt;

#[cfg(feature = "savestate-serde")]
use serde::{Deserialize, Serialize};

use crate::mirroring::Mirroring;

/// Whether the PPU data port may write into pattern memory.
///
/// Most boards ship CHR ROM, but some carry CHR RAM that games fill through
/// `$2007`. The choice belongs to the cartridge, so the store carries it.
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternAccess {
    /// CHR ROM: data-port writes are ignored.
    #[default]
    ReadOnly,
    /// CHR RAM: data-port writes land in pattern memory.
    Writable,
}

impl PatternAccess {
    /// Resolve the access kind from the iNES CHR ROM bank count.
    ///
    /// A header advertising zero CHR ROM banks implies the board carries CHR RAM.
    pub fn from_chr_rom_banks(banks: u8) -> Self {
        if banks == 0 {
            PatternAccess::Writable
        } else {
            PatternAccess::ReadOnly
        }
    }
}

impl fmt::Display for PatternAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternAccess::ReadOnly => "chr-rom",
            PatternAccess::Writable => "chr-ram",
        };
        f.write_str(s)
    }
}

/// Construction-time settings supplied by the cartridge loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PpuConfig {
    /// Hard-wired nametable mirroring.
    pub mirroring: Mirroring,
    /// Whether pattern memory is ROM or RAM.
    pub pattern_access: PatternAccess,
}

impl PpuConfig {
    pub fn new(mirroring: Mirroring) -> Self {
        Self {
            mirroring,
            pattern_access: PatternAccess::default(),
        }
    }

    pub fn with_mirroring(mut self, mirroring: Mirroring) -> Self {
        self.mirroring = mirroring;
        self
    }

    pub fn with_pattern_access(mut self, access: PatternAccess) -> Self {
        self.pattern_access = access;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_chr_banks_means_chr_ram() {
        assert_eq!(PatternAccess::from_chr_rom_banks(0), PatternAccess::Writable);
        assert_eq!(PatternAccess::from_chr_rom_banks(1), PatternAccess::ReadOnly);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = PpuConfig::default()
            .with_mirroring(Mirroring::Vertical)
            .with_pattern_access(PatternAccess::Writable);
        assert_eq!(config.mirroring, Mirroring::Vertical);
        assert_eq!(config.pattern_access, PatternAccess::Writable);
        assert_eq!(config.pattern_access.to_string(), "chr-ram");
    }
}
