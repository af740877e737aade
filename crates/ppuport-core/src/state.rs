//! Save/load interfaces.
//!
//! Components capture a full snapshot of their state and restore from one.
//! Callers pick the storage format; with `savestate-postcard` the PPU payload
//! can be encoded to bytes directly.

pub mod ppu;

#[cfg(feature = "savestate-serde")]
use serde::{Deserialize, Serialize};

/// Metadata attached to a snapshot to aid compatibility checks.
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMeta {
    /// Version of the snapshot payload.
    pub format_version: u32,
    /// Host-defined tick or frame counter when the snapshot was captured.
    pub tick: u64,
}

impl Default for SnapshotMeta {
    fn default() -> Self {
        Self {
            format_version: 1,
            tick: 0,
        }
    }
}

/// Snapshot metadata bundled with its payload.
#[cfg_attr(feature = "savestate-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T, M = SnapshotMeta> {
    pub meta: M,
    pub data: T,
}

/// Minimal save/load contract.
pub trait SaveState {
    type Full;
    type Error;
    type Meta: Clone;

    /// Bumped whenever the payload layout changes.
    const FORMAT_VERSION: u32 = 1;

    /// Capture a full snapshot of the component state.
    fn save_full(&self, meta: Self::Meta) -> Result<Snapshot<Self::Full, Self::Meta>, Self::Error>;

    /// Restore the component from a full snapshot. On error the component is
    /// left untouched.
    fn load_full(&mut self, snapshot: &Snapshot<Self::Full, Self::Meta>)
    -> Result<(), Self::Error>;
}
