use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The cartridge supplied no pattern memory at all.
    #[error("pattern memory must not be empty")]
    EmptyPatternMemory,

    /// A save-state payload does not match the shape of this PPU.
    #[error("corrupt state: {0}")]
    CorruptState(&'static str),
}
