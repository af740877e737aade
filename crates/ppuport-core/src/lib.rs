//! NES PPU register file and address-space decoder.
//!
//! A host CPU emulator drives [`Ppu`] through the `$2000-$2007` ports (or the
//! named operations behind them) and the `$4014` OAM DMA port. The PPU owns
//! pattern memory supplied by the cartridge, the 2 KiB nametable RAM, palette
//! RAM and sprite memory, and reproduces the latched, order-dependent behavior
//! of the real register set.

pub mod config;
pub mod error;
pub mod mem_block;
pub mod memory;
pub mod mirroring;
pub mod pattern;
pub mod ppu;
pub mod state;

pub use config::{PatternAccess, PpuConfig};
pub use error::Error;
pub use mirroring::Mirroring;
pub use ppu::{Ppu, dma::DmaSource};

#[cfg(test)]
mod tests {
    use ctor::ctor;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub(crate) const TEST_COUNT: usize = 1000;

    #[ctor]
    fn init_tracing() {
        let subscriber = FmtSubscriber::builder()
            .with_file(true)
            .with_line_number(true)
            .with_max_level(Level::TRACE)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
    }
}
