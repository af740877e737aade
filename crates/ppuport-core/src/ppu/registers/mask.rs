use bitflags::bitflags;

bitflags! {
    /// PPU mask register (`$2001`).
    ///
    /// Bit layout:
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// B G R S B s b g
    /// ```
    /// - `g`: grayscale
    /// - `b`: show background in leftmost 8 pixels
    /// - `s`: show sprites in leftmost 8 pixels
    /// - `B`: background enable
    /// - `S`: sprite enable
    /// - `R/G/B`: color emphasis bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mask: u8 {
        const GRAYSCALE = 0b0000_0001;
        const SHOW_BACKGROUND_LEFT = 0b0000_0010;
        const SHOW_SPRITES_LEFT = 0b0000_0100;
        const SHOW_BACKGROUND = 0b0000_1000;
        const SHOW_SPRITES = 0b0001_0000;
        const EMPHASIZE_RED = 0b0010_0000;
        const EMPHASIZE_GREEN = 0b0100_0000;
        const EMPHASIZE_BLUE = 0b1000_0000;
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::empty()
    }
}

impl Mask {
    pub fn grayscale(self) -> bool {
        self.contains(Mask::GRAYSCALE)
    }

    pub fn show_background_left(self) -> bool {
        self.contains(Mask::SHOW_BACKGROUND_LEFT)
    }

    pub fn show_sprites_left(self) -> bool {
        self.contains(Mask::SHOW_SPRITES_LEFT)
    }

    pub fn show_background(self) -> bool {
        self.contains(Mask::SHOW_BACKGROUND)
    }

    pub fn show_sprites(self) -> bool {
        self.contains(Mask::SHOW_SPRITES)
    }

    pub fn emphasize_red(self) -> bool {
        self.contains(Mask::EMPHASIZE_RED)
    }

    pub fn emphasize_green(self) -> bool {
        self.contains(Mask::EMPHASIZE_GREEN)
    }

    pub fn emphasize_blue(self) -> bool {
        self.contains(Mask::EMPHASIZE_BLUE)
    }

    /// Returns `true` when either background or sprite rendering is enabled.
    pub fn rendering_enabled(self) -> bool {
        self.intersects(Mask::SHOW_BACKGROUND | Mask::SHOW_SPRITES)
    }
}
