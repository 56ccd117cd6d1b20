//! The fixed swatch palette.
//!
//! Eight distinct colors, each with exactly one display name.

use serde::{Deserialize, Serialize};

/// A single color the player can be asked to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

/// All swatches in display order.
pub const PALETTE: [Swatch; 8] = [
    Swatch::Red,
    Swatch::Orange,
    Swatch::Yellow,
    Swatch::Green,
    Swatch::Cyan,
    Swatch::Blue,
    Swatch::Purple,
    Swatch::Pink,
];

impl Swatch {
    /// Display name shown in the target label.
    pub fn name(&self) -> &'static str {
        match self {
            Swatch::Red => "Red",
            Swatch::Orange => "Orange",
            Swatch::Yellow => "Yellow",
            Swatch::Green => "Green",
            Swatch::Cyan => "Cyan",
            Swatch::Blue => "Blue",
            Swatch::Purple => "Purple",
            Swatch::Pink => "Pink",
        }
    }

    /// RGB value used when painting the swatch.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Swatch::Red => (0xe5, 0x39, 0x35),
            Swatch::Orange => (0xfb, 0x8c, 0x00),
            Swatch::Yellow => (0xfd, 0xd8, 0x35),
            Swatch::Green => (0x43, 0xa0, 0x47),
            Swatch::Cyan => (0x00, 0xac, 0xc1),
            Swatch::Blue => (0x1e, 0x88, 0xe5),
            Swatch::Purple => (0x8e, 0x24, 0xaa),
            Swatch::Pink => (0xd8, 0x1b, 0x60),
        }
    }
}

impl std::fmt::Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
