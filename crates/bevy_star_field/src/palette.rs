//! Built-in six-color stream palettes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Named color palette. Streams cycle through the six entries in index order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum Palette {
    #[default]
    Classic,
    Intense,
    Simple,
    Chaotic,
}

impl Palette {
    pub const ALL: [Self; 4] = [Self::Classic, Self::Intense, Self::Simple, Self::Chaotic];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Intense => "Intense",
            Self::Simple => "Simple",
            Self::Chaotic => "Chaotic",
        }
    }

    /// The palette's six base colors.
    pub fn colors(&self) -> [LinearRgba; 6] {
        match self {
            Self::Classic => [
                hex(0xff6b9d),
                hex(0x4ecdc4),
                hex(0xffd93d),
                hex(0x95e1d3),
                hex(0xc77dff),
                hex(0xff9a76),
            ],
            Self::Intense => [
                hex(0xff0066),
                hex(0x00ffff),
                hex(0xffff00),
                hex(0xff00ff),
                hex(0x00ff00),
                hex(0xff9900),
            ],
            Self::Simple => [
                hex(0xb8d4e8),
                hex(0xd4b8e8),
                hex(0xe8d4b8),
                hex(0xb8e8d4),
                hex(0xe8b8d4),
                hex(0xd4e8b8),
            ],
            Self::Chaotic => [
                hex(0xff0099),
                hex(0x00ff99),
                hex(0x9900ff),
                hex(0x99ff00),
                hex(0x0099ff),
                hex(0xff9900),
            ],
        }
    }

    /// Base color for stream `index`, cycling through the palette.
    pub fn color(&self, index: usize) -> LinearRgba {
        self.colors()[index % 6]
    }
}

fn hex(rgb: u32) -> LinearRgba {
    LinearRgba::rgb(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle_in_index_order() {
        let palette = Palette::Chaotic;
        let colors = palette.colors();
        for i in 0..12 {
            assert_eq!(palette.color(i), colors[i % 6]);
        }
    }

    #[test]
    fn chaotic_starts_magenta() {
        let first = Palette::Chaotic.color(0);
        assert_eq!(first.red, 1.0);
        assert_eq!(first.green, 0.0);
        assert!((first.blue - 0x99 as f32 / 255.0).abs() < 1e-6);
    }
}
