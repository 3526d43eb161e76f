use std::fmt;

/// A color the player can assign to a node.
/// The declaration order is the fixed palette order used by hint search
/// and color cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Green,
    Red,
    Blue,
    Yellow,
    Black,
}

impl PaletteColor {
    /// All palette colors in fixed order
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Green,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Black,
    ];

    /// Position of this color in the fixed palette order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .expect("color is in the palette")
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Green => "green",
            PaletteColor::Red => "red",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Black => "black",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        // Hint search and cycling both depend on this exact order
        assert_eq!(
            PaletteColor::ALL,
            [
                PaletteColor::Green,
                PaletteColor::Red,
                PaletteColor::Blue,
                PaletteColor::Yellow,
                PaletteColor::Black,
            ]
        );
    }

    #[test]
    fn test_index_round_trip() {
        for (i, color) in PaletteColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PaletteColor::Green.to_string(), "green");
        assert_eq!(PaletteColor::Black.to_string(), "black");
    }
}
