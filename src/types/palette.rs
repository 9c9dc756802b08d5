//! The fixed named palette shared by every generator.
//!
//! Generators take the palette as an explicit argument rather than reaching
//! for colour constants, so alternative colourways only need a different
//! `Palette` value.

use super::Colour;

/// A fixed table of semantically named colours.
///
/// Field groups: faction colours (`primary`, `secondary`, `accent`), neutral
/// tones (`dark` through `white`), gear shades used by the character and
/// weapon generators, and status colours for UI widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary faction colour (beret, emblem shield).
    pub primary: Colour,
    /// Secondary uniform tone.
    pub secondary: Colour,
    /// Metallic accent (badges, emblem detail).
    pub accent: Colour,

    /// Near-black neutral.
    pub dark: Colour,
    /// Charcoal neutral (UI backgrounds, weapon detail).
    pub charcoal: Colour,
    /// Mid grey neutral.
    pub mid: Colour,
    /// Light grey neutral.
    pub light: Colour,
    pub white: Colour,

    /// Skin tone for faces.
    pub skin: Colour,
    /// Armor vest shade.
    pub armor: Colour,
    /// Shoulder plate shade.
    pub plate: Colour,
    /// Wooden weapon furniture.
    pub wood: Colour,
    /// Weapon steel.
    pub steel: Colour,
    /// Darker barrel steel.
    pub gunmetal: Colour,

    /// Health / positive status.
    pub health: Colour,
    /// Warning / danger status.
    pub warning: Colour,
    /// Informational status.
    pub info: Colour,
}

impl Palette {
    /// The built-in military colourway used by the default pipeline.
    pub const fn military() -> Self {
        Self {
            primary: Colour::rgb(139, 21, 56),
            secondary: Colour::rgb(61, 74, 61),
            accent: Colour::rgb(212, 175, 55),

            dark: Colour::rgb(26, 26, 26),
            charcoal: Colour::rgb(30, 30, 30),
            mid: Colour::rgb(90, 90, 90),
            light: Colour::rgb(200, 200, 200),
            white: Colour::WHITE,

            skin: Colour::rgb(220, 180, 140),
            armor: Colour::rgb(45, 55, 45),
            plate: Colour::rgb(50, 60, 50),
            wood: Colour::rgb(139, 69, 19),
            steel: Colour::rgb(50, 50, 50),
            gunmetal: Colour::rgb(10, 10, 10),

            health: Colour::rgb(34, 197, 94),
            warning: Colour::rgb(192, 21, 47),
            info: Colour::rgb(59, 130, 246),
        }
    }

    /// Look up a colour by semantic name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        let colour = match name {
            "primary" => self.primary,
            "secondary" => self.secondary,
            "accent" => self.accent,
            "dark" => self.dark,
            "charcoal" => self.charcoal,
            "mid" => self.mid,
            "light" => self.light,
            "white" => self.white,
            "skin" => self.skin,
            "armor" => self.armor,
            "plate" => self.plate,
            "wood" => self.wood,
            "steel" => self.steel,
            "gunmetal" => self.gunmetal,
            "health" => self.health,
            "warning" => self.warning,
            "info" => self.info,
            _ => return None,
        };
        Some(colour)
    }

    /// All colour names, in display order.
    pub fn names() -> &'static [&'static str] {
        &[
            "primary", "secondary", "accent", "dark", "charcoal", "mid", "light", "white",
            "skin", "armor", "plate", "wood", "steel", "gunmetal", "health", "warning", "info",
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::military()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_names() {
        let palette = Palette::military();
        assert_eq!(palette.get("primary"), Some(Colour::rgb(139, 21, 56)));
        assert_eq!(palette.get("health"), Some(Colour::rgb(34, 197, 94)));
        assert_eq!(palette.get("white"), Some(Colour::WHITE));
    }

    #[test]
    fn test_get_unknown_name() {
        let palette = Palette::military();
        assert_eq!(palette.get("chartreuse"), None);
    }

    #[test]
    fn test_names_all_resolve() {
        let palette = Palette::military();
        for name in Palette::names() {
            assert!(palette.get(name).is_some(), "missing colour: {}", name);
        }
    }

    #[test]
    fn test_status_colours_are_distinct() {
        let palette = Palette::military();
        assert_ne!(palette.health, palette.warning);
        assert_ne!(palette.warning, palette.info);
        assert_ne!(palette.health, palette.info);
    }
}
