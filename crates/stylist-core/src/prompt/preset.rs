//! Built-in style presets.
//!
//! Provides the fixed set of target styles a text can be rewritten into.

/// A named rewrite instruction selectable by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePreset {
    /// Unique display name (e.g. "Sarcastic")
    pub name: String,
    /// Rewrite directive sent in front of the text
    pub instruction: String,
}

/// Returns the official style presets for the application.
///
/// - **Persuasive**: advertisement / motivational tone
/// - **Sarcastic**: dry, subtly mocking tone
/// - **Mystical**: poetic fantasy-oracle narration
/// - **Professional**: formal business writing
pub fn get_default_presets() -> Vec<StylePreset> {
    vec![
        StylePreset {
            name: "Persuasive".to_string(),
            instruction: "Rewrite the text to sound persuasive and convincing, suitable for an advertisement or motivational piece.".to_string(),
        },
        StylePreset {
            name: "Sarcastic".to_string(),
            instruction: "Rewrite the text with a dry and sarcastic tone, like it’s mocking something subtly.".to_string(),
        },
        StylePreset {
            name: "Mystical".to_string(),
            instruction: "Rewrite the text with a poetic and mystical vibe, as if narrated by a fantasy oracle.".to_string(),
        },
        StylePreset {
            name: "Professional".to_string(),
            instruction: "Make the text formal, neutral, and professional, suitable for business writing.".to_string(),
        },
    ]
}

/// Read-only registry of style presets, fixed at startup.
#[derive(Debug, Clone)]
pub struct StylePresets {
    presets: Vec<StylePreset>,
}

impl StylePresets {
    /// Builds a registry from the given presets.
    ///
    /// Later entries with a name already present are ignored, so names stay unique.
    pub fn new(presets: impl IntoIterator<Item = StylePreset>) -> Self {
        let mut unique: Vec<StylePreset> = Vec::new();
        for preset in presets {
            if !unique.iter().any(|p| p.name == preset.name) {
                unique.push(preset);
            }
        }
        Self { presets: unique }
    }

    /// Looks up a preset by name.
    ///
    /// An exact match wins; otherwise the name is compared case-insensitively.
    pub fn find(&self, name: &str) -> Option<&StylePreset> {
        let name = name.trim();
        self.presets
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.presets.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
    }

    /// Iterates presets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &StylePreset> {
        self.presets.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for StylePresets {
    fn default() -> Self {
        Self::new(get_default_presets())
    }
}
