//! # Tone
//!
//! Advisory style hint forwarded to the generation service alongside the
//! email body. The service decides what to do with it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// No preference. Sent to the service as an empty string.
    #[default]
    None,
    Professional,
    Casual,
    Friendly,
}

impl Tone {
    /// Every tone, in picker order.
    pub const ALL: [Tone; 4] = [Tone::None, Tone::Professional, Tone::Casual, Tone::Friendly];

    /// Cycles to the next tone (wraps around)
    pub fn next(self) -> Tone {
        match self {
            Tone::None => Tone::Professional,
            Tone::Professional => Tone::Casual,
            Tone::Casual => Tone::Friendly,
            Tone::Friendly => Tone::None,
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Tone::None => "None",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }

    /// The value placed in the request body's `tone` field.
    pub fn wire_value(self) -> &'static str {
        match self {
            Tone::None => "",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
        }
    }

    /// Parses a config or env value (`none`, `professional`, ...), case-insensitive.
    /// An empty string means `None`, mirroring the wire format.
    pub fn parse(value: &str) -> Option<Tone> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Some(Tone::None),
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "friendly" => Some(Tone::Friendly),
            _ => None,
        }
    }

    /// Position of this tone in [`Tone::ALL`].
    pub fn index(self) -> usize {
        Tone::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}
