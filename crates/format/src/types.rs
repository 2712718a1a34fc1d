use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation length bounds handed to the summarization model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationBounds {
    /// Minimum summary length (model tokens)
    pub min_len: u32,

    /// Maximum summary length (model tokens)
    pub max_len: u32,
}

impl GenerationBounds {
    pub const fn new(min_len: u32, max_len: u32) -> Self {
        Self { min_len, max_len }
    }
}

/// Voice of the summary, expressed as a fixed lead-in phrase
///
/// Unrecognized values parse to `Other`, which adds no prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Casual,
    Formal,
    Professional,
    Friendly,
    #[default]
    Other,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Other => "other",
        }
    }

    /// Lead-in phrase, if the tone has one
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Casual => Some("Here's the gist: "),
            Self::Formal => Some("In summary: "),
            Self::Professional => Some("Executive Summary: "),
            Self::Friendly => Some("Here's what I found: "),
            Self::Other => None,
        }
    }
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        match value {
            "casual" => Self::Casual,
            "formal" => Self::Formal,
            "professional" => Self::Professional,
            "friendly" => Self::Friendly,
            _ => Self::Other,
        }
    }
}

/// Requested summary length
///
/// Unrecognized values parse to `Detailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Length {
    Short,
    Medium,
    #[default]
    Detailed,
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Detailed => "detailed",
        }
    }

    /// Generation bounds passed verbatim to the model
    pub fn bounds(&self) -> GenerationBounds {
        match self {
            Self::Short => GenerationBounds::new(20, 80),
            Self::Medium => GenerationBounds::new(50, 150),
            Self::Detailed => GenerationBounds::new(100, 250),
        }
    }

    /// Number of sentences kept after generation; `None` keeps the summary as-is
    pub fn sentence_cap(&self) -> Option<usize> {
        match self {
            Self::Short => Some(2),
            Self::Medium => Some(4),
            Self::Detailed => None,
        }
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        match value {
            "short" => Self::Short,
            "medium" => Self::Medium,
            _ => Self::Detailed,
        }
    }
}

/// Structural layout of the final summary
///
/// Unrecognized values parse to `Explainer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Purpose {
    Tldr,
    KeyPoints,
    #[default]
    Explainer,
}

impl Purpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tldr => "tldr",
            Self::KeyPoints => "keypoints",
            Self::Explainer => "explainer",
        }
    }
}

impl From<&str> for Purpose {
    fn from(value: &str) -> Self {
        match value {
            "tldr" => Self::Tldr,
            "keypoints" => Self::KeyPoints,
            _ => Self::Explainer,
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {
        $(
            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self::from(value.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

string_conversions!(Tone, Length, Purpose);
