use serde::{Deserialize, Serialize};

/// Stylistic preset for generated posts. Unrecognized or absent tone
/// strings fall back to `Casual` rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Academic,
    Humorous,
    Inspirational,
}

impl Tone {
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("professional") => Self::Professional,
            Some("academic") => Self::Academic,
            Some("humorous") => Self::Humorous,
            Some("inspirational") => Self::Inspirational,
            _ => Self::Casual,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Academic => "academic",
            Self::Humorous => "humorous",
            Self::Inspirational => "inspirational",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInfo {
    #[serde(default)]
    pub is_series: bool,
    pub part_number: u32,
    pub total_parts: u32,
    #[serde(default)]
    pub series_title: Option<String>,
    #[serde(default)]
    pub previous_parts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    // Defaulted so an absent topic reaches the handler and gets the
    // explicit 400 instead of a serde rejection.
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub series_info: Option<SeriesInfo>,
    #[serde(default)]
    pub humanize: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
