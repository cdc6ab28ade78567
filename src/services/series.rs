//! Multi-part series support. The endpoint stays single-shot; this module
//! owns the sequential part-by-part loop and the session-scoped state that
//! holds generated parts for tab-style navigation.

use anyhow::Result;

use crate::models::{SeriesInfo, Tone};
use crate::services::humanize;
use crate::services::llm::TextGenerator;
use crate::services::prompt;

#[derive(Debug, Clone)]
pub struct SeriesPart {
    pub content: String,
    pub word_count: usize,
}

/// Ordered parts of one series run plus the currently displayed part.
/// Lives only for the duration of a session and is rebuilt on each run.
#[derive(Debug, Default)]
pub struct SeriesSession {
    parts: Vec<SeriesPart>,
    active: usize,
}

impl SeriesSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generated part and make it the active one.
    pub fn push(&mut self, content: String) {
        let word_count = humanize::count_words(&content);
        self.parts.push(SeriesPart {
            content,
            word_count,
        });
        self.active = self.parts.len() - 1;
    }

    /// Switch the active part. Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.parts.len() {
            self.active = index;
        }
    }

    pub fn active_part(&self) -> Option<&SeriesPart> {
        self.parts.get(self.active)
    }

    pub fn parts(&self) -> &[SeriesPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn clear(&mut self) {
        self.parts.clear();
        self.active = 0;
    }
}

/// Generate all parts of a series, one sequential call per part, threading
/// every prior part's raw content into the next prompt as context. The
/// first failure aborts the remainder and discards what was generated.
pub async fn run_series(
    generator: &dyn TextGenerator,
    topic: &str,
    tone: Tone,
    series_title: Option<&str>,
    total_parts: u32,
) -> Result<SeriesSession> {
    let mut session = SeriesSession::new();
    let mut previous_parts: Vec<String> = Vec::new();

    for part_number in 1..=total_parts {
        let info = SeriesInfo {
            is_series: true,
            part_number,
            total_parts,
            series_title: series_title.map(str::to_string),
            previous_parts: previous_parts.clone(),
        };

        let prompt = prompt::build_prompt(topic, tone, Some(&info));
        tracing::info!(part_number, total_parts, "generating series part");
        let content = generator.generate(&prompt).await?;

        previous_parts.push(content.clone());
        session.push(content);
    }

    Ok(session)
}
