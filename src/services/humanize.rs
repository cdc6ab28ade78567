//! Cosmetic randomization that makes generated text look hand-typed:
//! typo-then-correction spans, stray emphasis, ellipsis and dash swaps.
//!
//! Best-effort only. The injections operate on raw text and can land
//! inside markup the model emitted, so the output has no well-formedness
//! contract beyond staying mostly readable.

use rand::Rng;
use regex::Regex;

const TYPO_CHANCE: f64 = 0.2;
const EMPHASIS_CHANCE: f64 = 0.3;
const ELLIPSIS_CHANCE: f64 = 0.15;
const DASH_CHANCE: f64 = 0.1;

/// Apply the humanizing transform. Takes the random source explicitly so
/// tests can seed it; paragraph count is preserved for any seed.
pub fn humanize<R: Rng>(content: &str, rng: &mut R) -> String {
    let paragraph_break = Regex::new(r"\n\n+").expect("paragraph break pattern");
    let sentence_end = Regex::new(r"\.(\s)").expect("sentence end pattern");

    let mut paragraphs: Vec<String> = paragraph_break
        .split(content)
        .map(|paragraph| {
            let mut paragraph = paragraph.to_string();
            if rng.gen_range(0.0..1.0) < TYPO_CHANCE {
                paragraph = inject_typo(&paragraph, rng);
            }
            if rng.gen_range(0.0..1.0) < EMPHASIS_CHANCE {
                paragraph = inject_emphasis(&paragraph, rng);
            }
            paragraph
        })
        .collect();

    paragraphs = paragraphs
        .into_iter()
        .map(|mut paragraph| {
            if rng.gen_range(0.0..1.0) < ELLIPSIS_CHANCE {
                paragraph = sentence_end.replace_all(&paragraph, "...${1}").into_owned();
            }
            if rng.gen_range(0.0..1.0) < DASH_CHANCE {
                paragraph = paragraph.replace(", ", " — ");
            }
            paragraph
        })
        .collect();

    paragraphs
        .into_iter()
        .map(|paragraph| format!("<p>{paragraph}</p>"))
        .collect()
}

/// Misspell one random word and prepend the misspelling as a marked span
/// in front of the correct word, so both render.
fn inject_typo<R: Rng>(paragraph: &str, rng: &mut R) -> String {
    let mut words: Vec<String> = paragraph.split(' ').map(str::to_string).collect();
    let index = rng.gen_range(0..words.len());

    let word = words[index].clone();
    let chars: Vec<char> = word.chars().collect();
    if chars.len() > 3 {
        let position = rng.gen_range(0..chars.len() - 1);
        let mut misspelled = chars;
        misspelled.swap(position, position + 1);
        let misspelled: String = misspelled.into_iter().collect();
        words[index] = format!("<span class=\"typo\">{misspelled}</span> {word}");
    }

    words.join(" ")
}

fn inject_emphasis<R: Rng>(paragraph: &str, rng: &mut R) -> String {
    let mut sentences: Vec<String> = paragraph.split(". ").map(str::to_string).collect();
    let sentence_index = rng.gen_range(0..sentences.len());

    let mut words: Vec<String> = sentences[sentence_index]
        .split(' ')
        .map(str::to_string)
        .collect();
    let word_index = rng.gen_range(0..words.len());
    if words[word_index].chars().count() > 3 {
        words[word_index] = format!("<em>{}</em>", words[word_index]);
        sentences[sentence_index] = words.join(" ");
    }

    sentences.join(". ")
}

/// Word count over rendered content: markup tags stripped, whitespace
/// split, empty tokens ignored.
pub fn count_words(content: &str) -> usize {
    let tag = Regex::new(r"<[^>]*>").expect("tag pattern");
    let text = tag.replace_all(content, "");
    text.split_whitespace().count()
}
