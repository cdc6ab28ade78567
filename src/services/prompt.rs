//! Prompt templates for humanlike blog generation.

use crate::models::{SeriesInfo, Tone};

/// Prior-part context is clipped so long series keep the prompt bounded.
const PREVIOUS_PART_LIMIT: usize = 1500;

fn tone_instructions(tone: Tone) -> &'static str {
    match tone {
        Tone::Casual => {
            "keep it conversational and laid-back, like telling a friend about something you found interesting"
        }
        Tone::Professional => {
            "keep it polished and businesslike, but clearly written by a person and not a press release"
        }
        Tone::Academic => {
            "keep it analytical and precise, leaning on evidence and careful wording, though it is still a blog and not a paper"
        }
        Tone::Humorous => {
            "keep it playful and a bit self-deprecating, always looking for the absurd angle on the topic"
        }
        Tone::Inspirational => {
            "keep it encouraging and earnest, nudging the reader toward actually trying something themselves"
        }
    }
}

const STYLE_MUSTS: &str = r#"Writing Style MUSTS:
- Vary sentence length WILDLY (3 words to 30+ words)
- Leave grammar mistakes unfixed (wrong verb tense, subject-verb agreement issues)
- Use run-on sentences connected by commas where periods should be
- Start at least 5 sentences with "And" or "But" or "So"
- Randomly capitalize Words that don't need it
- forget to capitalize some words that should be
- Use inconsistent punctuation....sometimes too many periods...sometimes none
- Mix up metaphors slightly ("that really hit the nail on the cake")
- Start explaining something technical then abandon it mid-thought
- Include exactly 3-4 typos (like "teh" or "adn")
- Use em dashes — but sometimes use two dashes -- instead
- Insert unnecessary quotation marks around "normal" words
- Reference something earlier that you never actually mentioned
- Switch between past and present tense mid-paragraph
- Insert parenthetical thoughts (sometimes forgetting to close them
- Begin numbering points but then stop using numbers
- Use contractions inconsistently (sometimes don't, sometimes do not)
- Repeat words accidentally (like "the the")
- Write one paragraph that's way too long compared to the others
- Include phrases like "anyway" and "where was I?" and "oh right"
- Abruptly change topics with minimal transition
- Use rhetorical questions? Then answer some but not others
- Include a made-up statistic without any source
- Refer to "common knowledge" that isn't actually common"#;

const FINAL_INSTRUCTIONS: &str = r#"Final Vital Instructions:
- If any part looks too organized, structured, or predictable - redo it
- Every paragraph should have at least ONE unexpected element
- The content should seem like it was written in one sitting without editing
- Make sure it feels like a real person wrote it in a hurry but still cared about the topic
- Never follow a consistent format for more than two paragraphs in a row
- Content should still be valuable and informative despite the chaotic presentation
- Ultimately it should read like a knowledgeable person wrote it while slightly distracted"#;

/// Build the full instruction blob for one generation call. Pure string
/// formatting: inconsistent series info (part number past the total and
/// the like) is formatted as-is, never rejected here.
pub fn build_prompt(topic: &str, tone: Tone, series: Option<&SeriesInfo>) -> String {
    match series {
        Some(info) if info.is_series => series_prompt(topic, tone, info),
        _ => single_prompt(topic, tone),
    }
}

fn single_prompt(topic: &str, tone: Tone) -> String {
    format!(
        r#"The topic is {topic} and you have to write it in a {tone} tone: {tone_instructions}. Follow the structure below.

Write like a person with thoughts bouncing everywhere but trying to stay somewhat on-topic for a blog post.

Structure Requirements:
1. <h2>Introduction</h2>
- Start with something weirdly specific like "So last Tuesday I was reading about this while waiting for my dental appointment..."
- Add a random thought in parentheses that seems irrelevant
- Mention that you've been researching this topic for a while (but don't be too specific)

2. Main Content Structure:
- Use 4-8 <h2> headings with totally inconsistent capitalization and punctuation
- Never follow exactly the same pattern for any two sections
- Interrupt yourself mid-section to start a new topic at least twice
- Switch between formal writing and casual ramblings unpredictably
- Insert a bullet list that doesn't follow proper formatting (<ul><li>)
- Reference something you said earlier but get it slightly wrong
- Correct yourself later for a mistake you didn't actually make
- Randomly digress into a personal story that's only tangentially related

{STYLE_MUSTS}

{FINAL_INSTRUCTIONS}
"#,
        tone = tone.name(),
        tone_instructions = tone_instructions(tone),
    )
}

fn series_prompt(topic: &str, tone: Tone, info: &SeriesInfo) -> String {
    let is_first = info.part_number == 1;
    let is_last = info.part_number == info.total_parts;

    let mut prompt = String::new();

    if is_first {
        prompt.push_str(
            "Before writing, sketch a rough outline of where the whole series is going, then write Part 1 out of it (the outline itself stays in your head, not in the post).\n\n",
        );
    }

    prompt.push_str(&format!(
        "The topic is {topic} and you have to write it in a {tone} tone: {tone_instructions}. This is {part_label}. Follow the structure below.\n\n\
         Write like a person with thoughts bouncing everywhere but trying to stay somewhat on-topic for a blog post.\n\n",
        tone = tone.name(),
        tone_instructions = tone_instructions(tone),
        part_label = part_label(info),
    ));

    if info.part_number > 1 && !info.previous_parts.is_empty() {
        prompt.push_str("For context, here is what the earlier parts covered:\n\n");
        for (index, part) in info.previous_parts.iter().enumerate() {
            prompt.push_str(&format!(
                "Part {}:\n{}\n\n",
                index + 1,
                truncate_previous_part(part)
            ));
        }
    }

    let intro_line = if is_first {
        "- Reference what will be covered in the future parts since this is Part 1"
    } else {
        "- Reference what was covered in the earlier parts"
    };

    let linking_line = if is_first {
        "- Plant threads you can pick back up in later parts"
    } else if is_last {
        "- Call back to threads opened in the earlier parts and resolve them"
    } else {
        "- Make connections back to earlier parts and set up what the next part will cover"
    };

    let closing_line = if is_last {
        "- Wrap up the series with a conclusion that somewhat ties everything together"
    } else {
        "- End with a teaser for the next part"
    };

    prompt.push_str(&format!(
        "Structure Requirements:\n\
         1. <h2>Introduction</h2>\n\
         - Start with acknowledgment that this is Part {part} of a {total}-part series\n\
         {intro_line}\n\
         - Add a random thought in parentheses that seems irrelevant\n\
         - Mention that you've been researching this topic for a while (but don't be too specific)\n\n\
         2. Main Content Structure:\n\
         - Use 4-8 <h2> headings with totally inconsistent capitalization and punctuation\n\
         - Never follow exactly the same pattern for any two sections\n\
         - Interrupt yourself mid-section to start a new topic at least twice\n\
         - Switch between formal writing and casual ramblings unpredictably\n\
         - Insert a bullet list that doesn't follow proper formatting (<ul><li>)\n\
         - Reference something you said earlier but get it slightly wrong\n\
         - Correct yourself later for a mistake you didn't actually make\n\
         - Randomly digress into a personal story that's only tangentially related\n\
         {linking_line}\n\
         {closing_line}\n\n",
        part = info.part_number,
        total = info.total_parts,
    ));

    prompt.push_str(STYLE_MUSTS);
    prompt.push_str("\n\n");
    prompt.push_str(FINAL_INSTRUCTIONS);
    prompt.push('\n');

    if is_first {
        prompt.push_str(
            "- Make it clear this is the start of a series and there will be more parts coming\n",
        );
    }
    if info.part_number > 1 {
        prompt.push_str(&format!(
            "- Reference specific things from earlier parts (say \"as I mentioned in Part {}\")\n",
            info.part_number - 1
        ));
    }
    if is_last {
        prompt.push_str(
            "- Include a clear series conclusion that ties things together somewhat\n",
        );
    } else {
        prompt.push_str("- Include a teaser for the next part with what will be covered\n");
    }

    prompt
}

fn part_label(info: &SeriesInfo) -> String {
    match info.series_title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => {
            format!(
                "{} - Part {} of {}",
                title, info.part_number, info.total_parts
            )
        }
        _ => format!("Part {} of {}", info.part_number, info.total_parts),
    }
}

fn truncate_previous_part(text: &str) -> String {
    if text.chars().count() > PREVIOUS_PART_LIMIT {
        let clipped: String = text.chars().take(PREVIOUS_PART_LIMIT).collect();
        format!("{clipped}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(part_number: u32, total_parts: u32) -> SeriesInfo {
        SeriesInfo {
            is_series: true,
            part_number,
            total_parts,
            series_title: None,
            previous_parts: Vec::new(),
        }
    }

    #[test]
    fn single_prompt_embeds_topic_and_tone() {
        let prompt = build_prompt("urban beekeeping", Tone::Professional, None);
        assert!(prompt.contains("The topic is urban beekeeping"));
        assert!(prompt.contains("professional tone"));
        assert!(prompt.contains("Writing Style MUSTS"));
        assert!(!prompt.contains("Part 1"));
    }

    #[test]
    fn series_info_with_is_series_false_builds_single_prompt() {
        let mut info = series(1, 3);
        info.is_series = false;
        let prompt = build_prompt("rust", Tone::Casual, Some(&info));
        assert!(!prompt.contains("Part 1 of 3"));
    }

    #[test]
    fn first_part_gets_outline_instruction_and_series_opener() {
        let prompt = build_prompt("rust", Tone::Casual, Some(&series(1, 3)));
        assert!(prompt.starts_with("Before writing, sketch a rough outline"));
        assert!(prompt.contains("This is Part 1 of 3"));
        assert!(prompt.contains("there will be more parts coming"));
    }

    #[test]
    fn middle_part_contains_teaser_language() {
        let prompt = build_prompt("rust", Tone::Casual, Some(&series(2, 3)));
        assert!(prompt.contains("End with a teaser for the next part"));
        assert!(prompt.contains("Include a teaser for the next part with what will be covered"));
        assert!(prompt.contains("as I mentioned in Part 1"));
        assert!(!prompt.contains("series conclusion"));
    }

    #[test]
    fn final_part_contains_conclusion_language() {
        let prompt = build_prompt("rust", Tone::Casual, Some(&series(3, 3)));
        assert!(prompt.contains("conclusion that somewhat ties everything together"));
        assert!(prompt.contains("Include a clear series conclusion"));
        assert!(!prompt.contains("teaser for the next part"));
    }

    #[test]
    fn series_title_prefixes_part_label() {
        let mut info = series(2, 4);
        info.series_title = Some("Learning Rust".to_string());
        let prompt = build_prompt("rust", Tone::Casual, Some(&info));
        assert!(prompt.contains("This is Learning Rust - Part 2 of 4"));
    }

    #[test]
    fn previous_parts_are_embedded_in_order() {
        let mut info = series(3, 3);
        info.previous_parts = vec!["first part text".to_string(), "second part text".to_string()];
        let prompt = build_prompt("rust", Tone::Casual, Some(&info));
        let first = prompt.find("Part 1:\nfirst part text").unwrap();
        let second = prompt.find("Part 2:\nsecond part text").unwrap();
        assert!(first < second);
    }

    #[test]
    fn long_previous_parts_are_truncated_to_limit_plus_ellipsis() {
        let mut info = series(2, 2);
        info.previous_parts = vec!["x".repeat(2000)];
        let prompt = build_prompt("rust", Tone::Casual, Some(&info));

        let embedded = "x".repeat(PREVIOUS_PART_LIMIT) + "...";
        assert!(prompt.contains(&embedded));
        assert!(!prompt.contains(&"x".repeat(PREVIOUS_PART_LIMIT + 1)));
    }

    #[test]
    fn short_previous_parts_are_embedded_verbatim() {
        assert_eq!(truncate_previous_part("short"), "short");
        let exact = "y".repeat(PREVIOUS_PART_LIMIT);
        assert_eq!(truncate_previous_part(&exact), exact);
    }

    #[test]
    fn inconsistent_series_info_still_formats() {
        // Part number past the total is the caller's problem; the builder
        // just formats what it was handed.
        let prompt = build_prompt("rust", Tone::Casual, Some(&series(5, 3)));
        assert!(prompt.contains("This is Part 5 of 3"));
    }
}
