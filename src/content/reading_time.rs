//! Estimated reading time

use super::Section;

/// Default reading speed in words per minute
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Count whitespace-separated words; runs of whitespace collapse
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Total words across headings and bodies
pub fn total_words(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|s| count_words(&s.heading) + count_words(&s.body_text()))
        .sum()
}

/// Estimated reading time in minutes at 200 words per minute
pub fn estimate(sections: &[Section]) -> u32 {
    estimate_with_rate(sections, DEFAULT_WORDS_PER_MINUTE)
}

/// Estimated reading time in minutes, rounded up
///
/// An article with no words takes 0 minutes. A rate of 0 falls back to the default.
pub fn estimate_with_rate(sections: &[Section], words_per_minute: u32) -> u32 {
    let rate = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        n => n,
    };

    total_words(sections).div_ceil(rate as usize) as u32
}
