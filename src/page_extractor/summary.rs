//! Greedy, order-preserving summary generation.
//!
//! Body text is split into sentences on a configurable terminator set and
//! sentences are taken in order of appearance until the next one would
//! overflow the length budget. This is not length-optimal; a long early
//! sentence ends accumulation even if shorter later ones would still fit.

use serde::{Deserialize, Serialize};

use crate::utils::{SUMMARY_MIN_INPUT_CHARS, SUMMARY_SENTENCE_END, char_len};

/// Sentences of this many chars or fewer are skipped.
const MIN_SENTENCE_CHARS: usize = 10;

/// Characters that end a sentence.
///
/// The default covers ASCII `.` `!` `?` and their full-width counterparts
/// `。` `！` `？`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceTerminators(Vec<char>);

impl SentenceTerminators {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self(chars.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl Default for SentenceTerminators {
    fn default() -> Self {
        Self::new(['.', '!', '?', '。', '！', '？'])
    }
}

/// Build a synopsis of at most roughly `max_length` chars from `content`.
///
/// Text shorter than 50 chars is returned unchanged. Each accepted sentence
/// is trimmed and followed by `。`; the budget check counts every accepted
/// sentence and its `。`, but not the terminator of the candidate sentence.
///
/// # Examples
/// ```
/// # use kodegen_tools_distill::page_extractor::summary::{generate_summary, SentenceTerminators};
/// let text = "Rust guarantees memory safety. It has no garbage collector! Short. \
///             Ownership rules are checked at compile time.";
/// let summary = generate_summary(text, 60, &SentenceTerminators::default());
/// assert_eq!(summary, "Rust guarantees memory safety。It has no garbage collector。");
/// ```
#[must_use]
pub fn generate_summary(
    content: &str,
    max_length: usize,
    terminators: &SentenceTerminators,
) -> String {
    if content.is_empty() || char_len(content) < SUMMARY_MIN_INPUT_CHARS {
        return content.to_string();
    }

    let mut summary = String::new();
    let mut summary_chars = 0usize;

    for sentence in content.split(|c: char| terminators.contains(c)) {
        let sentence = sentence.trim();
        let sentence_chars = char_len(sentence);
        if sentence_chars <= MIN_SENTENCE_CHARS {
            continue;
        }
        if summary_chars + sentence_chars > max_length {
            break;
        }
        summary.push_str(sentence);
        summary.push(SUMMARY_SENTENCE_END);
        summary_chars += sentence_chars + 1;
    }

    summary.trim().to_string()
}
