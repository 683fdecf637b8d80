pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{
    char_len, clean_text, line_count, safe_truncate_chars, truncate_with_marker, word_count,
};
pub use url_utils::{is_valid_url, resolve_reference};
