//! Text deobfuscation.
//!
//! Some sites serve chapter text through a reversible per-character offset
//! substitution keyed by the page URL, to frustrate generic scrapers. The key
//! derivation and the offset tables are reverse-engineered site constants;
//! they are preserved exactly and must not be "cleaned up". The transform is
//! applied per text node so surrounding markup stays untouched.

use serde::{Deserialize, Serialize};

/// One offset pair of a cipher table.
///
/// `lower` covers the letter band of the scrambled alphabet, `upper` covers
/// everything else (digits, punctuation, whitespace stand-ins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPair {
    pub lower: i32,
    pub upper: i32,
}

impl OffsetPair {
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }
}

/// A keyed, reversible character-substitution table.
///
/// Shipped tables carry exactly three entries; the selector below reduces the
/// key modulo 3. Tables loaded from disk may be malformed, so lookup falls
/// back to entry 0 and an empty table decodes as identity rather than
/// panicking mid-page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherTable {
    pub offsets: Vec<OffsetPair>,
}

impl CipherTable {
    pub fn new(offsets: Vec<OffsetPair>) -> Self {
        Self { offsets }
    }

    /// Picks the offset pair for a decode URL.
    ///
    /// The key is the URL minus its final character; the table index is
    /// `len(key) * codepoint(last char of key) * 2 mod 3`. An empty key
    /// selects entry 0.
    fn entry_for(&self, key_url: &str) -> Option<&OffsetPair> {
        let mut chars = key_url.chars();
        chars.next_back();
        let clean_key = chars.as_str();

        let index = match clean_key.chars().next_back() {
            Some(last) => (clean_key.chars().count() * last as usize * 2) % 3,
            None => 0,
        };
        self.offsets.get(index).or_else(|| self.offsets.first())
    }

    /// Decodes `text` scrambled for the page at `key_url`.
    ///
    /// Characters whose shifted code lands outside printable ASCII
    /// `[32, 126]` pass through unchanged; that guard keeps already-plain
    /// characters (spaces, punctuation) from being corrupted.
    pub fn decode(&self, text: &str, key_url: &str) -> String {
        let Some(pair) = self.entry_for(key_url) else {
            return text.to_string();
        };

        text.chars()
            .map(|c| {
                let code = c as i64;
                let lower = pair.lower as i64;
                let active = if code >= lower + 'A' as i64 && code <= lower + 'z' as i64 {
                    lower
                } else {
                    pair.upper as i64
                };
                let decoded = code - active;
                if (32..=126).contains(&decoded) {
                    char::from_u32(decoded as u32).unwrap_or(c)
                } else {
                    c
                }
            })
            .collect()
    }
}
