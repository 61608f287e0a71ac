//! Synset id issuance.
//!
//! Ids are `prefix + digits + suffix`. Only ids whose middle segment is made
//! purely of ASCII digits take part in the numbering; everything else is
//! ignored.

use std::cmp::Ordering;

use super::WordNet;

/// Digit width used when no existing id matches the requested family.
pub const DEFAULT_ID_WIDTH: usize = 8;

impl WordNet {
    /// Scans every id for the largest numeric segment between `prefix` and
    /// `suffix` and returns the next one, zero padded to the width of that
    /// maximum. Without a match the result is `prefix + "00000001" + suffix`.
    /// Segments of any length are compared and incremented as decimal text.
    pub fn get_new_id(&self, prefix: &str, suffix: &str) -> String {
        let mut best: Option<&str> = None;
        for id in self.ids() {
            let Some(digits) = parse_segment(id, prefix, suffix) else {
                continue;
            };
            if best.is_none_or(|max| compare_decimal(digits, max) == Ordering::Greater) {
                best = Some(digits);
            }
        }
        match best {
            Some(max) => format_id(prefix, &increment_decimal(max), max.len(), suffix),
            None => format_id(prefix, "1", DEFAULT_ID_WIDTH, suffix),
        }
    }

    /// Issues ids without rescanning as long as the caller keeps asking for
    /// the same prefix/suffix family: the last issued id is incremented in
    /// place (same digit width). Any other family falls back to
    /// [`WordNet::get_new_id`].
    pub fn get_new_incremental_id(&mut self, prefix: &str, suffix: &str) -> String {
        let next = self
            .incremental_id
            .as_deref()
            .and_then(|last| parse_segment(last, prefix, suffix))
            .map(|digits| format_id(prefix, &increment_decimal(digits), digits.len(), suffix));
        let id = next.unwrap_or_else(|| self.get_new_id(prefix, suffix));
        self.incremental_id = Some(id.clone());
        id
    }

    pub fn last_incremental_id(&self) -> Option<&str> {
        self.incremental_id.as_deref()
    }

    pub(crate) fn restore_incremental_id(&mut self, id: Option<String>) {
        self.incremental_id = id;
    }
}

fn parse_segment<'a>(id: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    let digits = id.strip_prefix(prefix)?.strip_suffix(suffix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

fn compare_decimal(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    // every digit carried
    let mut grown = String::with_capacity(bytes.len() + 1);
    grown.push('1');
    grown.push_str(&String::from_utf8_lossy(&bytes));
    grown
}

fn format_id(prefix: &str, digits: &str, width: usize, suffix: &str) -> String {
    format!("{prefix}{digits:0>width$}{suffix}")
}
