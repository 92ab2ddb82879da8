//! Mai yamok (ๆ) expansion into literal repetition

/// Thai repetition mark (mai yamok, U+0E46)
pub const MAI_YAMOK: char = 'ๆ';

/// Expand mai yamok marks by duplicating the preceding word chunk.
///
/// The repeated unit is the maximal run of non-whitespace characters before
/// the mark, so expansion works at the whitespace-delimited chunk level. A
/// mark at the start of the text or right after whitespace has nothing to
/// repeat and is dropped. Marks apply one after another over the input, so a
/// doubled mark duplicates the already-duplicated chunk ("ดีๆๆ" → "ดีดีดีดี");
/// inserted text is never rescanned for marks.
///
/// # Examples
/// ```
/// use thai_prep::expand_maiyamok;
/// assert_eq!(expand_maiyamok("ดีๆ"), "ดีดี");
/// assert_eq!(expand_maiyamok("เดินช้าๆ"), "เดินช้าเดินช้า");
/// ```
pub fn expand_maiyamok(text: &str) -> String {
    if !text.contains(MAI_YAMOK) {
        return text.to_string();
    }

    let mut expanded: Vec<char> = Vec::with_capacity(text.chars().count());

    for c in text.chars() {
        if c != MAI_YAMOK {
            expanded.push(c);
            continue;
        }

        // The chunk to repeat starts just after the last whitespace
        let token_start = expanded
            .iter()
            .rposition(|p| p.is_whitespace())
            .map(|i| i + 1)
            .unwrap_or(0);

        if token_start < expanded.len() {
            let token = expanded[token_start..].to_vec();
            expanded.extend(token);
        }
        // A mark with nothing before it is dropped
    }

    expanded.into_iter().collect()
}
