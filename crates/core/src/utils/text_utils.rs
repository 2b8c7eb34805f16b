/// Cuts `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Lowercases and strips Spanish diacritics so `Alimentación` matches `alimentacion`.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Accent- and case-insensitive substring test. An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = fold_accents(needle.trim());
    needle.is_empty() || fold_accents(haystack).contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("corto", 80), "corto");
        assert_eq!(truncate_chars("áéíóú", 3), "áéí...");
        let long = "x".repeat(81);
        assert_eq!(truncate_chars(&long, 80), format!("{}...", "x".repeat(80)));
        assert_eq!(truncate_chars(&"x".repeat(80), 80), "x".repeat(80));
    }

    #[test]
    fn folded_search_ignores_accents_and_case() {
        assert!(contains_folded("Alimentación", "alimentacion"));
        assert!(contains_folded("Educación", "EDUC"));
        assert!(contains_folded("Año nuevo", "ano"));
        assert!(contains_folded("Transporte", ""));
        assert!(!contains_folded("Transporte", "salud"));
    }
}
