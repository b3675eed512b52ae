//! Predicate symbol helpers.

/// Normalize a predicate symbol the way MRS codecs store it.
///
/// Surrounding quotes are removed, the symbol is lowercased and a trailing
/// `_rel` is dropped: `"_Dog_n_1_rel"` -> `_dog_n_1`.
pub fn normalize(predicate: &str) -> String {
    let trimmed = predicate.trim_matches('"').trim_start_matches('\'');
    let lowered = trimmed.to_lowercase();
    match lowered.strip_suffix("_rel") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => lowered,
    }
}

/// Surface predicates come from the lexicon and start with an underscore.
pub fn is_surface(predicate: &str) -> bool {
    predicate.starts_with('_')
}

/// Abstract predicates are introduced by the grammar (`udef_q`, `compound`).
pub fn is_abstract(predicate: &str) -> bool {
    !is_surface(predicate)
}
