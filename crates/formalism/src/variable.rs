//! Helpers for DELPH-IN variable names (`x4`, `e2`, `h0`).

/// Split a variable into its sort prefix and numeric id: `x4` -> `("x", "4")`.
///
/// Returns `None` when there is no trailing number or no sort prefix.
pub fn split(var: &str) -> Option<(&str, &str)> {
    let prefix = var.trim_end_matches(|c: char| c.is_ascii_digit());
    if prefix.is_empty() || prefix.len() == var.len() {
        return None;
    }
    Some(var.split_at(prefix.len()))
}

/// The sort of a variable: `x4` -> `x`.
pub fn sort(var: &str) -> Option<&str> {
    split(var).map(|(sort, _)| sort)
}

/// Whether `var` is a well-formed variable name.
pub fn is_valid(var: &str) -> bool {
    split(var).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("x4"), Some(("x", "4")));
        assert_eq!(split("e12"), Some(("e", "12")));
        assert_eq!(split("h"), None);
        assert_eq!(split("42"), None);
    }

    #[test]
    fn test_sort() {
        assert_eq!(sort("x4"), Some("x"));
        assert_eq!(sort("e2"), Some("e"));
        assert!(is_valid("h0"));
        assert!(!is_valid("Kim"));
    }
}
