/// Case-insensitive substring test.
pub fn contains_substring(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True iff at least one needle occurs in the haystack. An empty needle list
/// never matches here; "no food filter requested" is handled upstream by
/// leaving the filter unset.
pub fn matches_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| contains_substring(haystack, needle))
}
