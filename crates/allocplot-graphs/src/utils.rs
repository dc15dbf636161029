//! Graph utility functions and helpers.

/// Chart title for a benchmark type.
///
/// Underscores become spaces and every word is capitalized: the first letter
/// of each run of letters is upper-cased, the rest lower-cased. Anything that
/// is not a letter (spaces, digits, punctuation) starts a new word.
///
/// ```
/// use allocplot_graphs::title_case;
///
/// assert_eq!(title_case("random_free"), "Random Free");
/// assert_eq!(title_case("mixed_size_alloc"), "Mixed Size Alloc");
/// ```
pub fn title_case(benchmark_type: &str) -> String {
    let mut title = String::with_capacity(benchmark_type.len());
    let mut in_word = false;
    for c in benchmark_type.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }
    title
}
