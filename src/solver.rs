use itertools::Itertools;
use std::collections::HashSet;

/// Shortest combination worth generating. Anything below this cannot be a
/// word the tool reports.
pub const MIN_WORD_LEN: usize = 4;

/// All distinct strings obtainable by arranging k of the input letters, for
/// every k from [`MIN_WORD_LEN`] up to the full input length.
///
/// Permutations are taken over letter positions, not the alphabet: repeated
/// input letters produce duplicate strings that collapse in the set. Cost is
/// factorial in the input length, which is fine for a handful of letters.
pub fn all_combinations(letters: &str) -> HashSet<String> {
    let chars: Vec<char> = letters.chars().collect();
    let mut combos = HashSet::new();
    if chars.len() < MIN_WORD_LEN {
        return combos;
    }
    for k in MIN_WORD_LEN..=chars.len() {
        combos.extend(
            chars
                .iter()
                .copied()
                .permutations(k)
                .map(|arrangement| arrangement.into_iter().collect::<String>()),
        );
    }
    combos
}

/// Dictionary words formable from the given letters, sorted by descending
/// length and then alphabetically.
pub fn find_words(letters: &str, dictionary: &[String]) -> Vec<String> {
    let max_len = letters.chars().count();
    let pool: HashSet<&str> = dictionary
        .iter()
        .filter(|word| word.chars().count() <= max_len)
        .map(String::as_str)
        .collect();

    let combos = all_combinations(letters);
    log::debug!("{} combinations generated from {} letters", combos.len(), max_len);

    let mut matched: Vec<String> = combos
        .into_iter()
        .filter(|combo| pool.contains(combo.as_str()))
        .collect();
    matched.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    log::debug!("{} dictionary words matched", matched.len());
    matched
}
