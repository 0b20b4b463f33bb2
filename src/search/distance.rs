//! Edit distance
//!
//! Classic Levenshtein distance: insertion, deletion and substitution
//! each cost 1. Lengths are counted in `char`s, not bytes.

/// Compute the edit distance between `a` and `b`.
///
/// Fills a `(len(b) + 1) x (len(a) + 1)` grid where cell `[j][i]` holds the
/// distance between the first `i` chars of `a` and the first `j` chars of `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut grid = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, cell) in grid[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in grid.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            grid[j][i] = (grid[j][i - 1] + 1) // insertion
                .min(grid[j - 1][i] + 1) // deletion
                .min(grid[j - 1][i - 1] + substitution);
        }
    }

    grid[b.len()][a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(distance("toyota", "toyota"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_empty_boundaries() {
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", "abcd"), 4);
    }

    #[test]
    fn test_single_edits() {
        // insertion
        assert_eq!(distance("toyota", "toyotaa"), 1);
        // deletion
        assert_eq!(distance("honda", "hond"), 1);
        // substitution
        assert_eq!(distance("fiat", "fist"), 1);
    }

    #[test]
    fn test_classic_examples() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("toyota", "zzzzzzz"), 7);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(distance("citroën", "citroen"), 1);
        assert_eq!(distance("ë", ""), 1);
    }

    #[test]
    fn test_symmetric_on_samples() {
        let pairs = [
            ("kitten", "sitting"),
            ("", "porsche"),
            ("audi", "audio"),
            ("lamborghini", "lambo"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{a:?} vs {b:?}");
        }
    }
}
