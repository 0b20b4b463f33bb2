use proptest::prelude::*;

use super::distance::distance;
use super::engine::{search, Searchable};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    description: String,
    creator: String,
}

impl Searchable for Entry {
    fn name(&self) -> &str {
        &self.name
    }

    fn token_fields(&self) -> [&str; 3] {
        [&self.name, &self.description, &self.creator]
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,8}"
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::vec(
        (word(), "[a-z ]{0,20}", word()).prop_map(|(name, description, creator)| Entry {
            name,
            description,
            creator,
        }),
        0..8,
    )
}

// Edit distance is a metric on the tested inputs
proptest! {
    #[test]
    fn distance_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero(a in "\\PC{0,16}") {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn distance_to_empty_is_length(a in "\\PC{0,16}") {
        prop_assert_eq!(distance("", &a), a.chars().count());
        prop_assert_eq!(distance(&a, ""), a.chars().count());
    }

    #[test]
    fn distance_bounded_by_longer_length(a in "[a-c]{0,10}", b in "[a-c]{0,10}") {
        let longer = a.chars().count().max(b.chars().count());
        prop_assert!(distance(&a, &b) <= longer);
    }
}

// Cascade behaviour over arbitrary collections
proptest! {
    #[test]
    fn empty_query_matches_nothing(items in entries()) {
        prop_assert!(search("", &items).is_empty());
    }

    #[test]
    fn exact_matches_come_first_and_alone(items in entries(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let target = items[pick.index(items.len())].name.to_uppercase();
        prop_assume!(!target.is_empty());

        let expected: Vec<&Entry> = items
            .iter()
            .filter(|e| e.name.to_lowercase() == target.to_lowercase())
            .collect();
        prop_assert_eq!(search(&target, &items), expected);
    }

    #[test]
    fn search_is_idempotent_and_pure(items in entries(), query in "[a-z ]{0,6}") {
        let before = items.clone();
        let first = search(&query, &items);
        let second = search(&query, &items);
        prop_assert_eq!(first, second);
        prop_assert_eq!(items, before);
    }

    #[test]
    fn results_preserve_collection_order(items in entries(), query in "[a-z]{1,3}") {
        let results = search(&query, &items);
        let positions: Vec<usize> = results
            .iter()
            .map(|r| items.iter().position(|e| std::ptr::eq(e, *r)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }
}
