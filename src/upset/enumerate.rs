//! Combination enumeration.

use std::hash::Hash;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

use super::intersect::{exclusive_elements, intersect};
use super::record::{CombinationKey, IntersectionRecord};

/// Membership carried by singleton records.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SingletonMode {
    /// Every element of the set
    #[default]
    Full,
    /// Only elements found in no other set
    Exclusive,
}

/// Enumerate combinations with full-membership singletons.
pub fn enumerate<T: Eq + Hash + Clone>(sets: &[Vec<T>]) -> Vec<IntersectionRecord<T>> {
    enumerate_with(sets, SingletonMode::Full)
}

/// Enumerate set combinations and return them largest first.
///
/// For every pair `i < j` the pair itself is emitted, followed by the chain
/// `{i, j, j+1}`, `{i, j, j+1, j+2}`, ... up to the last set. Combinations
/// that skip an index after `j` are never produced, so this is not a full
/// powerset. Each base set gets exactly one singleton record.
pub fn enumerate_with<T: Eq + Hash + Clone>(
    sets: &[Vec<T>],
    singletons: SingletonMode,
) -> Vec<IntersectionRecord<T>> {
    let num_sets = sets.len();
    let mut generated: Vec<IntersectionRecord<T>> = Vec::new();

    for i in 0..num_sets {
        if sets[i].is_empty() {
            warn!("Set {} is empty", i);
        }
        generated.push(IntersectionRecord::new(
            CombinationKey::singleton(i),
            sets[i].clone(),
        ));

        for j in (i + 1)..num_sets {
            let mut key = CombinationKey::pair(i, j);
            let mut elements = intersect(&sets[i], &sets[j]);
            generated.push(IntersectionRecord::new(key.clone(), elements.clone()));

            // chain: contiguous run j+1..num_sets anchored at (i, j)
            for end in (j + 1)..num_sets {
                key = key.extended(end);
                elements = intersect(&elements, &sets[end]);
                generated.push(IntersectionRecord::new(key.clone(), elements.clone()));
            }
        }
    }

    // Singletons are rebuilt from the source sets below.
    generated.retain(|record| !record.is_singleton());
    for i in 0..num_sets {
        let elements = match singletons {
            SingletonMode::Full => sets[i].clone(),
            SingletonMode::Exclusive => exclusive_elements(i, sets),
        };
        generated.push(IntersectionRecord::new(CombinationKey::singleton(i), elements));
    }

    let generated_count = generated.len();
    let mut unique: IndexMap<CombinationKey, IntersectionRecord<T>> =
        IndexMap::with_capacity(generated_count);
    for record in generated {
        unique.entry(record.key.clone()).or_insert(record);
    }
    if unique.len() != generated_count {
        debug!(
            "Dropped {} duplicate combinations",
            generated_count - unique.len()
        );
    }

    let mut records: Vec<IntersectionRecord<T>> = unique.into_values().collect();
    sort_records(&mut records);

    debug!(
        "Enumerated {} combinations over {} sets ({:?} singletons)",
        records.len(),
        num_sets,
        singletons
    );
    records
}

/// Largest intersection first; equal sizes by ascending combination key.
pub fn sort_records<T>(records: &mut [IntersectionRecord<T>]) {
    records.sort_by(|a, b| b.size().cmp(&a.size()).then_with(|| a.key.cmp(&b.key)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keys<T>(records: &[IntersectionRecord<T>], num_sets: usize) -> Vec<String> {
        records.iter().map(|r| r.key.display(num_sets)).collect()
    }

    #[test]
    fn test_two_overlapping_sets() {
        let sets = vec![vec!["a", "b", "c"], vec!["b", "c", "d"]];
        let records = enumerate(&sets);

        assert_eq!(keys(&records, 2), vec!["0", "1", "01"]);
        assert_eq!(records[0].elements, vec!["a", "b", "c"]);
        assert_eq!(records[1].elements, vec!["b", "c", "d"]);
        assert_eq!(records[2].elements, vec!["b", "c"]);
    }

    #[test]
    fn test_three_disjoint_sets() {
        let sets = vec![vec![1, 2], vec![3, 4, 5], vec![6]];
        let records = enumerate(&sets);

        // singletons + {0,1} {0,1,2} {0,2} {1,2}
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].key, CombinationKey::singleton(1));
        assert_eq!(records[0].size(), 3);
        assert_eq!(records[1].key, CombinationKey::singleton(0));
        assert_eq!(records[1].size(), 2);
        assert_eq!(records[2].key, CombinationKey::singleton(2));
        assert_eq!(records[2].size(), 1);

        for record in records.iter().filter(|r| !r.is_singleton()) {
            assert!(record.elements.is_empty(), "{} not empty", record.key);
        }
    }

    #[test]
    fn test_chain_coverage_is_contiguous() {
        let sets: Vec<Vec<u32>> = (0..4).map(|_| vec![1, 2, 3]).collect();
        let records = enumerate(&sets);
        let produced: HashSet<String> = keys(&records, 4).into_iter().collect();

        let expected_keys = [
            "0", "1", "2", "3", "01", "012", "0123", "02", "023", "03", "12", "123", "13", "23",
        ];
        for expected in expected_keys {
            assert!(produced.contains(expected), "missing {}", expected);
        }
        // {0,1,3} skips 2 after the (0,1) anchor
        assert!(!produced.contains("013"));
        assert_eq!(records.len(), 14);
    }

    #[test]
    fn test_one_singleton_per_set_and_unique_keys() {
        let sets = vec![
            vec!["a", "b"],
            vec!["b", "c"],
            vec!["c", "a"],
            vec!["a"],
            vec![],
        ];
        let records = enumerate(&sets);

        for i in 0..sets.len() {
            let count = records
                .iter()
                .filter(|r| r.is_singleton() && r.set_indices() == [i])
                .count();
            assert_eq!(count, 1, "set {}", i);
        }

        let unique: HashSet<&CombinationKey> = records.iter().map(|r| &r.key).collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn test_order_non_increasing_with_key_tie_break() {
        let sets = vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![1, 5]];
        let records = enumerate(&sets);

        for pair in records.windows(2) {
            assert!(pair[0].size() >= pair[1].size());
            if pair[0].size() == pair[1].size() {
                assert!(pair[0].key < pair[1].key);
            }
        }
    }

    #[test]
    fn test_tie_break_uses_indices_past_ten_sets() {
        // equal sizes everywhere: order is by index vector, not by rendered key
        let sets: Vec<Vec<u8>> = (0..12).map(|_| vec![1]).collect();
        let records = enumerate(&sets);

        let position = |key: &CombinationKey| records.iter().position(|r| &r.key == key).unwrap();
        assert!(position(&CombinationKey::pair(1, 2)) < position(&CombinationKey::pair(1, 10)));
        assert!(position(&CombinationKey::singleton(2)) < position(&CombinationKey::singleton(10)));
        assert!(position(&CombinationKey::pair(0, 11)) < position(&CombinationKey::singleton(1)));
        assert_eq!(records[0].key, CombinationKey::singleton(0));
        assert_eq!(records.last().unwrap().key, CombinationKey::singleton(11));
        for pair in records.windows(2) {
            assert!(pair[0].key < pair[1].key);
        }
    }

    #[test]
    fn test_chain_intersects_previous_link() {
        let sets = vec![vec![1, 2, 3, 4], vec![2, 3, 4], vec![3, 4, 9], vec![4]];
        let records = enumerate(&sets);
        let find = |k: &str| {
            records
                .iter()
                .find(|r| r.key.display(4) == k)
                .map(|r| r.elements.clone())
                .unwrap()
        };

        assert_eq!(find("01"), vec![2, 3, 4]);
        assert_eq!(find("012"), vec![3, 4]);
        assert_eq!(find("0123"), vec![4]);
        assert_eq!(find("13"), vec![4]);
    }

    #[test]
    fn test_exclusive_singletons() {
        let sets = vec![vec!["a", "b", "c"], vec!["b", "c", "d"]];
        let records = enumerate_with(&sets, SingletonMode::Exclusive);

        assert_eq!(keys(&records, 2), vec!["01", "0", "1"]);
        assert_eq!(records[1].elements, vec!["a"]);
        assert_eq!(records[2].elements, vec!["d"]);
    }

    #[test]
    fn test_single_and_no_sets() {
        let single = enumerate(&[vec![7, 8]]);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].elements, vec![7, 8]);

        let none: Vec<IntersectionRecord<u8>> = enumerate(&[]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_inputs_not_mutated() {
        let sets = vec![vec!["a", "a", "b"], vec!["a", "b"]];
        let before = sets.clone();
        let records = enumerate(&sets);
        assert_eq!(sets, before);

        // full singleton keeps duplicates of the source set
        let first = records.iter().find(|r| r.key == CombinationKey::singleton(0)).unwrap();
        assert_eq!(first.elements, vec!["a", "a", "b"]);
    }
}
