//! Set primitives over ordered element lists.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Elements present in both `a` and `b`.
///
/// The longer operand drives the output order (`a` wins on equal length).
/// Duplicates are removed from the result; the inputs are left untouched.
pub fn intersect<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let (longer, shorter) = if b.len() > a.len() { (b, a) } else { (a, b) };
    if shorter.is_empty() {
        return Vec::new();
    }

    let lookup: HashSet<&T> = shorter.iter().collect();
    let mut emitted: HashSet<&T> = HashSet::with_capacity(lookup.len());

    longer
        .iter()
        .filter(|e| lookup.contains(e) && emitted.insert(*e))
        .cloned()
        .collect()
}

/// `sets[index]` minus every other set, as a multiset.
///
/// Each occurrence of an element in another set cancels one copy in
/// `sets[index]`, earliest copy first, so `[a, a, b]` minus `[a]` is
/// `[a, b]`. Surviving elements keep their order. An out-of-range index
/// yields an empty list.
pub fn exclusive_elements<T: Eq + Hash + Clone>(index: usize, sets: &[Vec<T>]) -> Vec<T> {
    let Some(own) = sets.get(index) else {
        return Vec::new();
    };

    let mut pending: HashMap<&T, usize> = HashMap::new();
    for (_, set) in sets.iter().enumerate().filter(|(i, _)| *i != index) {
        for element in set {
            *pending.entry(element).or_insert(0) += 1;
        }
    }

    own.iter()
        .filter(|e| match pending.get_mut(e) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
