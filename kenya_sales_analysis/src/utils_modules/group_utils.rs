use crate::common::*;

use crate::enums::sort_order::*;

#[doc = r#"
    Groups `items` by the key returned from `key_fn` and folds each group with `reduce`.

    Groups are returned in ascending key order. Every grouped aggregate of the
    analysis (month, product, region, payment method, store type, month of year)
    goes through this function with a different key and accumulator.

    # Arguments
    * `items` - rows to group
    * `key_fn` - extracts the grouping key of a row
    * `init` - builds the empty accumulator of a new group
    * `reduce` - folds one row into its group's accumulator
"#]
pub fn group_by_reduce<T, K, A, KF, IF, RF>(
    items: &[T],
    key_fn: KF,
    init: IF,
    reduce: RF,
) -> BTreeMap<K, A>
where
    K: Ord,
    KF: Fn(&T) -> K,
    IF: Fn() -> A,
    RF: Fn(&mut A, &T),
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();

    for item in items {
        let acc: &mut A = groups.entry(key_fn(item)).or_insert_with(&init);
        reduce(acc, item);
    }

    groups
}

#[doc = r#"
    Returns the entry with the largest `metric`.
    On an exact tie the first entry wins, which for key-ordered groups is the lowest key.
"#]
pub fn max_entry_by<I, T, M, F>(entries: I, metric: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    M: PartialOrd,
    F: Fn(&T) -> M,
{
    let mut best: Option<(M, T)> = None;

    for entry in entries {
        let value: M = metric(&entry);
        let replace: bool = match &best {
            Some((best_value, _)) => value > *best_value,
            None => true,
        };

        if replace {
            best = Some((value, entry));
        }
    }

    best.map(|(_, entry)| entry)
}

#[doc = "Stable sort by `metric`; equal metrics keep their current (key) order."]
pub fn sort_by_metric<T, M, F>(items: &mut [T], order: SortOrder, metric: F)
where
    M: PartialOrd,
    F: Fn(&T) -> M,
{
    items.sort_by(|a, b| {
        let ordering = metric(a)
            .partial_cmp(&metric(b))
            .unwrap_or(std::cmp::Ordering::Equal);
        order.apply(ordering)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_key_ordered_and_reduced() {
        let rows = vec![("b", 2), ("a", 1), ("b", 5), ("c", 7), ("a", 3)];
        let groups = group_by_reduce(&rows, |r| r.0, || 0, |acc, r| *acc += r.1);

        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(groups["a"], 4);
        assert_eq!(groups["b"], 7);
        assert_eq!(groups["c"], 7);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        let rows: Vec<(u32, i64)> = Vec::new();
        let groups = group_by_reduce(&rows, |r| r.0, || 0i64, |acc, r| *acc += r.1);
        assert!(groups.is_empty());
    }

    #[test]
    fn max_prefers_first_on_tie() {
        let entries = vec![("a", 3), ("b", 7), ("c", 7)];
        let best = max_entry_by(entries, |e| e.1);
        assert_eq!(best, Some(("b", 7)));
    }

    #[test]
    fn max_of_nothing_is_none() {
        let entries: Vec<(&str, i64)> = Vec::new();
        assert!(max_entry_by(entries, |e| e.1).is_none());
    }

    #[test]
    fn descending_sort_is_stable() {
        let mut items = vec![("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 3.0)];
        sort_by_metric(&mut items, SortOrder::Desc, |i| i.1);
        assert_eq!(items, vec![("b", 3.0), ("d", 3.0), ("a", 1.0), ("c", 1.0)]);
    }

    #[test]
    fn ascending_sort_is_stable() {
        let mut items = vec![("a", 3.0), ("b", 1.0), ("c", 3.0), ("d", 1.0)];
        sort_by_metric(&mut items, SortOrder::Asc, |i| i.1);
        assert_eq!(items, vec![("b", 1.0), ("d", 1.0), ("a", 3.0), ("c", 3.0)]);
    }
}
