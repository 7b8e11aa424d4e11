use proptest::prelude::*;
use setkit::Set;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Contains(u8),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        8 => any::<u8>().prop_map(Operation::Insert),
        6 => any::<u8>().prop_map(Operation::Remove),
        4 => any::<u8>().prop_map(Operation::Contains),
        1 => Just(Operation::Clear),
    ]
}

fn small_set() -> impl Strategy<Value = Set<u8>> {
    proptest::collection::vec(0u8..32, 0..24).prop_map(|values| Set::create(values))
}

fn as_std(set: &Set<u8>) -> HashSet<u8> {
    set.iter().copied().collect()
}

proptest! {
    #[test]
    fn test_set_matches_std_hash_set(ops in proptest::collection::vec(operation(), 1..400)) {
        let mut std_set = HashSet::new();
        let mut set = Set::new();

        for op in ops {
            match op {
                Operation::Insert(v) => {
                    prop_assert_eq!(set.insert(v), std_set.insert(v), "Insert result mismatch for {}", v);
                }
                Operation::Remove(v) => {
                    prop_assert_eq!(set.discard(&v), std_set.remove(&v), "Remove result mismatch for {}", v);
                }
                Operation::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), std_set.contains(&v), "Contains mismatch for {}", v);
                }
                Operation::Clear => {
                    set.clear();
                    std_set.clear();
                }
            }
            prop_assert_eq!(set.len(), std_set.len(), "Length mismatch");
        }

        // Final consistency check
        prop_assert_eq!(as_std(&set), std_set);
    }

    #[test]
    fn test_create_members_are_distinct_values(values in proptest::collection::vec(any::<i16>(), 0..64)) {
        let set = Set::create(values.clone());
        let members = set.members();

        let expected: HashSet<i16> = values.into_iter().collect();
        prop_assert_eq!(members.len(), expected.len());
        prop_assert_eq!(members.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_remove_then_contains(mut set in small_set(), v in 0u8..32) {
        let others: HashSet<u8> = as_std(&set).into_iter().filter(|x| *x != v).collect();
        set.remove([v]);
        prop_assert!(!set.contains(&v));
        prop_assert_eq!(as_std(&set), others);
    }

    #[test]
    fn test_deep_copy_is_equal_and_independent(set in small_set(), extra in 32u8..64) {
        let mut copy = set.deep_copy();
        prop_assert!(copy.is_equal(&set));

        copy.add([extra]);
        prop_assert!(!set.contains(&extra));
        prop_assert!(set.is_subset(&copy));
    }

    #[test]
    fn test_union_is_exact(a in small_set(), b in small_set()) {
        let u = a.union(&b);
        let expected: HashSet<u8> = as_std(&a).union(&as_std(&b)).copied().collect();
        prop_assert_eq!(as_std(&u), expected);
        prop_assert!(a.is_subset(&u));
        prop_assert!(b.is_subset(&u));
    }

    #[test]
    fn test_intersection_and_difference_match_std(a in small_set(), b in small_set()) {
        let expected_i: HashSet<u8> = as_std(&a).intersection(&as_std(&b)).copied().collect();
        let expected_d: HashSet<u8> = as_std(&a).difference(&as_std(&b)).copied().collect();
        prop_assert_eq!(as_std(&a.intersection(&b)), expected_i);
        prop_assert_eq!(as_std(&a.difference(&b)), expected_d);
    }

    #[test]
    fn test_partition_law(a in small_set(), b in small_set()) {
        let rebuilt = a.intersection(&b).union(&a.difference(&b));
        prop_assert!(rebuilt.is_equal(&a));
        prop_assert!(a.intersection(&b).is_disjoint(&a.difference(&b)));
    }

    #[test]
    fn test_subset_reflexive_and_empty(a in small_set()) {
        prop_assert!(a.is_subset(&a));
        prop_assert!(Set::new().is_subset(&a));
    }

    #[test]
    fn test_equality_is_an_equivalence(a in small_set(), b in small_set()) {
        // Reflexive
        prop_assert!(a.is_equal(&a));

        // Symmetric
        prop_assert_eq!(a.is_equal(&b), b.is_equal(&a));

        // Transitive, through a copy built in a different order
        let mut members = b.members();
        members.reverse();
        let c = Set::create(members);
        if a.is_equal(&b) {
            prop_assert!(a.is_equal(&c));
        }
        prop_assert!(b.is_equal(&c));
    }
}
