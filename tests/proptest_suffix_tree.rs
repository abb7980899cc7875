//! Property-based cross-checks of `Tree` against brute-force string search.
//!
//! Inputs are drawn from a small alphabet so that repeated substrings (and
//! therefore suffix links, edge splits, and branching) actually show up;
//! a uniform byte alphabet would mostly produce trees with no shared prefixes.

use proptest::prelude::*;
use suffix_tree::tree::Tree;

const TERMINAL: u8 = 0xff;

fn small_alphabet_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'd', 0..64)
}

fn brute_force_find(s: &[u8], pattern: &[u8]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    s.windows(pattern.len()).any(|w| w == pattern)
}

fn brute_force_occurrences(s: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=s.len()).collect();
    }
    (0..s.len()).filter(|&i| s[i..].starts_with(pattern)).collect()
}

proptest! {
    #[test]
    fn find_agrees_with_brute_force_for_every_substring(s in small_alphabet_bytes()) {
        let tree = Tree::build(&s, TERMINAL).unwrap();
        for len in 0..=s.len() {
            for start in 0..=s.len().saturating_sub(len) {
                let pattern = &s[start..start + len];
                prop_assert_eq!(
                    tree.find(pattern).is_some(),
                    brute_force_find(&s, pattern),
                    "mismatch for pattern {:?}", pattern
                );
            }
        }
    }

    #[test]
    fn occurrences_agree_with_brute_force(s in small_alphabet_bytes(), pat_len in 0usize..6) {
        let tree = Tree::build(&s, TERMINAL).unwrap();
        if pat_len > s.len() {
            return Ok(());
        }
        for start in 0..=s.len().saturating_sub(pat_len) {
            let pattern = &s[start..start + pat_len];
            if let Some(locus) = tree.find(pattern) {
                let mut got = tree.occurrences(locus);
                got.sort_unstable();
                let mut expected = brute_force_occurrences(&s, pattern);
                expected.sort_unstable();
                prop_assert_eq!(got, expected);
            } else {
                prop_assert!(!brute_force_find(&s, pattern));
            }
        }
    }

    #[test]
    fn every_leaf_path_label_is_a_full_suffix(s in small_alphabet_bytes()) {
        let tree = Tree::build(&s, TERMINAL).unwrap();
        let full = tree.occurrences(tree.root());
        let mut starts: Vec<usize> = full.clone();
        starts.sort_unstable();
        prop_assert_eq!(starts, (0..=s.len()).collect::<Vec<_>>());
        for start in full {
            let leaf = tree.find(&tree.string()[start..]).unwrap();
            prop_assert!(tree.is_leaf(leaf));
            prop_assert_eq!(tree.suffix_index(leaf), Some(start));
        }
    }

    #[test]
    fn siblings_never_share_a_first_edge_byte(s in small_alphabet_bytes()) {
        let tree = Tree::build(&s, TERMINAL).unwrap();
        let mut stack = vec![tree.root()];
        while let Some(n) = stack.pop() {
            let mut seen = std::collections::HashSet::new();
            let mut cur = tree.first_child(n);
            while let Some(c) = cur {
                let byte = tree.edge_label(c)[0];
                prop_assert!(seen.insert(byte));
                stack.push(c);
                cur = tree.next_sibling(c);
            }
        }
    }

    #[test]
    fn terminal_byte_in_input_is_rejected(s in small_alphabet_bytes()) {
        let mut with_terminal = s.clone();
        with_terminal.push(TERMINAL);
        prop_assert!(Tree::build(&with_terminal, TERMINAL).is_err());
    }
}
