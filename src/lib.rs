//! Linear-time suffix tree construction and exact substring search.
//!
//! Builds the suffix tree of a byte string using McCreight's algorithm and
//! exposes a read-only navigator over the result: edge labels, path labels,
//! parent/child/sibling links, and [`tree::Tree::find`] for exact substring
//! queries in time proportional to the pattern length.
//!
//! ```
//! use suffix_tree::tree::Tree;
//!
//! let tree = Tree::build(b"mississippi", b'$').unwrap();
//! let locus = tree.find(b"ssi").unwrap();
//! let mut occurrences = tree.occurrences(locus);
//! occurrences.sort_unstable();
//! assert_eq!(occurrences, vec![2, 5]);
//! ```

pub mod error;
pub mod tree;

pub use error::{Result, TreeError};
