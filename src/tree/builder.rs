//! McCreight's linear-time suffix tree construction.
//!
//! Ported from the structure of the reference C implementation (`suffix_tree.c`,
//! Mailund & Besenbacher): the same `head_i`/`term_i` bookkeeping, the same
//! `slowScan`/`fastScan` split between character-by-character and
//! skip-by-edge-length descent, and the same `insertBefore` edge-split. Pointers
//! become [`NodeId`] arena indices and the `tree->new_node` side-channel becomes
//! an ordinary return value.

use crate::error::{Result, TreeError};
use crate::tree::node::{Node, NodeId};

fn push_node(nodes: &mut Vec<Node>, node: Node) -> NodeId {
    let id = NodeId::new(nodes.len());
    nodes.push(node);
    id
}

/// Appends `child` to the tail of `parent`'s child list. O(1).
fn append_child(nodes: &mut [Node], parent: NodeId, child: NodeId) {
    let last = nodes[parent.index()].last_child;
    nodes[child.index()].prev = last;
    nodes[child.index()].next = None;
    match last {
        Some(l) => nodes[l.index()].next = Some(child),
        None => nodes[parent.index()].first_child = Some(child),
    }
    nodes[parent.index()].last_child = Some(child);
}

/// Replaces `old` with `new` in `parent`'s child list, preserving position. O(1).
fn replace_child(nodes: &mut [Node], parent: NodeId, old: NodeId, new: NodeId) {
    let prev = nodes[old.index()].prev;
    let next = nodes[old.index()].next;
    nodes[new.index()].prev = prev;
    nodes[new.index()].next = next;
    match prev {
        Some(p) => nodes[p.index()].next = Some(new),
        None => nodes[parent.index()].first_child = Some(new),
    }
    match next {
        Some(n) => nodes[n.index()].prev = Some(new),
        None => nodes[parent.index()].last_child = Some(new),
    }
    nodes[old.index()].prev = None;
    nodes[old.index()].next = None;
}

/// Inserts a fresh internal node on the edge into `old`, splitting it at `pos`
/// (the last byte index of the upper fragment). Returns the new internal node.
pub(crate) fn insert_before(nodes: &mut Vec<Node>, old: NodeId, pos: usize) -> NodeId {
    let (parent, old_start, term_number) = {
        let o = &nodes[old.index()];
        (
            o.parent.expect("insert_before: old has no parent (root cannot be split)"),
            o.start as usize,
            o.term_number,
        )
    };
    debug_assert!(pos >= old_start, "split position must be on old's incoming edge");

    let parent_depth = nodes[parent.index()].depth;
    let mid_depth = parent_depth + (pos - old_start + 1);
    let mid = Node::child(parent, old_start, pos, mid_depth, term_number);
    let mid_id = push_node(nodes, mid);

    replace_child(nodes, parent, old, mid_id);

    nodes[old.index()].parent = Some(mid_id);
    nodes[old.index()].start = (pos + 1) as isize;
    nodes[mid_id.index()].first_child = Some(old);
    nodes[mid_id.index()].last_child = Some(old);

    mid_id
}

/// Finds the child of `n` whose edge starts with `byte`, if any.
fn find_child(nodes: &[Node], s: &[u8], n: NodeId, byte: u8) -> Option<NodeId> {
    let mut cur = nodes[n.index()].first_child;
    while let Some(c) = cur {
        let cn = &nodes[c.index()];
        if s[cn.start as usize] == byte {
            return Some(c);
        }
        cur = cn.next;
    }
    None
}

/// Character-by-character descent matching `s[start..=end]` against edge labels.
///
/// Splits an edge via [`insert_before`] as soon as the remaining pattern is
/// exhausted mid-edge, or on the first mismatching byte.
pub(crate) fn slow_scan(nodes: &mut Vec<Node>, s: &[u8], n: NodeId, start: isize, end: isize) -> NodeId {
    if start > end {
        return n;
    }
    let tail_length = end - start + 1;
    let target = s[start as usize];

    match find_child(nodes, s, n, target) {
        None => n,
        Some(c) => {
            let (c_start, c_end) = {
                let cn = &nodes[c.index()];
                (cn.start, cn.end)
            };
            let mut k: isize = 0;
            while s[(c_start + k) as usize] == s[(start + k) as usize] {
                if k == c_end - c_start {
                    if k + 1 == tail_length {
                        return c;
                    }
                    return slow_scan(nodes, s, c, start + k + 1, end);
                }
                if k + 1 == tail_length {
                    return insert_before(nodes, c, (c_start + k) as usize);
                }
                k += 1;
            }
            insert_before(nodes, c, (c_start + k - 1) as usize)
        }
    }
}

/// Skip-by-edge-length descent matching `s[start..=end]`, which is known (via
/// the suffix-link invariant) to occur along some path from `n`. Only the
/// first byte of each edge is checked.
///
/// Returns the node reached and whether an edge had to be split to land on it.
pub(crate) fn fast_scan(nodes: &mut Vec<Node>, s: &[u8], n: NodeId, start: isize, end: isize) -> (NodeId, bool) {
    if start > end {
        return (n, false);
    }
    let mut x = start;
    let mut cur = n;
    while x < end + 1 {
        let c = find_child(nodes, s, cur, s[x as usize])
            .expect("fast_scan: suffix-link guarantee violated, no matching child");
        let cn = &nodes[c.index()];
        x += cn.end - cn.start + 1;
        cur = c;
    }
    if x == end + 1 {
        (cur, false)
    } else {
        let pos = (nodes[cur.index()].end + end - x + 1) as usize;
        (insert_before(nodes, cur, pos), true)
    }
}

/// Runs McCreight's algorithm over `s` (the already-terminated string) and
/// returns the populated node arena, with the root at index 0.
pub(crate) fn build(s: &[u8]) -> Result<Vec<Node>> {
    let l = s.len();
    let mut nodes: Vec<Node> = Vec::new();
    nodes
        .try_reserve_exact(2 * l.max(1))
        .map_err(|e| TreeError::out_of_memory(format!("node arena ({e})")))?;

    let root = push_node(&mut nodes, Node::root());
    nodes[root.index()].suffix_link = Some(root);

    let leaf0 = push_node(&mut nodes, Node::child(root, 0, l - 1, l, 0));
    append_child(&mut nodes, root, leaf0);

    let mut head = root;
    let mut term = leaf0;

    for i in 1..l {
        let next_head;
        if head == root {
            let (term_start, term_end) = {
                let t = &nodes[term.index()];
                (t.start, t.end)
            };
            next_head = slow_scan(&mut nodes, s, root, term_start + 1, term_end);
        } else {
            let parent = nodes[head.index()]
                .parent
                .expect("head is always a real node with a parent");
            let (head_start, head_end) = {
                let h = &nodes[head.index()];
                (h.start, h.end)
            };

            let (w, split) = if parent != root {
                let link = nodes[parent.index()]
                    .suffix_link
                    .expect("parent's suffix link is set before any descendant needs it");
                fast_scan(&mut nodes, s, link, head_start, head_end)
            } else {
                fast_scan(&mut nodes, s, root, head_start + 1, head_end)
            };
            nodes[head.index()].suffix_link = Some(w);

            next_head = if split {
                w
            } else {
                let (term_start, term_end) = {
                    let t = &nodes[term.index()];
                    (t.start, t.end)
                };
                slow_scan(&mut nodes, s, w, term_start, term_end)
            };
        }

        head = next_head;
        let depth = nodes[head.index()].depth;
        let start = depth + i;
        let leaf = push_node(&mut nodes, Node::child(head, start, l - 1, l - i, i));
        append_child(&mut nodes, head, leaf);
        term = leaf;
    }

    Ok(nodes)
}
