//! Double-hash Merkle tree over chunk digests.
//!
//! Leaves are `sha256d(0x00 || chunk)`, inner nodes `sha256d(0x01 || left || right)`.
//! The tree is reduced level by level into a second buffer; an odd node at
//! the end of a level is paired with itself.

use super::sha256d_parts;

/// A 32-byte node of the tree.
pub type Digest32 = [u8; 32];

const LEAF_PREFIX: &[u8] = &[0x00];
const INNER_PREFIX: &[u8] = &[0x01];

/// Hash a raw chunk into a leaf node.
pub fn leaf_hash(chunk: &[u8]) -> Digest32 {
    sha256d_parts(&[LEAF_PREFIX, chunk])
}

/// Hash two child nodes into their parent.
pub fn inner_hash(left: &Digest32, right: &Digest32) -> Digest32 {
    sha256d_parts(&[INNER_PREFIX, &left[..], &right[..]])
}

/// Collapse a sequence of leaves into the top hash.
///
/// A single leaf is its own top hash. An empty sequence is treated as one
/// empty chunk, so the result is `leaf_hash(b"")`.
pub fn top_hash(leaves: &[Digest32]) -> Digest32 {
    match leaves {
        [] => return leaf_hash(b""),
        [single] => return *single,
        _ => {}
    }

    let mut level: Vec<Digest32> = leaves.to_vec();
    let mut next: Vec<Digest32> = Vec::with_capacity(level.len().div_ceil(2));
    while level.len() > 1 {
        next.clear();
        for pair in level.chunks(2) {
            let right = pair.get(1).unwrap_or(&pair[0]);
            next.push(inner_hash(&pair[0], right));
        }
        std::mem::swap(&mut level, &mut next);
    }
    level[0]
}
