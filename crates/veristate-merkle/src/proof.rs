//! # Merkle Branch Verification
//!
//! Recomputes a tree root from a leaf and an ordered sibling branch, then
//! compares it against the claimed root. The generalized index drives the
//! traversal one bit per level: an even index means the current node is a
//! left child, an odd index a right child.
//!
//! ## Security Invariant
//!
//! Concatenation order is load-bearing. Hashing `sibling || value` where
//! `value || sibling` was required silently produces a different root with
//! no other symptom, so the parity branch below must never be rearranged.
//! The same untagged SHA-256 over 64 bytes is used at every level; there is
//! no domain separation between leaf and interior positions.

use sha2::{Digest, Sha256};
use thiserror::Error;

use veristate_core::Value;

/// Outcome of a failed proof verification.
///
/// All three variants are caller-recoverable: they signal "this proof is
/// invalid", not a fault in the verifier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    /// The branch holds more siblings than the tree depth implied by the
    /// generalized index supports.
    #[error("branch has extra items")]
    ExtraBranchItems,

    /// The branch ended before the traversal reached the root.
    #[error("branch is missing items")]
    MissingBranchItems,

    /// The recomputed root does not equal the claimed root.
    #[error("root mismatch")]
    RootMismatch,
}

/// Hash two 32-byte values into their parent node.
///
/// Plain SHA-256 over the 64-byte concatenation, no domain tag. This is
/// the only hash operation the verifier performs; proof builders must use
/// the identical construction.
pub fn hash_pair(left: &Value, right: &Value) -> Value {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    Value::new(bytes)
}

/// Verify a Merkle proof branch for a single value in a binary tree.
///
/// `index` is the generalized tree index of `leaf` (1 = root, children of
/// `i` are `2i` and `2i + 1`). `branch` lists the sibling hashes in order
/// from the leaf level upward.
///
/// The traversal keeps a running value and right-shifts the index once per
/// consumed sibling. A shift to zero mid-branch means the branch is too
/// long ([`VerificationError::ExtraBranchItems`]); a final index other
/// than 1 means it was too short ([`VerificationError::MissingBranchItems`]);
/// otherwise the recomputed root is compared byte-exact against `root`
/// ([`VerificationError::RootMismatch`] on inequality).
pub fn verify_proof(
    root: &Value,
    index: u64,
    branch: &[Value],
    leaf: &Value,
) -> Result<(), VerificationError> {
    let mut value = *leaf;
    let mut index = index;
    for sibling in branch {
        value = if index & 1 == 0 {
            hash_pair(&value, sibling)
        } else {
            hash_pair(sibling, &value)
        };
        index >>= 1;
        if index == 0 {
            return Err(VerificationError::ExtraBranchItems);
        }
    }
    if index != 1 {
        return Err(VerificationError::MissingBranchItems);
    }
    if value != *root {
        return Err(VerificationError::RootMismatch);
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn value() -> impl Strategy<Value = Value> {
        any::<[u8; 32]>().prop_map(Value::new)
    }

    /// A random complete tree: `(leaves, pos)` with `leaves.len() == 2^d`
    /// for a random depth `d` in 1..=8.
    fn tree_case() -> impl Strategy<Value = (Vec<Value>, usize)> {
        (1u32..=8).prop_flat_map(|depth| {
            let width = 1usize << depth;
            (
                prop::collection::vec(value(), width),
                0..width,
            )
        })
    }

    /// Rebuild root and branch for `pos`, mirroring the unit-test helper.
    fn build(leaves: &[Value], pos: usize) -> (Value, Vec<Value>, u64) {
        let mut level = leaves.to_vec();
        let mut p = pos;
        let mut branch = Vec::new();
        while level.len() > 1 {
            branch.push(level[p ^ 1]);
            level = level
                .chunks(2)
                .map(|pair| hash_pair(&pair[0], &pair[1]))
                .collect();
            p /= 2;
        }
        let depth = branch.len() as u32;
        (level[0], branch, (1u64 << depth) + pos as u64)
    }

    proptest! {
        /// A correctly built proof always verifies.
        #[test]
        fn round_trip_validity((leaves, pos) in tree_case()) {
            let (root, branch, index) = build(&leaves, pos);
            prop_assert_eq!(verify_proof(&root, index, &branch, &leaves[pos]), Ok(()));
        }

        /// Flipping any bit of the leaf yields RootMismatch.
        #[test]
        fn leaf_tamper_sensitivity(
            (leaves, pos) in tree_case(),
            byte in 0usize..32,
            mask in 1u8..,
        ) {
            let (root, branch, index) = build(&leaves, pos);
            let mut bad = *leaves[pos].as_bytes();
            bad[byte] ^= mask;
            prop_assert_eq!(
                verify_proof(&root, index, &branch, &Value::new(bad)),
                Err(VerificationError::RootMismatch)
            );
        }

        /// Flipping any bit of any sibling yields RootMismatch.
        #[test]
        fn sibling_tamper_sensitivity(
            (leaves, pos) in tree_case(),
            pick in any::<prop::sample::Index>(),
            byte in 0usize..32,
            mask in 1u8..,
        ) {
            let (root, mut branch, index) = build(&leaves, pos);
            let i = pick.index(branch.len());
            let mut bad = *branch[i].as_bytes();
            bad[byte] ^= mask;
            branch[i] = Value::new(bad);
            prop_assert_eq!(
                verify_proof(&root, index, &branch, &leaves[pos]),
                Err(VerificationError::RootMismatch)
            );
        }

        /// One sibling short is always MissingBranchItems.
        #[test]
        fn truncation_sensitivity((leaves, pos) in tree_case()) {
            let (root, mut branch, index) = build(&leaves, pos);
            branch.pop();
            prop_assert_eq!(
                verify_proof(&root, index, &branch, &leaves[pos]),
                Err(VerificationError::MissingBranchItems)
            );
        }

        /// One synthetic sibling extra is always ExtraBranchItems.
        #[test]
        fn extension_sensitivity((leaves, pos) in tree_case(), extra in value()) {
            let (root, mut branch, index) = build(&leaves, pos);
            branch.push(extra);
            prop_assert_eq!(
                verify_proof(&root, index, &branch, &leaves[pos]),
                Err(VerificationError::ExtraBranchItems)
            );
        }
    }
}
