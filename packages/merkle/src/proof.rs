use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use bcos_apis::strip_hex_prefix;

use crate::error::MerkleError;
use crate::hash::pair_hash;

/// Maximum number of path entries accepted in a proof. Bounds the work a
/// single verification call can be made to do.
const MAX_PATH_LEN: usize = 100;

/// Which side of the running hash a sibling sits on. Carried explicitly per
/// entry; never inferred from the entry's position in the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

/// One entry of an authentication path: a sibling hash plus the side it
/// joins the running hash on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofNode {
    /// 32-byte sibling hash, hex with optional `0x` prefix.
    pub hash: String,
    pub position: Position,
}

impl ProofNode {
    fn sibling_bytes(&self, index: usize) -> Result<Vec<u8>, MerkleError> {
        let bytes = hex::decode(strip_hex_prefix(&self.hash)).map_err(|e| {
            MerkleError::SiblingNotHex {
                index,
                reason: e.to_string(),
            }
        })?;
        if bytes.len() != Keccak256::output_size() {
            return Err(MerkleError::SiblingWidth {
                index,
                expected: Keccak256::output_size(),
                got: bytes.len(),
            });
        }
        Ok(bytes)
    }
}

/// Ordered authentication path from a leaf to a block root.
///
/// The path carries sibling hashes only; the leaf value and the trusted
/// root are supplied by the caller of each verification operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    pub path: Vec<ProofNode>,
}

impl Proof {
    /// Performs basic validation: every sibling decodes to exactly the hash
    /// width and the path length stays under `MAX_PATH_LEN`.
    pub fn validate_basic(&self) -> Result<(), MerkleError> {
        if self.path.len() > MAX_PATH_LEN {
            return Err(MerkleError::PathTooLong {
                max: MAX_PATH_LEN,
                got: self.path.len(),
            });
        }
        for (i, node) in self.path.iter().enumerate() {
            node.sibling_bytes(i)?;
        }
        Ok(())
    }

    /// Recomputes the root implied by this path for the given leaf input.
    ///
    /// Folds the path in order: the running value starts as the leaf input
    /// and is re-hashed with each sibling on the sibling's declared side.
    /// An empty path yields the leaf input unchanged, which is the root of
    /// a single-artifact block.
    pub fn compute_root(&self, leaf: &[u8]) -> Result<Vec<u8>, MerkleError> {
        self.validate_basic()?;
        let mut current = leaf.to_vec();
        for (i, node) in self.path.iter().enumerate() {
            let sibling = node.sibling_bytes(i)?;
            current = match node.position {
                Position::Left => pair_hash(&sibling, &current),
                Position::Right => pair_hash(&current, &sibling),
            };
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::pair_hash;

    fn node(hash: &str, position: Position) -> ProofNode {
        ProofNode {
            hash: hash.to_string(),
            position,
        }
    }

    #[test]
    fn test_proof_validate_basic() {
        let proof = Proof {
            path: vec![node("0xdeadbeef", Position::Left)],
        };
        assert_eq!(
            proof.validate_basic(),
            Err(MerkleError::SiblingWidth {
                index: 0,
                expected: 32,
                got: 4,
            })
        );

        let proof = Proof {
            path: vec![node("not-hex-at-all", Position::Right)],
        };
        assert!(matches!(
            proof.validate_basic(),
            Err(MerkleError::SiblingNotHex { index: 0, .. })
        ));

        let proof = Proof {
            path: vec![node(&"00".repeat(32), Position::Left); MAX_PATH_LEN + 1],
        };
        assert_eq!(
            proof.validate_basic(),
            Err(MerkleError::PathTooLong {
                max: MAX_PATH_LEN,
                got: MAX_PATH_LEN + 1,
            })
        );

        // Good case, with and without the 0x prefix
        let proof = Proof {
            path: vec![
                node(&"11".repeat(32), Position::Left),
                node(&format!("0x{}", "22".repeat(32)), Position::Right),
            ],
        };
        assert_eq!(proof.validate_basic(), Ok(()));
    }

    #[test]
    fn test_compute_root_empty_path_is_leaf() {
        let proof = Proof { path: vec![] };
        let leaf = b"sole artifact".to_vec();
        assert_eq!(proof.compute_root(&leaf), Ok(leaf));
    }

    #[test]
    fn test_compute_root_respects_sibling_side() {
        let leaf = vec![0xaa; 32];
        let sibling = vec![0xbb; 32];
        let sibling_hex = hex::encode(&sibling);

        let left = Proof {
            path: vec![node(&sibling_hex, Position::Left)],
        };
        let right = Proof {
            path: vec![node(&sibling_hex, Position::Right)],
        };

        assert_eq!(left.compute_root(&leaf), Ok(pair_hash(&sibling, &leaf)));
        assert_eq!(right.compute_root(&leaf), Ok(pair_hash(&leaf, &sibling)));
        assert_ne!(
            left.compute_root(&leaf).unwrap(),
            right.compute_root(&leaf).unwrap()
        );
    }

    #[test]
    fn test_compute_root_folds_in_order() {
        let leaf = vec![0x01; 33];
        let sib0 = vec![0x02; 32];
        let sib1 = vec![0x03; 32];
        let proof = Proof {
            path: vec![
                node(&hex::encode(&sib0), Position::Right),
                node(&hex::encode(&sib1), Position::Left),
            ],
        };
        let expected = pair_hash(&sib1, &pair_hash(&leaf, &sib0));
        assert_eq!(proof.compute_root(&leaf), Ok(expected));
    }

    #[test]
    fn test_malformed_sibling_is_an_error_not_false() {
        let proof = Proof {
            path: vec![node("0xffff", Position::Left)],
        };
        assert_eq!(
            proof.compute_root(&[0u8; 33]),
            Err(MerkleError::SiblingWidth {
                index: 0,
                expected: 32,
                got: 2,
            })
        );
    }
}
