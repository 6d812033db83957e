use sha3::{Digest, Keccak256};

/// keccak256(data)
///
/// Exposed so proof-producing peers and test fixtures hash exactly the way
/// the verifier does.
pub fn keccak(data: &[u8]) -> Vec<u8> {
    Keccak256::digest(data).to_vec()
}

/// keccak256(left || right)
pub fn pair_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().to_vec()
}
