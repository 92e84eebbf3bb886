use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};

use super::similarity::cosine_similarity;
use crate::skill_normalizer::normalize_skill_set;

/// Dimension of hashed skill vectors.
pub const FEATURE_DIMENSION: usize = 100;

/// Fixed seed so bucket assignment is stable across processes and Rust versions.
/// Changing it changes every vector.
const HASH_SEED_K0: u64 = 0x6a6d_5f73_6b69_6c6c;
const HASH_SEED_K1: u64 = 0x0f1e_2d3c_4b5a_6978;

fn bucket(feature: &str) -> usize {
    let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
    feature.hash(&mut hasher);
    (hasher.finish() % FEATURE_DIMENSION as u64) as usize
}

/// Feature-hash a skill list into a count vector.
///
/// Skills are normalized and de-duplicated first, so order and repeats do not
/// change the vector. Hash collisions add into the same bucket.
pub fn encode_skills(skills: &[String]) -> Vec<f64> {
    let mut vector = vec![0.0; FEATURE_DIMENSION];
    for feature in normalize_skill_set(skills) {
        vector[bucket(&feature)] += 1.0;
    }
    vector
}

/// Cosine similarity of two hashed skill lists; 0.0 when either list is empty.
pub fn feature_similarity(a: &[String], b: &[String]) -> f64 {
    cosine_similarity(&encode_skills(a), &encode_skills(b))
}
