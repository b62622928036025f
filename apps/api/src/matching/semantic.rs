//! Embedding-based semantic scoring.
//!
//! The engine never generates embeddings. It scores whatever vectors the
//! caller supplied; absent or unusable vectors degrade to 0 rather than
//! failing the whole match.

use tracing::warn;

/// Cosine similarity of two vectors, or None when the pair is unusable
/// (different dimensions, empty, or a zero-magnitude vector).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Semantic sub-score plus whether an embedding was missing outright.
/// Cosine output in [-1, 1] remaps linearly onto 0-100.
pub fn semantic_score(resume: Option<&[f32]>, job: Option<&[f32]>) -> (u32, bool) {
    let (Some(a), Some(b)) = (resume, job) else {
        return (0, true);
    };
    match cosine_similarity(a, b) {
        Some(cosine) => (remap(cosine), false),
        None => {
            warn!(
                resume_dims = a.len(),
                job_dims = b.len(),
                "embeddings unusable for semantic scoring"
            );
            (0, false)
        }
    }
}

fn remap(cosine: f64) -> u32 {
    ((cosine + 1.0) * 50.0).round().clamp(0.0, 100.0) as u32
}
