use crate::analysis::tokenizer::SparseVector;

/// Cosine similarity between two term-frequency vectors (0.0 – 1.0).
///
/// Returns exactly 0.0 when either vector is empty, so empty text never divides by zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut dot = 0.0_f64;
    let mut mag_a = 0.0_f64;

    for (token, &count) in a {
        let count = f64::from(count);
        mag_a += count * count;
        if let Some(&other) = b.get(token) {
            dot += count * f64::from(other);
        }
    }

    let mag_b: f64 = b.values().map(|&c| f64::from(c) * f64::from(c)).sum();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a.sqrt() * mag_b.sqrt())
}
