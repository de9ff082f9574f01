//! Cosine similarity between embedding vectors.

/// Decimal digits kept in a displayed score
pub const SCORE_PRECISION: i32 = 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimilarityError {
    #[error("cannot score a zero vector")]
    ZeroNorm,

    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// `dot(a, b) / (|a| * |b|)`, accumulated in f64.
///
/// Nominally in [-1, 1]; rounding can overshoot by an epsilon and the
/// result is not clamped.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }

    Ok(dot / denominator)
}

/// Round to [`SCORE_PRECISION`] decimal digits
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (score * factor).round() / factor
}

/// Cosine similarity rounded for display
pub fn score(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    cosine_similarity(a, b).map(round_score)
}
