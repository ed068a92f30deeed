/// Number of flags at which the flag component of the score reaches zero.
pub const FLAG_SATURATION: f64 = 5.0;

const SOURCE_WEIGHT: f64 = 0.4;
const SENTIMENT_WEIGHT: f64 = 0.2;
const FLAG_WEIGHT: f64 = 0.4;

/// Weighted credibility score in `[0, 1]`.
///
/// Source reputation contributes 40%, sentiment neutrality 20% (0.5 is
/// neutral and scores highest) and the flag count 40%, where five or more
/// flags drive that component to zero.
pub fn credibility_score(source_reputation: f64, sentiment: f64, flag_count: usize) -> f64 {
    let neutrality = 1.0 - (sentiment - 0.5).abs() * 2.0;
    let flag_component = (1.0 - flag_count as f64 / FLAG_SATURATION).max(0.0);

    let score = source_reputation * SOURCE_WEIGHT
        + neutrality * SENTIMENT_WEIGHT
        + flag_component * FLAG_WEIGHT;

    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn neutral_unflagged_article_from_default_source() {
        // 0.8 * 0.4 + 1.0 * 0.2 + 1.0 * 0.4
        assert!(approx(credibility_score(0.8, 0.5, 0), 0.92));
    }

    #[test]
    fn flags_reduce_score_linearly_until_saturation() {
        assert!(approx(credibility_score(1.0, 0.5, 1), 0.4 + 0.2 + 0.32));
        assert!(approx(credibility_score(1.0, 0.5, 5), 0.6));
        assert!(approx(credibility_score(1.0, 0.5, 12), 0.6));
    }

    #[test]
    fn extreme_sentiment_loses_neutrality_component() {
        assert!(approx(credibility_score(0.0, 1.0, 0), 0.4));
        assert!(approx(credibility_score(0.0, 0.0, 0), 0.4));
        assert!(approx(credibility_score(0.0, 0.75, 0), 0.5));
    }

    #[test]
    fn result_is_clamped_to_unit_interval() {
        assert_eq!(credibility_score(5.0, 0.5, 0), 1.0);
        assert_eq!(credibility_score(-5.0, 0.0, 10), 0.0);
        assert_eq!(credibility_score(f64::NAN, 0.5, 0), 0.0);
    }
}
