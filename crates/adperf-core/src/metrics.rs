//! Derived metric formulas shared by aggregation and summary stats.

/// Cost per thousand impressions; zero when there are no impressions.
pub fn cpm(spend: f64, impressions: i64) -> f64 {
    if impressions > 0 {
        spend / impressions as f64 * 1000.0
    } else {
        0.0
    }
}

/// Percentage of `total` represented by `part`; zero when `total` is not positive.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpm() {
        assert_eq!(cpm(1250.0, 25_000), 50.0);
        assert_eq!(cpm(10.0, 0), 0.0);
        assert_eq!(cpm(10.0, -5), 0.0);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(25.0, 100.0), 25.0);
        assert_eq!(share_percent(25.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(55.5555, 1), 55.6);
        assert_eq!(round_to(44.4444, 1), 44.4);
        assert_eq!(round_to(56.5973651293435, 2), 56.6);
    }
}
