//! CSV header normalization and validation.

use adperf_model::columns;

/// Trims surrounding whitespace and a leading byte-order mark.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Required columns absent from `headers`, in reporting order.
pub fn missing_required_columns(headers: &[String]) -> Vec<String> {
    columns::REQUIRED
        .iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .map(|required| (*required).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_trims() {
        assert_eq!(normalize_header("  Impressions "), "Impressions");
        assert_eq!(normalize_header("\u{feff}Advertiser"), "Advertiser");
        assert_eq!(
            normalize_header(" Publisher Name (with tail aggregation)\t"),
            "Publisher Name (with tail aggregation)"
        );
    }

    #[test]
    fn test_missing_required_columns_lists_all() {
        let headers = vec!["Publisher Name".to_string(), "Site".to_string()];
        assert_eq!(
            missing_required_columns(&headers),
            vec![
                "Impressions".to_string(),
                "Advertiser Cost (Adv Currency)".to_string(),
                "Campaign".to_string(),
            ]
        );
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let headers: Vec<String> = ["publisher name", "Impressions", "Campaign"]
            .iter()
            .map(|h| (*h).to_string())
            .chain(std::iter::once("Advertiser Cost (Adv Currency)".to_string()))
            .collect();
        assert_eq!(missing_required_columns(&headers), vec!["Publisher Name"]);
    }
}
