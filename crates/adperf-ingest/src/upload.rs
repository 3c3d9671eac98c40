//! Checks and helpers applied to an uploaded file before it is parsed.

use crate::error::{IngestError, Result};

/// File extensions accepted for upload (compared lowercase).
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".csv", ".txt"];

/// MIME types accepted for upload.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["text/csv", "text/plain", "application/csv"];

/// Accepts a file when either its extension or its MIME type looks like CSV.
pub fn validate_file_type(file_name: &str, mime_type: Option<&str>) -> Result<()> {
    let lower = file_name.to_lowercase();
    let has_valid_extension = ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext));
    let has_valid_mime = mime_type.is_some_and(|mime| ACCEPTED_MIME_TYPES.contains(&mime));
    if has_valid_extension || has_valid_mime {
        Ok(())
    } else {
        Err(IngestError::UnsupportedFileType {
            file_name: file_name.to_string(),
        })
    }
}

/// Default dataset name: the file name without a trailing `.csv`.
pub fn dataset_name_from_file(file_name: &str) -> String {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".csv") {
        file_name[..file_name.len() - 4].to_string()
    } else {
        file_name.to_string()
    }
}

/// Human-readable size, e.g. `245.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    // f64 Display drops trailing zeros: 1.50 -> "1.5", 2.00 -> "2".
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_type_accepts_extension_or_mime() {
        assert!(validate_file_type("jan.csv", None).is_ok());
        assert!(validate_file_type("JAN.CSV", None).is_ok());
        assert!(validate_file_type("export.txt", Some("application/octet-stream")).is_ok());
        assert!(validate_file_type("download", Some("text/csv")).is_ok());
        assert!(validate_file_type("download", Some("application/csv")).is_ok());
    }

    #[test]
    fn test_validate_file_type_rejects_others() {
        let err = validate_file_type("report.xlsx", Some("application/vnd.ms-excel"))
            .expect_err("xlsx rejected");
        assert!(matches!(err, IngestError::UnsupportedFileType { .. }));
        assert!(validate_file_type("report.pdf", None).is_err());
    }

    #[test]
    fn test_dataset_name_from_file() {
        assert_eq!(dataset_name_from_file("jan_data.csv"), "jan_data");
        assert_eq!(dataset_name_from_file("Feb.CSV"), "Feb");
        assert_eq!(dataset_name_from_file("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(251_392), "245.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }
}
