use crate::utils::error::{Result, SeoScanError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_scheme(field_name: &str, scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(SeoScanError::config(
            field_name,
            format!("Unsupported URL scheme: {}", other),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SeoScanError::config(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(SeoScanError::config(field_name, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SeoScanError::config(
            field_name,
            format!("Value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

/// Page paths are appended to the bare domain, so each must be rooted.
pub fn validate_page_paths(field_name: &str, pages: &[String]) -> Result<()> {
    if pages.is_empty() {
        return Err(SeoScanError::config(
            field_name,
            "At least one page path is required",
        ));
    }

    for page in pages {
        if !page.starts_with('/') {
            return Err(SeoScanError::config(
                field_name,
                format!("Page path must start with '/': {}", page),
            ));
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SeoScanError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rejects values reqwest would refuse as a header, such as control characters.
pub fn validate_header_value(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    reqwest::header::HeaderValue::from_str(value).map_err(|_| {
        SeoScanError::config(field_name, "Value is not a valid HTTP header value")
    })?;
    Ok(())
}
