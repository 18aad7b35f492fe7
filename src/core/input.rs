use crate::domain::model::DomainList;
use crate::utils::error::{Result, SeoScanError};

/// Splits a comma-separated argument into a [`DomainList`].
///
/// Domain text passes through untouched; only the list shape is checked.
pub fn parse_domain_list(raw: &str) -> Result<DomainList> {
    if raw.trim().is_empty() {
        return Err(SeoScanError::invalid_input("no domains given"));
    }

    let mut domains = Vec::new();
    for (index, segment) in raw.split(',').enumerate() {
        if segment.is_empty() {
            return Err(SeoScanError::invalid_input(format!(
                "empty entry at position {} in '{}'",
                index + 1,
                raw
            )));
        }
        domains.push(segment.to_string());
    }

    Ok(DomainList::new(domains))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_domain() {
        let list = parse_domain_list("whitehouse.gov").unwrap();
        assert_eq!(list.as_slice(), ["whitehouse.gov"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let list = parse_domain_list("whitehouse.gov,gsa.gov,whitehouse.gov").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["whitehouse.gov", "gsa.gov", "whitehouse.gov"]
        );
    }

    #[test]
    fn test_malformed_domains_pass_through() {
        let list = parse_domain_list("https://gsa.gov/,not a domain").unwrap();
        assert_eq!(list.as_slice(), ["https://gsa.gov/", "not a domain"]);
    }

    #[test]
    fn test_empty_input_is_invalid() {
        for raw in ["", "   "] {
            let err = parse_domain_list(raw).unwrap_err();
            assert!(matches!(err, SeoScanError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_empty_segment_is_invalid() {
        for raw in ["gsa.gov,,whitehouse.gov", "gsa.gov,", ",gsa.gov"] {
            let err = parse_domain_list(raw).unwrap_err();
            assert!(matches!(err, SeoScanError::InvalidInput { .. }), "{}", raw);
        }
    }
}
