use crate::utils::error::{LookupError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A data source is either an http(s) URL or a local path.
pub fn validate_data_source(field_name: &str, source: &str) -> Result<()> {
    if source.starts_with("http://") || source.starts_with("https://") {
        validate_url(field_name, source)
    } else if source.contains("://") {
        Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: source.to_string(),
            reason: "Only http(s) URLs and local paths are supported".to_string(),
        })
    } else {
        validate_path(field_name, source)
    }
}

pub fn validate_socket_addr(field_name: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LookupError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("data.source", "https://example.com/prices.csv").is_ok());
        assert!(validate_url("data.source", "http://example.com").is_ok());
        assert!(validate_url("data.source", "").is_err());
        assert!(validate_url("data.source", "invalid-url").is_err());
        assert!(validate_url("data.source", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_data_source() {
        assert!(validate_data_source("data.source", "./data/london_housing.csv").is_ok());
        assert!(validate_data_source("data.source", "https://example.com/a.csv").is_ok());
        assert!(validate_data_source("data.source", "s3://bucket/a.csv").is_err());
        assert!(validate_data_source("data.source", "").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "127.0.0.1:8050").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("projection.factor", 1.9, 0.0, 100.0).is_ok());
        assert!(validate_range("projection.factor", -1.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        let absent: Option<String> = None;
        assert_eq!(validate_required_field("data.source", &present).unwrap(), "x");
        assert!(validate_required_field("data.source", &absent).is_err());
    }
}
