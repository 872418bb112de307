use crate::utils::error::{GenError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 模組名稱必須能嵌入 C 巨集名稱 (`MODULE_<NAME>_ENABLED`)
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Character '{}' is not allowed in a macro name", bad),
        });
    }
    Ok(())
}

/// 完整的 C 巨集名稱: 不能以數字開頭
pub fn validate_c_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_identifier(field_name, value)?;

    if value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "A macro name cannot start with a digit".to_string(),
        });
    }
    Ok(())
}

/// Path that is emitted inside `#include "..."`.
pub fn validate_include_path(field_name: &str, value: &str) -> Result<()> {
    validate_path(field_name, value)?;

    if let Some(bad) = value.chars().find(|c| matches!(c, '"' | '\n' | '\r')) {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Character {:?} would break the #include line", bad),
        });
    }
    Ok(())
}

pub fn validate_identifiers(field_name: &str, values: &[String]) -> Result<()> {
    for value in values {
        validate_identifier(field_name, value)?;
    }
    Ok(())
}

/// Duplicates are tolerated by the generators; this only reports them.
pub fn find_duplicates(values: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        if !seen.insert(value.as_str()) && !duplicates.contains(&value.as_str()) {
            duplicates.push(value.as_str());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("modules.enabled", "bluetooth").is_ok());
        assert!(validate_identifier("modules.enabled", "text_server_adv").is_ok());
        assert!(validate_identifier("modules.enabled", "gltf2").is_ok());
        assert!(validate_identifier("modules.enabled", "").is_err());
        assert!(validate_identifier("modules.enabled", "two words").is_err());
        assert!(validate_identifier("modules.enabled", "dash-ed").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("modules.header", "modules/modules_enabled.gen.h").is_ok());
        assert!(validate_path("modules.header", "").is_err());
        assert!(validate_path("modules.header", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_c_identifier() {
        assert!(validate_c_identifier("modules.include_guard", "MODULES_ENABLED_GEN_H").is_ok());
        assert!(validate_c_identifier("modules.include_guard", "_PRIVATE_H").is_ok());
        assert!(validate_c_identifier("modules.include_guard", "1ABC").is_err());
        assert!(validate_c_identifier("modules.include_guard", "A-B").is_err());
    }

    #[test]
    fn test_validate_include_path() {
        assert!(validate_include_path("modules.string_header", "core/string/ustring.h").is_ok());
        assert!(validate_include_path("modules.string_header", "a\"b.h").is_err());
        assert!(validate_include_path("modules.string_header", "a.h\n#define X").is_err());
        assert!(validate_include_path("modules.string_header", "").is_err());
    }

    #[test]
    fn test_find_duplicates() {
        let values: Vec<String> = ["a", "b", "a", "c", "a", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(find_duplicates(&values), vec!["a", "b"]);
    }
}
