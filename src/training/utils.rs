use serde_yaml::Value;

/// Whether a YAML value counts as set: null, `false`, zero, `""` and empty
/// collections do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// A required field is blank when it is unset or renders to whitespace.
pub fn is_blank(value: &Value) -> bool {
    !is_truthy(value) || display_value(value).trim().is_empty()
}

/// String form of a scalar as it appears in reports and date parsing.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Lower-cased text after the last `.`; a name without a dot is its own extension.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&yaml("~")));
        assert!(!is_truthy(&yaml("false")));
        assert!(!is_truthy(&yaml("0")));
        assert!(!is_truthy(&yaml("0.0")));
        assert!(!is_truthy(&yaml("''")));
        assert!(!is_truthy(&yaml("[]")));
        assert!(!is_truthy(&yaml("{}")));
        assert!(is_truthy(&yaml("'   '")));
        assert!(is_truthy(&yaml("1.0.0")));
        assert!(is_truthy(&yaml("42")));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(&yaml("'   '")));
        assert!(is_blank(&yaml("~")));
        assert!(!is_blank(&yaml("MIT")));
        assert!(!is_blank(&yaml("[a]")));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&yaml("01-01-2024")), "01-01-2024");
        assert_eq!(display_value(&yaml("20240101")), "20240101");
        assert_eq!(display_value(&yaml("true")), "true");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("data.csv"), "csv");
        assert_eq!(extension_of("archive.tar.GZ"), "gz");
        assert_eq!(extension_of("Makefile"), "makefile");
        assert_eq!(extension_of("trailing."), "");
    }
}
