//! Whitespace as the browser sees it
//!
//! A form input's `trim()` and `\s` also strip U+FEFF (zero width no-break
//! space), which Rust's `char::is_whitespace` does not.

pub fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn trim(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

pub fn trim_start(value: &str) -> &str {
    value.trim_start_matches(is_form_whitespace)
}

/// Non-empty runs of non-whitespace
pub fn words(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_form_whitespace).filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_is_whitespace() {
        assert_eq!(trim("\u{FEFF} a b \u{FEFF}"), "a b");
        assert_eq!(trim_start("\u{FEFF}\t42 "), "42 ");
        assert_eq!(words("Jane\u{FEFF}Doe").count(), 2);
        assert_eq!(words("  Jane \n Doe  ").collect::<Vec<_>>(), vec!["Jane", "Doe"]);
    }
}
