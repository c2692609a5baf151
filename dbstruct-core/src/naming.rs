//! Identifier normalization for generated names.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])(\d+)([a-zA-Z]?)").expect("valid pattern"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r]+").expect("valid pattern"));

/// Convert to TitleCase (e.g., "user_name" -> "UserName").
pub fn title_case(s: &str) -> String {
    normalize(s, true)
}

/// Convert to camelCase (e.g., "user_name" -> "userName").
///
/// The first letter keeps its original case.
pub fn camel_case(s: &str) -> String {
    normalize(s, false)
}

/// Remove every line break (e.g., a multi-line DDL statement becomes one line).
pub fn one_line(s: &str) -> String {
    LINE_BREAK.replace_all(s, "").into_owned()
}

/// Normalize an identifier into a bare CamelCase identifier.
///
/// `_`, `-` and spaces are word boundaries, and so is each side of a digit
/// run that follows a letter. Characters that are neither ASCII letters,
/// digits nor boundaries are dropped.
pub fn normalize(s: &str, capitalize_first: bool) -> String {
    let spaced = NUMBER_SEQUENCE.replace_all(s, "$1 $2 $3");
    let trimmed = spaced.trim_matches(' ');

    let mut result = String::with_capacity(trimmed.len());
    let mut cap_next = capitalize_first;
    for c in trimmed.chars() {
        match c {
            'A'..='Z' | '0'..='9' => result.push(c),
            'a'..='z' if cap_next => result.push(c.to_ascii_uppercase()),
            'a'..='z' => result.push(c),
            _ => {}
        }
        cap_next = matches!(c, '_' | ' ' | '-');
    }
    result
}

/// Convert a CamelCase identifier to snake_case (e.g., "UserID" -> "user_id").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("user_name"), "UserName");
        assert_eq!(title_case("user"), "User");
        assert_eq!(title_case("app-id"), "AppId");
        assert_eq!(title_case("first last"), "FirstLast");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(camel_case("id"), "id");
        assert_eq!(camel_case("created_at"), "createdAt");
    }

    #[test]
    fn test_digits_are_boundaries() {
        assert_eq!(title_case("field2name"), "Field2Name");
        assert_eq!(title_case("field2Name"), "Field2Name");
        assert_eq!(camel_case("address2_line"), "address2Line");
        assert_eq!(title_case("v10"), "V10");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(title_case("  app-id "), "AppId");
    }

    #[test]
    fn test_uppercase_letters_kept() {
        assert_eq!(title_case("user_ID"), "UserID");
        assert_eq!(camel_case("UserName"), "UserName");
    }

    #[test]
    fn test_invalid_characters_dropped() {
        assert_eq!(title_case("price($)"), "Price");
        assert_eq!(title_case("naïve_value"), "NaveValue");
        assert_eq!(title_case("a.b"), "Ab");
    }

    #[test]
    fn test_one_line() {
        assert_eq!(
            one_line("CREATE TABLE `t` (\n  `id` int\r\n)"),
            "CREATE TABLE `t` (  `id` int)"
        );
        assert_eq!(one_line("plain"), "plain");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("UserName"), "user_name");
        assert_eq!(to_snake_case("UserID"), "user_id");
        assert_eq!(to_snake_case("Field2Name"), "field2_name");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("id"), "id");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }
}
