//! Case conversion helpers.
//!
//! Identifiers from schema documents come in every style (`streetName`,
//! `street-name`, `<anonymous-schema-1>`). These helpers split them into
//! words and re-join them in the casing the generated code expects.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Converts a string to snake_case.
///
/// Any non-alphanumeric character separates words. Letters outside ASCII
/// are kept, so `名前` stays `名前` rather than vanishing.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Converts a string to PascalCase.
///
/// Digits are merged into the surrounding word, so `schema-1` becomes
/// `Schema1` rather than `Schema_1`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Replaces punctuation with a spelled-out word so it survives case
/// conversion (`-1` becomes `_minus_1`).
#[must_use]
pub fn replace_special_characters(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match special_character_name(c) {
            Some(name) => {
                result.push('_');
                result.push_str(name);
                result.push('_');
            }
            None => result.push(c),
        }
    }
    result
}

fn special_character_name(c: char) -> Option<&'static str> {
    let name = match c {
        ' ' => "space",
        '!' => "exclamation",
        '"' => "quotation",
        '#' => "hash",
        '$' => "dollar",
        '%' => "percent",
        '&' => "ampersand",
        '\'' => "apostrophe",
        '(' => "roundleft",
        ')' => "roundright",
        '*' => "star",
        '+' => "plus",
        ',' => "comma",
        '-' => "minus",
        '.' => "dot",
        '/' => "slash",
        ':' => "colon",
        ';' => "semicolon",
        '<' => "less",
        '=' => "equal",
        '>' => "greater",
        '?' => "question",
        '@' => "at",
        '[' => "squareleft",
        '\\' => "backslash",
        ']' => "squareright",
        '^' => "circumflex",
        '`' => "graveaccent",
        '{' => "curlyleft",
        '|' => "vertical",
        '}' => "curlyright",
        '~' => "tilde",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("streetName"), "street_name");
        assert_eq!(to_snake_case("symbol"), "symbol");
        assert_eq!(to_snake_case("MDEntryPx"), "md_entry_px");
        assert_eq!(to_snake_case("additionalProperties"), "additional_properties");
        assert_eq!(
            to_snake_case("^S(.?*)test&PatternProperties"),
            "s_test_pattern_properties"
        );
        assert_eq!(to_snake_case("名前"), "名前");
        assert_eq!(to_snake_case("--"), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("message_header"), "MessageHeader");
        assert_eq!(to_pascal_case("side"), "Side");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("_address"), "Address");
        assert_eq!(to_pascal_case("<anonymous-schema-1>"), "AnonymousSchema1");
        assert_eq!(to_pascal_case("reserved_Self"), "ReservedSelf");
        assert_eq!(to_pascal_case("click&pay"), "ClickPay");
        assert_eq!(to_pascal_case("lines_0"), "Lines0");
        assert_eq!(to_pascal_case("$"), "");
    }

    #[test]
    fn test_replace_special_characters() {
        assert_eq!(replace_special_characters("-1"), "_minus_1");
        assert_eq!(replace_special_characters("a.b"), "a_dot_b");
        assert_eq!(replace_special_characters("plain"), "plain");
        assert_eq!(to_pascal_case(&replace_special_characters("1.5")), "1Dot5");
    }
}
