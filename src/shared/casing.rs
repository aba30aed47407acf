//! Key-casing helpers for mapping SW360 JSON member names onto Rust attribute names.

/// Converts a camelCase JSON key into its snake_case attribute name.
///
/// An underscore is inserted before every uppercase character that is not
/// the first character, then the whole key is lowercased:
/// `attachmentType` -> `attachment_type`, `createdOn` -> `created_on`.
/// Keys that are already lowercase are returned unchanged.
pub fn to_snake_case(key: &str) -> String {
    let mut snake = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case_single_hump() {
        assert_eq!(to_snake_case("componentType"), "component_type");
        assert_eq!(to_snake_case("attachmentType"), "attachment_type");
    }

    #[test]
    fn test_to_snake_case_lowercase_untouched() {
        assert_eq!(to_snake_case("downloadurl"), "downloadurl");
        assert_eq!(to_snake_case("name"), "name");
    }

    #[test]
    fn test_to_snake_case_leading_uppercase() {
        assert_eq!(to_snake_case("CheckStatus"), "check_status");
    }

    #[test]
    fn test_to_snake_case_consecutive_uppercase() {
        // Every uppercase letter starts a new word
        assert_eq!(to_snake_case("sha1URL"), "sha1_u_r_l");
    }
}
