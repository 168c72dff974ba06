use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::shared::constants::RESERVED_USERNAME;

lazy_static! {
    /// Regex for validating usernames
    /// Letters, digits and @/./+/-/_ only
    /// - Valid: "john.doe", "user+123", "_admin", "Jo@hn"
    /// - Invalid: "user name", "user!", ""
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").unwrap();

    /// Regex for validating slug fields
    /// Letters, digits, hyphens and underscores
    /// - Valid: "sci-fi", "film_noir", "Drama2"
    /// - Invalid: "sci fi", "genre/slug", ""
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap();
}

/// Validates a username: must match [`USERNAME_REGEX`] and must not be the
/// reserved literal "me" (any case), which is taken by `/v1/users/me/`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.eq_ignore_ascii_case(RESERVED_USERNAME) {
        return Err(ValidationError::new("reserved_username")
            .with_message("username 'me' is not allowed".into()));
    }
    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::new("invalid_username").with_message(
            "username may only contain letters, digits and @/./+/-/_ characters".into(),
        ));
    }
    Ok(())
}

/// Validates a slug against [`SLUG_REGEX`].
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if !SLUG_REGEX.is_match(slug) {
        return Err(ValidationError::new("invalid_slug").with_message(
            "slug may only contain letters, digits, hyphens and underscores".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_regex_valid() {
        assert!(USERNAME_REGEX.is_match("john_doe"));
        assert!(USERNAME_REGEX.is_match("user123"));
        assert!(USERNAME_REGEX.is_match("jane.doe@site"));
        assert!(USERNAME_REGEX.is_match("plus+minus-"));
    }

    #[test]
    fn username_regex_invalid() {
        assert!(!USERNAME_REGEX.is_match("")); // empty
        assert!(!USERNAME_REGEX.is_match("user name")); // space
        assert!(!USERNAME_REGEX.is_match("user!")); // punctuation
    }

    #[test]
    fn reserved_me_is_rejected_any_case() {
        assert!(validate_username("me").is_err());
        assert!(validate_username("Me").is_err());
        assert!(validate_username("ME").is_err());
        assert!(validate_username("mE").is_err());
    }

    #[test]
    fn me_as_substring_is_fine() {
        assert!(validate_username("meme").is_ok());
        assert!(validate_username("me2").is_ok());
        assert!(validate_username("ame").is_ok());
    }

    #[test]
    fn slug_regex() {
        assert!(validate_slug("sci-fi").is_ok());
        assert!(validate_slug("film_noir").is_ok());
        assert!(validate_slug("Drama2").is_ok());
        assert!(validate_slug("sci fi").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("").is_err());
    }
}
