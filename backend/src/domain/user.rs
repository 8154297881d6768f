//! User data model.
//!
//! Users exist to support future authenticated tooling around the contact
//! inbox; no HTTP surface exposes them today. The storage contract still
//! covers create and lookup, so the types live here with full validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was not a valid UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The username was empty or whitespace-only.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The username was shorter than the minimum length.
    #[error("username must be at least {min} characters")]
    UsernameTooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The username exceeded the maximum length.
    #[error("username must be at most {max} characters")]
    UsernameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The username contained characters outside the accepted set.
    #[error("username may only contain letters, numbers, or underscores")]
    UsernameInvalidCharacters,
    /// The password hash was empty.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    ///
    /// # Errors
    /// Returns [`UserValidationError::InvalidId`] when the input is not a
    /// valid UUID.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an identifier read back from the store.
    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        let pattern = "^[A-Za-z0-9_]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Unique login name for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from owned input.
    ///
    /// # Errors
    /// Returns a [`UserValidationError`] describing the first rule the
    /// candidate breaks.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        let length = username.chars().count();
        if length < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if length > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }

        if !username_regex().is_match(&username) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }

        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Input for creating a new user record.
///
/// Carries a pre-computed password hash; this service never sees or stores
/// plaintext passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    password_hash: String,
}

impl NewUser {
    /// Construct a [`NewUser`] from a validated username and password hash.
    ///
    /// # Errors
    /// Returns [`UserValidationError::EmptyPasswordHash`] when the hash is
    /// blank.
    pub fn new(
        username: Username,
        password_hash: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let password_hash = password_hash.into();
        if password_hash.trim().is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self {
            username,
            password_hash,
        })
    }

    /// Login name for the new user.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Pre-computed password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Stored user record.
///
/// Never serialised towards clients; the password hash must not leave the
/// process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password_hash: String,
}

impl User {
    /// Assemble a stored user from its parts.
    #[must_use]
    pub fn new(id: UserId, username: Username, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique login name.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn user_id_round_trips_through_string_form() {
        let id = UserId::random();
        let parsed = UserId::new(id.to_string()).expect("valid id");
        assert_eq!(parsed, id);
    }

    #[test]
    fn user_id_rejects_non_uuid_input() {
        assert_eq!(UserId::new("not-a-uuid"), Err(UserValidationError::InvalidId));
    }

    #[rstest]
    #[case("jane_doe")]
    #[case("Jane99")]
    #[case("abc")]
    fn username_accepts_valid_names(#[case] candidate: &str) {
        let username = Username::new(candidate).expect("valid username");
        assert_eq!(username.as_ref(), candidate);
    }

    #[rstest]
    #[case("", UserValidationError::EmptyUsername)]
    #[case("  ", UserValidationError::EmptyUsername)]
    #[case("ab", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
    #[case("jane doe", UserValidationError::UsernameInvalidCharacters)]
    #[case("jane@doe", UserValidationError::UsernameInvalidCharacters)]
    fn username_rejects_invalid_names(
        #[case] candidate: &str,
        #[case] expected: UserValidationError,
    ) {
        assert_eq!(Username::new(candidate), Err(expected));
    }

    #[test]
    fn username_rejects_overlong_names() {
        let candidate = "a".repeat(USERNAME_MAX + 1);
        assert_eq!(
            Username::new(candidate),
            Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX })
        );
    }

    #[test]
    fn new_user_rejects_blank_password_hash() {
        let username = Username::new("jane_doe").expect("valid username");
        assert_eq!(
            NewUser::new(username, "  "),
            Err(UserValidationError::EmptyPasswordHash)
        );
    }
}
