//! Anti-phishing security token shown on trusted vault pages.

use super::AuthDomainError;

/// Required length of the visible token code.
const TOKEN_CODE_LENGTH: usize = 3;

/// Anti-phishing token: a short visible code rendered in user-chosen
/// colours on every trusted vault page.
///
/// Persisted in the config store; constructed only through [`Self::new`]
/// so stored values are re-validated at the point of use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityToken {
    code: String,
    background_colour: String,
    text_colour: String,
}

impl SecurityToken {
    /// Creates a validated security token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidSecurityToken`] when the code is
    /// not exactly three alphanumeric characters or a colour is not a
    /// `#rrggbb` value.
    pub fn new(
        code: impl Into<String>,
        background_colour: impl Into<String>,
        text_colour: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let code = code.into();
        let background_colour = background_colour.into();
        let text_colour = text_colour.into();

        if code.chars().count() != TOKEN_CODE_LENGTH
            || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(AuthDomainError::InvalidSecurityToken(code));
        }
        for colour in [&background_colour, &text_colour] {
            if !Self::is_hex_colour(colour) {
                return Err(AuthDomainError::InvalidSecurityToken(colour.clone()));
            }
        }

        Ok(Self {
            code,
            background_colour,
            text_colour,
        })
    }

    fn is_hex_colour(value: &str) -> bool {
        let Some(digits) = value.strip_prefix('#') else {
            return false;
        };
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Returns the visible token code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the background colour as `#rrggbb`.
    #[must_use]
    pub fn background_colour(&self) -> &str {
        &self.background_colour
    }

    /// Returns the text colour as `#rrggbb`.
    #[must_use]
    pub fn text_colour(&self) -> &str {
        &self.text_colour
    }
}
