use crate::common::ColorSpaceError;
use crate::model::ColorScheme;
use crate::validation::Validator;

/// Maximum length of a scheme name.
pub const MAX_SCHEME_NAME_LEN: usize = 64;

/// Validation errors for color schemes entered by users
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemeValidationError {
    #[error("Invalid scheme name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    #[error("Invalid color for {field}: '{value}' ({reason})")]
    InvalidColor {
        field: String,
        value: String,
        reason: String,
    },
}

impl SchemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            SchemeValidationError::InvalidName { name, reason } => {
                format!(
                    "Invalid color name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please use a short, printable name."
                )
            }
            SchemeValidationError::InvalidColor {
                field,
                value,
                reason,
            } => {
                format!(
                    "Invalid color for {field}: '{value}'\n\n\
                    Reason: {reason}\n\n\
                    Please use a hex color such as #1e3a5f."
                )
            }
        }
    }
}

impl From<SchemeValidationError> for ColorSpaceError {
    fn from(error: SchemeValidationError) -> Self {
        ColorSpaceError::InvalidScheme(error.user_message())
    }
}

/// Validator for scheme names
pub struct SchemeNameValidator;

impl Validator<str> for SchemeNameValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Err(SchemeValidationError::InvalidName {
                name: input.to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }

        if input.chars().count() > MAX_SCHEME_NAME_LEN {
            return Err(SchemeValidationError::InvalidName {
                name: input.to_string(),
                reason: format!("Name too long (max {MAX_SCHEME_NAME_LEN} characters)"),
            });
        }

        if input.chars().any(char::is_control) {
            return Err(SchemeValidationError::InvalidName {
                name: input.to_string(),
                reason: "Name contains control characters".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for a single color value.
///
/// The lenient mode only rejects empty values, which is all the project
/// store relies on. Strict mode additionally requires `#rgb`, `#rrggbb` or
/// `#rrggbbaa` hex notation.
pub struct ColorValueValidator {
    strict_hex: bool,
}

impl ColorValueValidator {
    pub fn lenient() -> Self {
        Self { strict_hex: false }
    }

    pub fn strict() -> Self {
        Self { strict_hex: true }
    }

    fn check(&self, field: &str, value: &str) -> Result<(), SchemeValidationError> {
        let invalid = |reason: &str| SchemeValidationError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.trim().is_empty() {
            return Err(invalid("Color cannot be empty"));
        }

        if !self.strict_hex {
            return Ok(());
        }

        let Some(digits) = value.strip_prefix('#') else {
            return Err(invalid("Hex colors must start with '#'"));
        };

        if !matches!(digits.len(), 3 | 6 | 8) {
            return Err(invalid("Expected 3, 6 or 8 hex digits"));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("Contains non-hex characters"));
        }

        Ok(())
    }
}

impl Validator<str> for ColorValueValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        self.check("color", input)
    }
}

/// Validator for a complete scheme
pub struct ColorSchemeValidator {
    colors: ColorValueValidator,
}

impl ColorSchemeValidator {
    pub fn lenient() -> Self {
        Self {
            colors: ColorValueValidator::lenient(),
        }
    }

    pub fn strict() -> Self {
        Self {
            colors: ColorValueValidator::strict(),
        }
    }
}

impl Validator<ColorScheme> for ColorSchemeValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &ColorScheme) -> Result<(), Self::Error> {
        SchemeNameValidator.validate(&input.name)?;

        let mut fields = vec![
            ("activityBar.background", &input.activity_bar.background),
            ("activityBar.foreground", &input.activity_bar.foreground),
            (
                "activityBar.inactiveForeground",
                &input.activity_bar.inactive_foreground,
            ),
            ("sideBar.background", &input.side_bar.background),
            ("sideBar.foreground", &input.side_bar.foreground),
            ("sideBarTitle.foreground", &input.side_bar_title.foreground),
        ];
        if let Some(status_bar) = &input.status_bar {
            fields.push(("statusBar.background", &status_bar.background));
            fields.push(("statusBar.foreground", &status_bar.foreground));
        }

        for (field, value) in fields {
            self.colors.check(field, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FIXED_PALETTE;

    #[test]
    fn test_scheme_name_validator() {
        let validator = SchemeNameValidator;

        assert!(validator.validate("Ocean Blue").is_ok());
        assert!(validator.validate("My theme #2").is_ok());

        assert!(validator.validate("").is_err());
        assert!(validator.validate("   ").is_err());
        assert!(validator.validate("tab\there").is_err());
        assert!(validator.validate(&"a".repeat(MAX_SCHEME_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_strict_color_validator() {
        let validator = ColorValueValidator::strict();

        assert!(validator.validate("#fff").is_ok());
        assert!(validator.validate("#1e3a5f").is_ok());
        assert!(validator.validate("#1e3a5f80").is_ok());

        assert!(validator.validate("1e3a5f").is_err());
        assert!(validator.validate("#1e3a5").is_err());
        assert!(validator.validate("#zzzzzz").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_lenient_color_validator_accepts_any_non_empty_value() {
        let validator = ColorValueValidator::lenient();

        assert!(validator.validate("red").is_ok());
        assert!(validator.validate("rgb(1, 2, 3)").is_ok());
        assert!(validator.validate(" ").is_err());
    }

    #[test]
    fn test_fixed_palette_passes_strict_validation() {
        let validator = ColorSchemeValidator::strict();
        for scheme in FIXED_PALETTE.iter() {
            assert!(validator.validate(scheme).is_ok(), "{} is invalid", scheme.name);
        }
    }

    #[test]
    fn test_scheme_validator_reports_failing_field() {
        let mut scheme = ColorScheme::from_backgrounds("Broken", "#123456", "#654321");
        scheme.side_bar.foreground = "white".to_string();

        let error = ColorSchemeValidator::strict().validate(&scheme).unwrap_err();
        assert_eq!(
            error,
            SchemeValidationError::InvalidColor {
                field: "sideBar.foreground".to_string(),
                value: "white".to_string(),
                reason: "Hex colors must start with '#'".to_string(),
            }
        );
        assert!(ColorSchemeValidator::lenient().validate(&scheme).is_ok());
    }
}
