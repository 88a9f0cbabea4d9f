/// Core validation trait shared by every validator in the engine.
///
/// Validators are small stateless types; they can be composed by calling
/// one from another, as [`ColorSchemeValidator`] does with the name and
/// color value validators.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use engine::validation::Validator;
///
/// struct NotBlank;
/// impl Validator<str> for NotBlank {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.trim().is_empty() {
///             Err("Input cannot be blank".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
///
/// [`ColorSchemeValidator`]: crate::model::validation::ColorSchemeValidator
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
