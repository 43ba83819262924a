use std::collections::HashMap;

use leon::Template;

use crate::error::Result;

/// Placeholder replaced with the rejected input in prompt error messages.
pub const VALUE_KEY: &str = "value";

/// Renders a message template, filling `{value}` with the given input.
///
/// Templates without placeholders are returned as-is.
///
/// # Errors
///
/// Returns an error if the template is malformed or uses an unknown key.
///
/// # Examples
///
/// ```
/// use catalog_core::interpolation::render_message;
///
/// let message = render_message("ID {value} inválido!", "abc")?;
/// assert_eq!(message, "ID abc inválido!");
/// # Ok::<(), catalog_core::error::Error>(())
/// ```
pub fn render_message(template: &str, value: &str) -> Result<String> {
    let template = Template::parse(template)?;

    let mut context: HashMap<String, String> = HashMap::new();
    context.insert(VALUE_KEY.to_string(), value.to_string());

    Ok(template.render(&context)?)
}
