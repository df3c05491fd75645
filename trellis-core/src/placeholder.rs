/// Placeholder replaced with the project name in every template body.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Replace every occurrence of [`NAME_PLACEHOLDER`] with `name`.
///
/// The replacement is literal: the name is not escaped and the result is not
/// scanned again, so a name containing the placeholder is inserted verbatim.
pub fn substitute_name(content: &str, name: &str) -> String {
    content.replace(NAME_PLACEHOLDER, name)
}
