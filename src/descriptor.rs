//! Build-descriptor handling: locating the version declaration in the XML
//! text and substituting a new one.

use crate::error::{BumpError, Result};

/// Tag name suffix that marks the version declaration in a `pom.xml`.
pub const DEFAULT_ELEMENT_SUFFIX: &str = "version";

/// Extracts the declared version from a descriptor document.
///
/// Only the direct children of the root element are considered, so nested
/// declarations such as `<parent><version>` or dependency versions are
/// ignored. Matching uses the local tag name, which makes namespaced
/// documents (`xmlns="http://maven.apache.org/POM/4.0.0"`) work unchanged.
///
/// Surrounding whitespace is trimmed from the returned text, so both the
/// comparison and the `<version>` substitution use the trimmed form.
///
/// # Arguments
/// * `xml_text` - Raw descriptor contents
/// * `suffix` - Tag name suffix identifying the declaration (usually "version")
///
/// # Returns
/// * `Ok(String)` - Text content of the single matching element
/// * `Err` - If the text is not well-formed XML, or zero or several elements match
pub fn extract_version(xml_text: &str, suffix: &str) -> Result<String> {
    let document = roxmltree::Document::parse(xml_text)?;

    let matches: Vec<roxmltree::Node<'_, '_>> = document
        .root_element()
        .children()
        .filter(|node| node.is_element() && node.tag_name().name().ends_with(suffix))
        .collect();

    match matches.as_slice() {
        [element] => element
            .text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| {
                BumpError::descriptor(format!(
                    "Element <{}> has no text content",
                    element.tag_name().name()
                ))
            }),
        _ => Err(BumpError::descriptor(format!(
            "Expected exactly one element ending in '{}' under <{}>, found {}",
            suffix,
            document.root_element().tag_name().name(),
            matches.len()
        ))),
    }
}

/// Renders the literal declaration searched for during substitution.
pub fn version_tag(version: &str) -> String {
    format!("<version>{}</version>", version)
}

/// Replaces the first `<version>{old}</version>` in `text` with `<version>{new}</version>`.
///
/// Returns the resulting text and whether a replacement happened. When the
/// literal tag does not occur the text comes back unchanged.
pub fn replace_version(text: &str, old: &str, new: &str) -> (String, bool) {
    let needle = version_tag(old);
    if text.contains(&needle) {
        (text.replacen(&needle, &version_tag(new), 1), true)
    } else {
        (text.to_string(), false)
    }
}
