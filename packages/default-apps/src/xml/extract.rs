//! Field extraction from entry nodes.
//!
//! Every field of an entry is a child element whose text is the value. A
//! field may appear several times (once per language, for instance); the
//! last acceptable occurrence wins.

use roxmltree::Node;

use super::utils::{matching_children, node_content, node_lang};
use crate::locale::LanguageNames;

/// Extract a locale-resolved string field.
///
/// Every child matching `field` is visited in document order:
/// - without a language, its content becomes the value;
/// - with a language the user accepts, its content becomes the value;
/// - with any other language, it is ignored.
///
/// The scan does not stop early, so an untagged child after an accepted
/// localized one overrides it again.
///
/// # Returns
/// `None` if no matching child was acceptable.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use default_apps::locale::LanguageNames;
/// use default_apps::xml::get_string;
///
/// let xml = r#"<web-browser><name xml:lang="fr">Renard</name><name>Firefox</name></web-browser>"#;
/// let doc = Document::parse(xml).unwrap();
/// let languages = LanguageNames::new(["de", "C"]);
///
/// assert_eq!(get_string(doc.root_element(), "name", &languages), Some("Firefox".to_string()));
/// assert_eq!(get_string(doc.root_element(), "command", &languages), None);
/// ```
pub fn get_string(parent: Node<'_, '_>, field: &str, languages: &LanguageNames) -> Option<String> {
    let mut value = None;

    for child in matching_children(parent, field) {
        let accepted = match node_lang(child) {
            None => true,
            Some(lang) => languages.accepts(lang),
        };

        if accepted {
            value = Some(node_content(child));
        }
    }

    value
}

/// Extract a boolean field.
///
/// Content equal to `true` or `1` (ASCII case-insensitive) is true,
/// anything else is false. The last matching child decides; no match is
/// false.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use default_apps::xml::get_bool;
///
/// let xml = r#"<mail-reader><run-in-terminal>TRUE</run-in-terminal></mail-reader>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(get_bool(doc.root_element(), "run-in-terminal"));
/// assert!(!get_bool(doc.root_element(), "netscape-remote"));
/// ```
pub fn get_bool(parent: Node<'_, '_>, field: &str) -> bool {
    matching_children(parent, field)
        .last()
        .is_some_and(|child| is_true(&node_content(child)))
}

/// Boolean coercion used for every flag field.
fn is_true(content: &str) -> bool {
    content.eq_ignore_ascii_case("true") || content == "1"
}
