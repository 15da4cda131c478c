//! XML utility functions for navigating the default applications tree.

use roxmltree::Node;

use crate::config::XML_NAMESPACE;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use default_apps::xml::get_tag_name;
///
/// let xml = r#"<default-apps><terminals/></default-apps>"#;
/// let doc = Document::parse(xml).unwrap();
/// let section = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(section), "terminals");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check whether `tag` matches `name`.
///
/// Matching is by prefix: only the first `name.len()` bytes of `tag` are
/// compared against `name`. A tag that extends `name` matches (the tag
/// `web-browsers` matches the name `web-browser`), a tag shorter than `name`
/// never does.
///
/// # Examples
/// ```
/// use default_apps::xml::tag_matches;
///
/// assert!(tag_matches("web-browser", "web-browser"));
/// assert!(tag_matches("web-browsers", "web-browser"));
/// assert!(!tag_matches("web", "web-browser"));
/// ```
pub fn tag_matches(tag: &str, name: &str) -> bool {
    tag.as_bytes().starts_with(name.as_bytes())
}

/// Check if a node is an element whose tag matches `name` by prefix.
pub fn has_tag_prefix(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && tag_matches(get_tag_name(node), name)
}

/// Get all element children of a node.
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Find all element children whose tag matches `name` by prefix, in
/// document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use default_apps::xml::matching_children;
///
/// let xml = r#"<terminal><name>Tilix</name><name-extra/><icon-name/></terminal>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let names: Vec<_> = matching_children(doc.root_element(), "name").collect();
/// assert_eq!(names.len(), 2);
/// ```
pub fn matching_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| has_tag_prefix(*child, name))
}

/// Get the full text content of a node.
///
/// Concatenates every descendant text node in document order, without
/// trimming, so `<name>Mozilla <b>Firefox</b></name>` yields
/// `"Mozilla Firefox"`.
pub fn node_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Get the language of a node.
///
/// `xml:lang` is inherited, so the nearest ancestor (or the node itself)
/// carrying the attribute decides.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use default_apps::xml::node_lang;
///
/// let xml = r#"<entry xml:lang="de"><name>Dateien</name><name xml:lang="fr">Fichiers</name></entry>"#;
/// let doc = Document::parse(xml).unwrap();
/// let mut names = doc.root_element().children();
///
/// assert_eq!(node_lang(names.next().unwrap()), Some("de"));
/// assert_eq!(node_lang(names.next().unwrap()), Some("fr"));
/// ```
pub fn node_lang<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.ancestors()
        .filter(|n| n.is_element())
        .find_map(|n| n.attribute((XML_NAMESPACE, "lang")))
}
