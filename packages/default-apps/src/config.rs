//! Configuration constants and loader settings.

use std::path::{Path, PathBuf};

use crate::locale::LanguageNames;
use crate::path::SearchPath;

/// Directory the desktop ships its default application lists in.
pub const DEFAULT_APPS_DIR: &str = "/usr/share/mate-control-center/default-apps";

/// Only directory entries ending in this suffix are loaded (case-sensitive).
pub const XML_SUFFIX: &str = ".xml";

/// Namespace bound to the reserved `xml:` prefix, which carries `xml:lang`.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Settings for a [`Loader`](crate::loader::Loader).
///
/// Holds the three collaborators the loader consults: where the XML lists
/// live, which languages the user accepts, and where executables are
/// looked up.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub apps_dir: PathBuf,
    pub languages: LanguageNames,
    pub search_path: SearchPath,
}

impl LoaderConfig {
    /// Configuration for the running process: the system apps directory,
    /// the locale environment and `PATH`.
    pub fn from_env() -> Self {
        Self {
            apps_dir: PathBuf::from(DEFAULT_APPS_DIR),
            languages: LanguageNames::from_env(),
            search_path: SearchPath::from_env(),
        }
    }

    /// Configuration reading `apps_dir`, with the process locale and `PATH`.
    pub fn new(apps_dir: impl Into<PathBuf>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
            ..Self::from_env()
        }
    }

    pub fn with_apps_dir(mut self, apps_dir: impl Into<PathBuf>) -> Self {
        self.apps_dir = apps_dir.into();
        self
    }

    pub fn with_languages(mut self, languages: LanguageNames) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Check whether a directory entry name should be loaded as a document.
///
/// # Examples
/// ```
/// use std::ffi::OsStr;
/// use default_apps::config::has_xml_suffix;
///
/// assert!(has_xml_suffix(OsStr::new("mate-default-applications.xml")));
/// assert!(!has_xml_suffix(OsStr::new("README.XML")));
/// ```
pub fn has_xml_suffix(file_name: &std::ffi::OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(XML_SUFFIX.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_has_xml_suffix() {
        assert!(has_xml_suffix(OsStr::new("a.xml")));
        assert!(has_xml_suffix(OsStr::new(".xml")));
        assert!(!has_xml_suffix(OsStr::new("a.XML")));
        assert!(!has_xml_suffix(OsStr::new("a.xml.bak")));
        assert!(!has_xml_suffix(OsStr::new("xml")));
    }

    #[test]
    fn test_builder_methods() {
        let config = LoaderConfig::new("/tmp/apps")
            .with_languages(LanguageNames::new(["nl", "C"]))
            .with_search_path(SearchPath::new(["/opt/bin"]));

        assert_eq!(config.apps_dir(), Path::new("/tmp/apps"));
        assert_eq!(config.languages.as_slice(), ["nl", "C"]);
        assert_eq!(config.search_path.dirs(), [PathBuf::from("/opt/bin")]);

        let config = config.with_apps_dir("/srv/apps");
        assert_eq!(config.apps_dir(), Path::new("/srv/apps"));
    }

    #[test]
    fn test_from_env_uses_system_dir() {
        let config = LoaderConfig::from_env();
        assert_eq!(config.apps_dir(), Path::new(DEFAULT_APPS_DIR));
        assert_eq!(config.languages.as_slice().last().map(String::as_str), Some("C"));
    }
}
