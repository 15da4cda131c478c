//! End-to-end tests for loading default application lists.
//!
//! Each test builds a throwaway apps directory and a throwaway bin directory
//! holding fake executables, so results do not depend on what the machine
//! running the tests has installed.

use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use default_apps::loader::{DocumentOutcome, LoadStats};
use default_apps::locale::LanguageNames;
use default_apps::path::SearchPath;
use default_apps::{
    Capplet, Category, GenericItem, Loader, LoaderConfig, SimpleItem, TermItem, WebItem,
};

/// Every executable mentioned by the main fixture, except `no-such-browser`.
const INSTALLED: &[&str] = &[
    "firefox",
    "links",
    "mutt",
    "mate-terminal",
    "rhythmbox",
    "totem",
    "eom",
    "pluma",
    "caja",
    "orca",
    "onboard",
];

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn bin_dir(executables: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in executables {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    dir
}

/// Apps directory holding copies of the named fixtures.
fn apps_dir(fixtures: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (fixture, target) in fixtures {
        fs::copy(fixture_path(fixture), dir.path().join(target)).unwrap();
    }
    dir
}

fn loader(apps: &Path, bin: &Path, languages: &[&str]) -> Loader {
    Loader::new(
        LoaderConfig::new(apps)
            .with_languages(LanguageNames::new(languages.iter().copied()))
            .with_search_path(SearchPath::new([bin])),
    )
}

fn load(apps: &Path, bin: &Path, languages: &[&str]) -> (Capplet, LoadStats) {
    let mut capplet = Capplet::new();
    let stats = loader(apps, bin, languages).load_list(&mut capplet);
    (capplet, stats)
}

fn executables(capplet: &Capplet, category: Category) -> Vec<String> {
    capplet
        .generics(category)
        .into_iter()
        .map(|g| g.executable.clone())
        .collect()
}

#[test]
fn test_full_fixture_populates_every_category() {
    let apps = apps_dir(&[("default-applications.xml", "default-applications.xml")]);
    let bin = bin_dir(INSTALLED);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);

    assert_eq!(executables(&capplet, Category::WebBrowsers), vec!["firefox", "links"]);
    assert_eq!(executables(&capplet, Category::MailReaders), vec!["mutt"]);
    assert_eq!(executables(&capplet, Category::Terminals), vec!["mate-terminal"]);
    assert_eq!(executables(&capplet, Category::MusicPlayers), vec!["rhythmbox"]);
    assert_eq!(executables(&capplet, Category::VideoPlayers), vec!["totem"]);
    assert_eq!(executables(&capplet, Category::ImageViewers), vec!["eom"]);
    assert_eq!(executables(&capplet, Category::TextEditors), vec!["pluma"]);
    assert_eq!(executables(&capplet, Category::FileManagers), vec!["caja"]);
    assert_eq!(executables(&capplet, Category::VisualAts), vec!["orca"]);
    assert_eq!(executables(&capplet, Category::MobilityAts), vec!["onboard"]);

    assert_eq!(
        stats,
        LoadStats {
            documents_loaded: 1,
            documents_skipped: 0,
            entries_accepted: 11,
            entries_dropped: 2,
        }
    );
}

#[test]
fn test_fields_are_copied_verbatim() {
    let apps = apps_dir(&[("default-applications.xml", "default-applications.xml")]);
    let bin = bin_dir(INSTALLED);

    let (capplet, _) = load(apps.path(), bin.path(), &["C"]);

    assert_eq!(
        capplet.web_browsers[0],
        WebItem::new(
            GenericItem::new(
                "firefox".to_string(),
                Some("Firefox".to_string()),
                Some("firefox %s".to_string()),
                Some("firefox".to_string()),
            ),
            false,
            true,
            Some("firefox -new-tab \"%s\"".to_string()),
            Some("firefox -new-window \"%s\"".to_string()),
        )
    );

    // Not a remote-capable browser: tab/win commands are not read.
    assert_eq!(
        capplet.web_browsers[1],
        WebItem::new(
            GenericItem::new(
                "links".to_string(),
                Some("Links".to_string()),
                Some("links %s".to_string()),
                None,
            ),
            true,
            false,
            None,
            None,
        )
    );

    assert_eq!(
        capplet.mail_readers[0],
        SimpleItem::new(
            GenericItem::new(
                "mutt".to_string(),
                Some("Mutt".to_string()),
                Some("mutt %s".to_string()),
                Some("mail-client".to_string()),
            ),
            true,
        )
    );

    assert_eq!(
        capplet.terminals[0],
        TermItem::new(
            GenericItem::new(
                "mate-terminal".to_string(),
                Some("MATE Terminal".to_string()),
                Some("mate-terminal".to_string()),
                Some("utilities-terminal".to_string()),
            ),
            Some("-x".to_string()),
        )
    );

    assert!(capplet.visual_ats[0].run_at_startup);
    assert!(!capplet.mobility_ats[0].run_at_startup);
    assert!(!capplet.media_players[0].run_in_terminal);
    assert_eq!(capplet.file_managers[0].generic.icon_name.as_deref(), Some("system-file-manager"));
}

#[test]
fn test_names_follow_preferred_language() {
    let apps = apps_dir(&[("default-applications.xml", "default-applications.xml")]);
    let bin = bin_dir(INSTALLED);

    let (capplet, _) = load(apps.path(), bin.path(), &["nl_NL", "nl", "C"]);
    assert_eq!(capplet.web_browsers[0].generic.name.as_deref(), Some("Vuurvos"));

    // The Dutch name after the French one is not acceptable here.
    let (capplet, _) = load(apps.path(), bin.path(), &["fr", "C"]);
    assert_eq!(capplet.web_browsers[0].generic.name.as_deref(), Some("Renard"));

    let (capplet, _) = load(apps.path(), bin.path(), &["de", "C"]);
    assert_eq!(capplet.web_browsers[0].generic.name.as_deref(), Some("Firefox"));
}

#[test]
fn test_uninstalled_executables_are_dropped() {
    let apps = apps_dir(&[("default-applications.xml", "default-applications.xml")]);
    let bin = bin_dir(&["mutt", "caja"]);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);

    assert_eq!(capplet.len(), 2);
    assert_eq!(executables(&capplet, Category::MailReaders), vec!["mutt"]);
    assert_eq!(executables(&capplet, Category::FileManagers), vec!["caja"]);
    assert_eq!(stats.entries_accepted, 2);
    assert_eq!(stats.entries_dropped, 11);
}

#[test]
fn test_empty_directory_yields_empty_collections() {
    let apps = TempDir::new().unwrap();
    fs::write(apps.path().join("README"), "not a list").unwrap();
    let bin = bin_dir(INSTALLED);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);

    assert_eq!(capplet, Capplet::new());
    assert_eq!(stats, LoadStats::default());
}

#[test]
fn test_only_lowercase_xml_suffix_is_loaded() {
    let apps = apps_dir(&[
        ("default-applications.xml", "upper.XML"),
        ("default-applications.xml", "backup.xml~"),
    ]);
    let bin = bin_dir(INSTALLED);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);

    assert!(capplet.is_empty());
    assert_eq!(stats, LoadStats::default());
}

#[test]
fn test_same_entry_in_two_files_is_not_deduplicated() {
    let apps = apps_dir(&[
        ("default-applications.xml", "a.xml"),
        ("default-applications.xml", "b.xml"),
    ]);
    let bin = bin_dir(INSTALLED);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);

    assert_eq!(stats.documents_loaded, 2);
    assert_eq!(
        executables(&capplet, Category::WebBrowsers),
        vec!["firefox", "links", "firefox", "links"]
    );
    assert_eq!(capplet.web_browsers[0], capplet.web_browsers[2]);
}

#[test]
fn test_malformed_document_does_not_block_siblings() {
    let apps = apps_dir(&[
        ("malformed.xml", "broken.xml"),
        ("default-applications.xml", "good.xml"),
    ]);
    let bin = bin_dir(INSTALLED);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);

    assert_eq!(stats.documents_loaded, 1);
    assert_eq!(stats.documents_skipped, 1);
    assert_eq!(executables(&capplet, Category::MailReaders), vec!["mutt"]);
    assert_eq!(capplet.len(), 11);
}

#[test]
fn test_load_document_directly() {
    let bin = bin_dir(INSTALLED);
    let loader = loader(Path::new("/nonexistent"), bin.path(), &["C"]);
    let mut capplet = Capplet::new();

    let outcome = loader.load_document(&mut capplet, &fixture_path("malformed.xml"));
    assert_eq!(outcome, DocumentOutcome::Skipped);
    assert!(capplet.is_empty());

    let outcome = loader.load_document(&mut capplet, &fixture_path("missing.xml"));
    assert_eq!(outcome, DocumentOutcome::Skipped);

    let outcome = loader.load_document(&mut capplet, &fixture_path("default-applications.xml"));
    assert_eq!(outcome, DocumentOutcome::Loaded { accepted: 11, dropped: 2 });
}

#[test]
fn test_latin1_document_is_decoded() {
    let apps = apps_dir(&[("latin1.xml", "latin1.xml")]);
    let bin = bin_dir(&["mutt"]);

    let (capplet, stats) = load(apps.path(), bin.path(), &["fr", "C"]);

    assert_eq!(stats.documents_loaded, 1);
    assert_eq!(stats.documents_skipped, 0);
    assert_eq!(
        capplet.mail_readers[0].generic.name.as_deref(),
        Some("Lecteur de courrier \u{e9}lectronique")
    );
    assert!(capplet.mail_readers[0].run_in_terminal);
}

#[test]
fn test_unreadable_directory_is_silent_noop() {
    let bin = bin_dir(INSTALLED);
    let missing = TempDir::new().unwrap().path().join("gone");

    let (capplet, stats) = load(&missing, bin.path(), &["C"]);

    assert!(capplet.is_empty());
    assert_eq!(stats, LoadStats::default());
}

#[test]
fn test_teardown_releases_every_record() {
    let apps = apps_dir(&[
        ("default-applications.xml", "a.xml"),
        ("default-applications.xml", "b.xml"),
    ]);
    let bin = bin_dir(INSTALLED);

    let (capplet, stats) = load(apps.path(), bin.path(), &["C"]);
    let loaded = capplet.len();

    assert_eq!(loaded, stats.entries_accepted);
    assert_eq!(capplet.teardown(), loaded);
}

#[test]
fn test_clear_then_reload() {
    let apps = apps_dir(&[("default-applications.xml", "apps.xml")]);
    let bin = bin_dir(INSTALLED);
    let loader = loader(apps.path(), bin.path(), &["C"]);

    let mut capplet = Capplet::new();
    loader.load_list(&mut capplet);
    assert_eq!(capplet.clear(), 11);

    loader.load_list(&mut capplet);
    assert_eq!(capplet.len(), 11);
}
