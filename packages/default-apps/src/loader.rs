//! Loading default application lists from XML.
//!
//! A list directory holds any number of `*.xml` documents shaped like
//!
//! ```xml
//! <default-apps>
//!   <terminals>
//!     <terminal>
//!       <name>MATE Terminal</name>
//!       <executable>mate-terminal</executable>
//!       <command>mate-terminal</command>
//!       <icon-name>utilities-terminal</icon-name>
//!       <exec-flag>-x</exec-flag>
//!     </terminal>
//!   </terminals>
//! </default-apps>
//! ```
//!
//! Loading never fails as a whole. Unreadable directories, malformed
//! documents, unknown sections and entries whose executable is not
//! installed are skipped, and whatever remains is appended to the
//! [`Capplet`].

use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;

use crate::capplet::Capplet;
use crate::category::Category;
use crate::config::{has_xml_suffix, LoaderConfig};
use crate::error::Result;
use crate::items::{
    FileItem, GenericItem, ImageItem, Item, ItemKind, MobilityItem, SimpleItem, TermItem,
    TextItem, VisualItem, WebItem,
};
use crate::xml::{decode_document, element_children, get_bool, get_string, get_tag_name};

/// What happened to one entry node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The executable resolved and a record was built.
    Accepted(Item),
    /// The entry was dropped.
    Skipped(SkipReason),
}

/// Why an entry node was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry has no `executable` field.
    MissingExecutable,
    /// The executable is not installed on the search path.
    UnresolvableExecutable(String),
}

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The document was parsed and walked.
    Loaded { accepted: usize, dropped: usize },
    /// The document could not be read or parsed; nothing was appended.
    Skipped,
}

/// Counters collected while loading a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub documents_loaded: usize,
    pub documents_skipped: usize,
    pub entries_accepted: usize,
    pub entries_dropped: usize,
}

impl LoadStats {
    fn record(&mut self, outcome: DocumentOutcome) {
        match outcome {
            DocumentOutcome::Loaded { accepted, dropped } => {
                self.documents_loaded += 1;
                self.entries_accepted += accepted;
                self.entries_dropped += dropped;
            }
            DocumentOutcome::Skipped => self.documents_skipped += 1,
        }
    }
}

/// Reads default application lists into a [`Capplet`].
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load every list in the configured apps directory.
    pub fn load_list(&self, capplet: &mut Capplet) -> LoadStats {
        self.load_dir(capplet, &self.config.apps_dir)
    }

    /// Load every `*.xml` document in `dir`, in directory listing order.
    ///
    /// An unreadable directory loads nothing.
    pub fn load_dir(&self, capplet: &mut Capplet, dir: &Path) -> LoadStats {
        let mut stats = LoadStats::default();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot open list directory {}: {e}", dir.display());
                return stats;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Cannot read entry of {}: {e}", dir.display());
                    continue;
                }
            };

            if !has_xml_suffix(&entry.file_name()) {
                continue;
            }

            stats.record(self.load_document(capplet, &entry.path()));
        }

        tracing::info!(
            documents = stats.documents_loaded,
            skipped = stats.documents_skipped,
            accepted = stats.entries_accepted,
            dropped = stats.entries_dropped,
            "Loaded default application lists from {}",
            dir.display()
        );

        stats
    }

    /// Load one document, appending its installed entries to `capplet`.
    ///
    /// A document that cannot be read, decoded or parsed is skipped as a whole.
    pub fn load_document(&self, capplet: &mut Capplet, path: &Path) -> DocumentOutcome {
        let text = match read_document(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", path.display());
                return DocumentOutcome::Skipped;
            }
        };

        match self.load_str(capplet, &text) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", path.display());
                DocumentOutcome::Skipped
            }
        }
    }

    /// Parse `xml` and append its installed entries to `capplet`.
    ///
    /// # Errors
    /// `DefaultAppsError::XmlParse` if `xml` is not well-formed. Nothing is
    /// appended in that case.
    pub fn load_str(&self, capplet: &mut Capplet, xml: &str) -> Result<DocumentOutcome> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let doc = Document::parse_with_options(xml, options)?;

        let mut accepted = 0;
        let mut dropped = 0;

        for section in element_children(doc.root_element()) {
            let tag = get_tag_name(section);
            let Some(category) = Category::from_section_tag(tag) else {
                tracing::debug!("Ignoring unknown section <{tag}>");
                continue;
            };

            for entry in element_children(section) {
                if !category.is_entry_tag(get_tag_name(entry)) {
                    continue;
                }

                match self.load_entry(category, entry) {
                    EntryOutcome::Accepted(item) => {
                        tracing::trace!(
                            "Accepted {} in {category}",
                            item.generic().executable
                        );
                        match capplet.append(category, item) {
                            Ok(()) => accepted += 1,
                            Err(e) => {
                                tracing::warn!("Dropping entry: {e}");
                                dropped += 1;
                            }
                        }
                    }
                    EntryOutcome::Skipped(reason) => {
                        tracing::debug!("Dropping {category} entry: {reason:?}");
                        dropped += 1;
                    }
                }
            }
        }

        Ok(DocumentOutcome::Loaded { accepted, dropped })
    }

    /// Validate one entry node and build its record.
    ///
    /// Only the executable is read before validation; the remaining fields
    /// are extracted once the entry is known to be installed.
    pub fn load_entry(&self, category: Category, entry: Node<'_, '_>) -> EntryOutcome {
        let languages = &self.config.languages;

        let Some(executable) = get_string(entry, "executable", languages) else {
            return EntryOutcome::Skipped(SkipReason::MissingExecutable);
        };

        if !self.config.search_path.is_valid(Some(&executable)) {
            return EntryOutcome::Skipped(SkipReason::UnresolvableExecutable(executable));
        }

        let generic = GenericItem::new(
            executable,
            get_string(entry, "name", languages),
            get_string(entry, "command", languages),
            get_string(entry, "icon-name", languages),
        );

        EntryOutcome::Accepted(self.build_item(category.item_kind(), generic, entry))
    }

    /// Read the kind-specific fields and build the record.
    fn build_item(&self, kind: ItemKind, generic: GenericItem, entry: Node<'_, '_>) -> Item {
        let languages = &self.config.languages;
        let run_in_terminal = || get_bool(entry, "run-in-terminal");
        let run_at_startup = || get_bool(entry, "run-at-startup");

        match kind {
            ItemKind::Simple => Item::Simple(SimpleItem::new(generic, run_in_terminal())),
            ItemKind::Web => {
                let netscape_remote = get_bool(entry, "netscape-remote");
                let (tab_command, win_command) = if netscape_remote {
                    (
                        get_string(entry, "tab-command", languages),
                        get_string(entry, "win-command", languages),
                    )
                } else {
                    (None, None)
                };
                Item::Web(WebItem::new(
                    generic,
                    run_in_terminal(),
                    netscape_remote,
                    tab_command,
                    win_command,
                ))
            }
            ItemKind::Terminal => Item::Terminal(TermItem::new(
                generic,
                get_string(entry, "exec-flag", languages),
            )),
            ItemKind::Visual => Item::Visual(VisualItem::new(generic, run_at_startup())),
            ItemKind::Mobility => Item::Mobility(MobilityItem::new(generic, run_at_startup())),
            ItemKind::Image => Item::Image(ImageItem::new(generic, run_in_terminal())),
            ItemKind::Text => Item::Text(TextItem::new(generic, run_in_terminal())),
            ItemKind::File => Item::File(FileItem::new(generic, run_in_terminal())),
        }
    }
}

/// Read a document into memory as UTF-8 text, honouring its declared
/// encoding.
fn read_document(path: &Path) -> Result<String> {
    decode_document(&fs::read(path)?)
}

/// Load the configured apps directory into a fresh [`Capplet`].
///
/// # Example
///
/// ```no_run
/// use default_apps::{load_capplet, LoaderConfig};
///
/// let capplet = load_capplet(LoaderConfig::from_env());
/// for browser in &capplet.web_browsers {
///     println!("{}", browser.generic.executable);
/// }
/// ```
pub fn load_capplet(config: LoaderConfig) -> Capplet {
    let mut capplet = Capplet::new();
    Loader::new(config).load_list(&mut capplet);
    capplet
}
