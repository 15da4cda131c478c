//! Default application records.
//!
//! Every record embeds a [`GenericItem`] with the fields all applications
//! share, plus the fields specific to its kind. [`Item`] is the sum of all
//! kinds, used where records of different kinds travel together.

use serde::Serialize;
use std::fmt;

/// Fields shared by every default application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericItem {
    /// Display name, resolved for the user's language.
    pub name: Option<String>,

    /// Program looked up on the search path (always resolvable at load time).
    pub executable: String,

    /// Full command line, may contain placeholders such as `%s`.
    pub command: Option<String>,

    /// Icon theme name.
    pub icon_name: Option<String>,
}

impl GenericItem {
    pub fn new(
        executable: String,
        name: Option<String>,
        command: Option<String>,
        icon_name: Option<String>,
    ) -> Self {
        Self {
            name,
            executable,
            command,
            icon_name,
        }
    }
}

/// Mail readers, music players and video players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleItem {
    pub generic: GenericItem,
    pub run_in_terminal: bool,
}

impl SimpleItem {
    pub fn new(generic: GenericItem, run_in_terminal: bool) -> Self {
        Self {
            generic,
            run_in_terminal,
        }
    }
}

/// Web browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebItem {
    pub generic: GenericItem,
    pub run_in_terminal: bool,

    /// Whether the browser accepts Netscape-style remote commands.
    pub netscape_remote: bool,

    /// Command opening a URL in a new tab (only read for remote-capable browsers).
    pub tab_command: Option<String>,

    /// Command opening a URL in a new window (only read for remote-capable browsers).
    pub win_command: Option<String>,
}

impl WebItem {
    pub fn new(
        generic: GenericItem,
        run_in_terminal: bool,
        netscape_remote: bool,
        tab_command: Option<String>,
        win_command: Option<String>,
    ) -> Self {
        Self {
            generic,
            run_in_terminal,
            netscape_remote,
            tab_command,
            win_command,
        }
    }
}

/// Terminal emulators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermItem {
    pub generic: GenericItem,

    /// Flag that makes the terminal run the rest of its arguments, e.g. `-x`.
    pub exec_flag: Option<String>,
}

impl TermItem {
    pub fn new(generic: GenericItem, exec_flag: Option<String>) -> Self {
        Self { generic, exec_flag }
    }
}

/// Visual accessibility tools (screen readers, magnifiers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualItem {
    pub generic: GenericItem,
    pub run_at_startup: bool,
}

impl VisualItem {
    pub fn new(generic: GenericItem, run_at_startup: bool) -> Self {
        Self {
            generic,
            run_at_startup,
        }
    }
}

/// Mobility accessibility tools (on-screen keyboards, dwell clicking).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobilityItem {
    pub generic: GenericItem,
    pub run_at_startup: bool,
}

impl MobilityItem {
    pub fn new(generic: GenericItem, run_at_startup: bool) -> Self {
        Self {
            generic,
            run_at_startup,
        }
    }
}

/// Image viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageItem {
    pub generic: GenericItem,
    pub run_in_terminal: bool,
}

impl ImageItem {
    pub fn new(generic: GenericItem, run_in_terminal: bool) -> Self {
        Self {
            generic,
            run_in_terminal,
        }
    }
}

/// Text editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextItem {
    pub generic: GenericItem,
    pub run_in_terminal: bool,
}

impl TextItem {
    pub fn new(generic: GenericItem, run_in_terminal: bool) -> Self {
        Self {
            generic,
            run_in_terminal,
        }
    }
}

/// File managers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileItem {
    pub generic: GenericItem,
    pub run_in_terminal: bool,
}

impl FileItem {
    pub fn new(generic: GenericItem, run_in_terminal: bool) -> Self {
        Self {
            generic,
            run_in_terminal,
        }
    }
}

/// Record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Simple,
    Web,
    Terminal,
    Visual,
    Mobility,
    Image,
    Text,
    File,
}

impl ItemKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Web => "web",
            Self::Terminal => "terminal",
            Self::Visual => "visual",
            Self::Mobility => "mobility",
            Self::Image => "image",
            Self::Text => "text",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Simple(SimpleItem),
    Web(WebItem),
    Terminal(TermItem),
    Visual(VisualItem),
    Mobility(MobilityItem),
    Image(ImageItem),
    Text(TextItem),
    File(FileItem),
}

impl Item {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Simple(_) => ItemKind::Simple,
            Self::Web(_) => ItemKind::Web,
            Self::Terminal(_) => ItemKind::Terminal,
            Self::Visual(_) => ItemKind::Visual,
            Self::Mobility(_) => ItemKind::Mobility,
            Self::Image(_) => ItemKind::Image,
            Self::Text(_) => ItemKind::Text,
            Self::File(_) => ItemKind::File,
        }
    }

    /// The fields shared by every kind.
    #[must_use]
    pub fn generic(&self) -> &GenericItem {
        match self {
            Self::Simple(item) => &item.generic,
            Self::Web(item) => &item.generic,
            Self::Terminal(item) => &item.generic,
            Self::Visual(item) => &item.generic,
            Self::Mobility(item) => &item.generic,
            Self::Image(item) => &item.generic,
            Self::Text(item) => &item.generic,
            Self::File(item) => &item.generic,
        }
    }
}
