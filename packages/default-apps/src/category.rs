//! Application categories and the XML tags that describe them.

use serde::Serialize;
use std::fmt;

use crate::items::ItemKind;
use crate::xml::tag_matches;

/// One group of interchangeable applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WebBrowsers,
    MailReaders,
    Terminals,
    MusicPlayers,
    VideoPlayers,
    ImageViewers,
    TextEditors,
    FileManagers,
    VisualAts,
    MobilityAts,
}

impl Category {
    /// All categories, in the order sections are matched against.
    pub const ALL: [Category; 10] = [
        Self::WebBrowsers,
        Self::MailReaders,
        Self::Terminals,
        Self::MusicPlayers,
        Self::VideoPlayers,
        Self::ImageViewers,
        Self::TextEditors,
        Self::FileManagers,
        Self::VisualAts,
        Self::MobilityAts,
    ];

    /// Tag of the section element grouping this category's entries.
    #[must_use]
    pub fn section_tag(&self) -> &'static str {
        match self {
            Self::WebBrowsers => "web-browsers",
            Self::MailReaders => "mail-readers",
            Self::Terminals => "terminals",
            Self::MusicPlayers => "music-players",
            Self::VideoPlayers => "video-players",
            Self::ImageViewers => "image-viewers",
            Self::TextEditors => "text-editors",
            Self::FileManagers => "file-managers",
            Self::VisualAts => "a11y-visual",
            Self::MobilityAts => "a11y-mobility",
        }
    }

    /// Tag of one entry element inside the section.
    #[must_use]
    pub fn entry_tag(&self) -> &'static str {
        match self {
            Self::WebBrowsers => "web-browser",
            Self::MailReaders => "mail-reader",
            Self::Terminals => "terminal",
            Self::MusicPlayers => "music-player",
            Self::VideoPlayers => "video-player",
            Self::ImageViewers => "image-viewer",
            Self::TextEditors => "text-editor",
            Self::FileManagers => "file-manager",
            Self::VisualAts => "visual",
            Self::MobilityAts => "mobility",
        }
    }

    /// Kind of record built for entries of this category.
    #[must_use]
    pub fn item_kind(&self) -> ItemKind {
        match self {
            Self::WebBrowsers => ItemKind::Web,
            Self::MailReaders | Self::MusicPlayers | Self::VideoPlayers => ItemKind::Simple,
            Self::Terminals => ItemKind::Terminal,
            Self::ImageViewers => ItemKind::Image,
            Self::TextEditors => ItemKind::Text,
            Self::FileManagers => ItemKind::File,
            Self::VisualAts => ItemKind::Visual,
            Self::MobilityAts => ItemKind::Mobility,
        }
    }

    /// Find the category a section element belongs to.
    ///
    /// Section tags are matched by prefix in [`Category::ALL`] order; the
    /// first hit wins.
    ///
    /// # Examples
    /// ```
    /// use default_apps::category::Category;
    ///
    /// assert_eq!(Category::from_section_tag("terminals"), Some(Category::Terminals));
    /// assert_eq!(Category::from_section_tag("a11y-visual"), Some(Category::VisualAts));
    /// assert_eq!(Category::from_section_tag("calendars"), None);
    /// ```
    pub fn from_section_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| tag_matches(tag, category.section_tag()))
    }

    /// Check whether an element inside this category's section is an entry.
    pub fn is_entry_tag(&self, tag: &str) -> bool {
        tag_matches(tag, self.entry_tag())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_tag())
    }
}
