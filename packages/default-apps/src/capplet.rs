//! The aggregate of all loaded default application lists.

use serde::Serialize;

use crate::category::Category;
use crate::error::{DefaultAppsError, Result};
use crate::items::{
    FileItem, GenericItem, ImageItem, Item, MobilityItem, SimpleItem, TermItem, TextItem,
    VisualItem, WebItem,
};

/// Per-category lists of installed default application candidates.
///
/// Lists keep insertion order: file enumeration order first, then document
/// order. Nothing is de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capplet {
    pub web_browsers: Vec<WebItem>,
    pub mail_readers: Vec<SimpleItem>,
    pub terminals: Vec<TermItem>,
    /// Music players.
    pub media_players: Vec<SimpleItem>,
    pub video_players: Vec<SimpleItem>,
    pub image_viewers: Vec<ImageItem>,
    pub text_editors: Vec<TextItem>,
    pub file_managers: Vec<FileItem>,
    pub visual_ats: Vec<VisualItem>,
    pub mobility_ats: Vec<MobilityItem>,
}

impl Capplet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the list of `category`.
    ///
    /// # Errors
    /// `DefaultAppsError::KindMismatch` if `item` is not the kind that
    /// category holds. The record is dropped in that case.
    pub fn append(&mut self, category: Category, item: Item) -> Result<()> {
        match (category, item) {
            (Category::WebBrowsers, Item::Web(item)) => self.web_browsers.push(item),
            (Category::MailReaders, Item::Simple(item)) => self.mail_readers.push(item),
            (Category::Terminals, Item::Terminal(item)) => self.terminals.push(item),
            (Category::MusicPlayers, Item::Simple(item)) => self.media_players.push(item),
            (Category::VideoPlayers, Item::Simple(item)) => self.video_players.push(item),
            (Category::ImageViewers, Item::Image(item)) => self.image_viewers.push(item),
            (Category::TextEditors, Item::Text(item)) => self.text_editors.push(item),
            (Category::FileManagers, Item::File(item)) => self.file_managers.push(item),
            (Category::VisualAts, Item::Visual(item)) => self.visual_ats.push(item),
            (Category::MobilityAts, Item::Mobility(item)) => self.mobility_ats.push(item),
            (category, item) => {
                return Err(DefaultAppsError::KindMismatch {
                    category,
                    kind: item.kind(),
                })
            }
        }
        Ok(())
    }

    /// Number of records held for `category`.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::WebBrowsers => self.web_browsers.len(),
            Category::MailReaders => self.mail_readers.len(),
            Category::Terminals => self.terminals.len(),
            Category::MusicPlayers => self.media_players.len(),
            Category::VideoPlayers => self.video_players.len(),
            Category::ImageViewers => self.image_viewers.len(),
            Category::TextEditors => self.text_editors.len(),
            Category::FileManagers => self.file_managers.len(),
            Category::VisualAts => self.visual_ats.len(),
            Category::MobilityAts => self.mobility_ats.len(),
        }
    }

    /// Total number of records across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The shared fields of every record in `category`, in list order.
    pub fn generics(&self, category: Category) -> Vec<&GenericItem> {
        match category {
            Category::WebBrowsers => self.web_browsers.iter().map(|i| &i.generic).collect(),
            Category::MailReaders => self.mail_readers.iter().map(|i| &i.generic).collect(),
            Category::Terminals => self.terminals.iter().map(|i| &i.generic).collect(),
            Category::MusicPlayers => self.media_players.iter().map(|i| &i.generic).collect(),
            Category::VideoPlayers => self.video_players.iter().map(|i| &i.generic).collect(),
            Category::ImageViewers => self.image_viewers.iter().map(|i| &i.generic).collect(),
            Category::TextEditors => self.text_editors.iter().map(|i| &i.generic).collect(),
            Category::FileManagers => self.file_managers.iter().map(|i| &i.generic).collect(),
            Category::VisualAts => self.visual_ats.iter().map(|i| &i.generic).collect(),
            Category::MobilityAts => self.mobility_ats.iter().map(|i| &i.generic).collect(),
        }
    }

    /// Release every record in every list.
    ///
    /// Safe on empty or partially filled aggregates.
    ///
    /// # Returns
    /// The number of records released.
    pub fn clear(&mut self) -> usize {
        let released = self.len();

        self.web_browsers.clear();
        self.mail_readers.clear();
        self.terminals.clear();
        self.media_players.clear();
        self.video_players.clear();
        self.image_viewers.clear();
        self.text_editors.clear();
        self.file_managers.clear();
        self.visual_ats.clear();
        self.mobility_ats.clear();

        released
    }

    /// Release the aggregate with everything it owns.
    ///
    /// # Returns
    /// The number of records released.
    pub fn teardown(mut self) -> usize {
        self.clear()
    }
}
