//! The gallery's style catalog.
//!
//! Styles come in four tabs, each stored as a JSON array of items:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Soft Lift",
//!     "style": { "boxShadow": "rgba(0, 0, 0, 0.24) 0px 3px 8px" },
//!     "css": "box-shadow: rgba(0, 0, 0, 0.24) 0px 3px 8px;"
//!   }
//! ]
//! ```
//!
//! [`Catalog::from_json_files`] reads `boxShadow.json`, `border.json`,
//! `gradient.json` and `text.json` from one directory.

use std::fmt;
use std::path::Path;

use hcss::{StyleRecord, serialize};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A gallery tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleTab {
    BoxShadow,
    Border,
    Gradient,
    Text,
}

impl StyleTab {
    /// All tabs in display order.
    pub const ALL: [StyleTab; 4] = [
        StyleTab::BoxShadow,
        StyleTab::Border,
        StyleTab::Gradient,
        StyleTab::Text,
    ];

    /// The tab key, also the catalog file stem.
    pub fn key(self) -> &'static str {
        match self {
            StyleTab::BoxShadow => "boxShadow",
            StyleTab::Border => "border",
            StyleTab::Gradient => "gradient",
            StyleTab::Text => "text",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StyleTab::BoxShadow => "Box Shadows",
            StyleTab::Border => "Borders",
            StyleTab::Gradient => "Gradients",
            StyleTab::Text => "Text",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

impl fmt::Display for StyleTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleItem {
    pub id: u32,
    pub name: String,
    /// Drives the live preview.
    pub style: StyleRecord,
    /// Text shown and copied; may be empty, see [`StyleItem::display_css`].
    #[serde(default)]
    pub css: String,
}

impl StyleItem {
    /// The item's CSS text, serialized from `style` when `css` is blank.
    pub fn display_css(&self) -> String {
        if self.css.trim().is_empty() {
            serialize(&self.style)
        } else {
            self.css.clone()
        }
    }

    /// The preview selector for this item, e.g. `.style-border-3`.
    pub fn selector(&self, tab: StyleTab) -> String {
        format!(".style-{}-{}", tab.key(), self.id)
    }
}

/// All four tabs of styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Catalog {
    pub box_shadow: Vec<StyleItem>,
    pub border: Vec<StyleItem>,
    pub gradient: Vec<StyleItem>,
    pub text: Vec<StyleItem>,
}

impl Catalog {
    /// Parses a single JSON object holding all four tabs.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `<tab>.json` for every tab from `dir`.
    ///
    /// Every file must exist and hold a JSON array of items.
    pub fn from_json_files(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalog = Catalog::default();

        for tab in StyleTab::ALL {
            let path = dir.join(format!("{}.json", tab.key()));
            let json = std::fs::read_to_string(&path)?;
            let items: Vec<StyleItem> = serde_json::from_str(&json)?;
            log::debug!("loaded {} {} styles from {}", items.len(), tab.key(), path.display());
            *catalog.items_mut(tab) = items;
        }

        Ok(catalog)
    }

    pub fn items(&self, tab: StyleTab) -> &[StyleItem] {
        match tab {
            StyleTab::BoxShadow => &self.box_shadow,
            StyleTab::Border => &self.border,
            StyleTab::Gradient => &self.gradient,
            StyleTab::Text => &self.text,
        }
    }

    fn items_mut(&mut self, tab: StyleTab) -> &mut Vec<StyleItem> {
        match tab {
            StyleTab::BoxShadow => &mut self.box_shadow,
            StyleTab::Border => &mut self.border,
            StyleTab::Gradient => &mut self.gradient,
            StyleTab::Text => &mut self.text,
        }
    }

    pub fn find(&self, tab: StyleTab, id: u32) -> Option<&StyleItem> {
        self.items(tab).iter().find(|item| item.id == id)
    }

    /// Preview rules for every item of a tab, one per line.
    pub fn stylesheet(&self, tab: StyleTab) -> String {
        self.items(tab)
            .iter()
            .map(|item| hcss::serialize::serialize_rule(&item.selector(tab), &item.style))
            .filter(|rule| !rule.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        StyleTab::ALL.iter().map(|tab| self.items(*tab).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
