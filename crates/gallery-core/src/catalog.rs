use crate::constants::{DEPTH_MAX, DEPTH_MIN};
use crate::error::{GalleryError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Nature,
    Abstract,
    Portrait,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Abstract => "abstract",
            Category::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nature" => Ok(Category::Nature),
            "abstract" => Ok(Category::Abstract),
            "portrait" => Ok(Category::Portrait),
            other => Err(GalleryError::UnknownCategory(other.to_string())),
        }
    }
}

/// One image tile. `depth` weights every motion cue; higher is closer.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub source: String,
    pub depth: f32,
    pub category: Category,
}

impl GalleryItem {
    pub fn new(source: impl Into<String>, depth: f32, category: Category) -> Self {
        Self {
            source: source.into(),
            depth,
            category,
        }
    }
}

const IMAGE_HOST: &str = "https://images.unsplash.com/";
const IMAGE_QUERY: &str = "?w=800&auto=format&fit=crop&q=60";

// (photo id, depth, category)
const DEFAULT_ITEMS: [(&str, f32, Category); 12] = [
    ("photo-1540206395-68808572332f", 1.2, Category::Nature),
    ("photo-1590523277543-a94d2e4eb00b", 0.3, Category::Abstract),
    ("photo-1500462918059-b1a0cb512f1d", 0.8, Category::Nature),
    ("photo-1531746020798-e6953c6e8e04", 1.5, Category::Portrait),
    ("photo-1543857778-c4a1a3e0b2eb", 0.2, Category::Abstract),
    ("photo-1531746020798-e6953c6e8e04", 0.9, Category::Nature),
    ("photo-1618005182384-a83a8bd57fbe", 0.5, Category::Abstract),
    ("photo-1464822759023-fed622ff2c3b", 1.3, Category::Nature),
    ("photo-1506744038136-46273834b3fb", 0.6, Category::Nature),
    ("photo-1682687220742-aba13b6e50ba", 1.1, Category::Abstract),
    ("photo-1682687221248-3116ba6ab483", 0.4, Category::Portrait),
    ("photo-1470071459604-3b5ec3a7fe05", 1.4, Category::Nature),
];

/// Validated, immutable list of gallery items.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Rejects an empty list and any depth outside `[DEPTH_MIN, DEPTH_MAX]`.
    pub fn new(items: Vec<GalleryItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        for (index, item) in items.iter().enumerate() {
            if !(DEPTH_MIN..=DEPTH_MAX).contains(&item.depth) {
                return Err(GalleryError::DepthOutOfRange {
                    index,
                    depth: item.depth,
                    min: DEPTH_MIN,
                    max: DEPTH_MAX,
                });
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Result<&GalleryItem> {
        self.items.get(index).ok_or(GalleryError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS
                .iter()
                .map(|&(photo, depth, category)| {
                    GalleryItem::new(format!("{IMAGE_HOST}{photo}{IMAGE_QUERY}"), depth, category)
                })
                .collect(),
        }
    }
}
