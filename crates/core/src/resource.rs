//! Downloadable resource catalog.

use serde::{Deserialize, Serialize};

/// Resource file kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceKind {
    /// PDF document
    Pdf,
    /// Video tutorial
    Video,
    /// Word document
    Doc,
    /// Spreadsheet
    Xls,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceKind::Pdf => "PDF",
            ResourceKind::Video => "Video",
            ResourceKind::Doc => "DOC",
            ResourceKind::Xls => "XLS",
        };
        f.write_str(label)
    }
}

/// File size for documents, running time for videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceExtent {
    /// Size label, e.g. "15.2 MB"
    Size(String),
    /// Running time in minutes
    Duration(u32),
}

impl std::fmt::Display for ResourceExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceExtent::Size(size) => f.write_str(size),
            ResourceExtent::Duration(minutes) => write!(f, "{} min", minutes),
        }
    }
}

/// A downloadable resource descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Title
    pub title: String,

    /// File kind
    pub kind: ResourceKind,

    /// Size or duration
    pub extent: ResourceExtent,
}

impl Resource {
    /// Document with a size label.
    pub fn document(title: impl Into<String>, kind: ResourceKind, size: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            extent: ResourceExtent::Size(size.into()),
        }
    }

    /// Video with a running time.
    pub fn video(title: impl Into<String>, minutes: u32) -> Self {
        Self {
            title: title.into(),
            kind: ResourceKind::Video,
            extent: ResourceExtent::Duration(minutes),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} \u{2022} {})", self.title, self.kind, self.extent)
    }
}

/// A named group of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCategory {
    /// Category name
    pub name: String,

    /// Items in display order
    pub items: Vec<Resource>,
}

/// Read-only catalog of resource categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    categories: Vec<ResourceCategory>,
}

impl ResourceCatalog {
    /// Build a catalog from categories.
    pub fn new(categories: Vec<ResourceCategory>) -> Self {
        Self { categories }
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[ResourceCategory] {
        &self.categories
    }

    /// Look up a category by name, ignoring case.
    pub fn category(&self, name: &str) -> Option<&ResourceCategory> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Total number of resources.
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new(vec![
            ResourceCategory {
                name: "Video Tutorials".to_string(),
                items: vec![Resource::video("PPE Best Practices", 20)],
            },
            ResourceCategory {
                name: "Forms & Templates".to_string(),
                items: vec![
                    Resource::document("Invoice Template", ResourceKind::Xls, "245 KB"),
                    Resource::document("Daily Progress Report", ResourceKind::Doc, "125 KB"),
                ],
            },
        ])
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        let catalog = catalog();
        assert_eq!(catalog.category("forms & templates").unwrap().items.len(), 2);
        assert!(catalog.category("Certifications").is_none());
        assert_eq!(catalog.total_items(), 3);
    }

    #[test]
    fn test_resource_display() {
        let video = Resource::video("PPE Best Practices", 20);
        assert_eq!(video.to_string(), "PPE Best Practices (Video \u{2022} 20 min)");

        let doc = Resource::document("Invoice Template", ResourceKind::Xls, "245 KB");
        assert_eq!(doc.to_string(), "Invoice Template (XLS \u{2022} 245 KB)");
    }
}
