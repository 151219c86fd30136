//! Metascan core types

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

pub mod access;

pub use access::{normalize, AccessReport, Glyph, RenderedAccessReport};

/// A browsable metadata category.
///
/// Wire names are the exact PascalCase tags the catalog service uses, so the
/// enum doubles as the map key in catalog documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    CustomObject,
    CustomField,
    FlowDefinition,
    ApexClass,
    ApexTrigger,
    LightningComponentBundle,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CustomObject,
        Category::CustomField,
        Category::FlowDefinition,
        Category::ApexClass,
        Category::ApexTrigger,
        Category::LightningComponentBundle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CustomObject => "CustomObject",
            Category::CustomField => "CustomField",
            Category::FlowDefinition => "FlowDefinition",
            Category::ApexClass => "ApexClass",
            Category::ApexTrigger => "ApexTrigger",
            Category::LightningComponentBundle => "LightningComponentBundle",
        }
    }

    /// Human label for pickers and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::CustomObject => "Custom Object",
            Category::CustomField => "Custom Field",
            Category::FlowDefinition => "Flow",
            Category::ApexClass => "Apex Class",
            Category::ApexTrigger => "Apex Trigger",
            Category::LightningComponentBundle => "LWC",
        }
    }

    /// Icon token a frontend can map to its icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::CustomObject => "utility:open_folder",
            Category::CustomField => "utility:file",
            Category::FlowDefinition => "utility:flow",
            Category::ApexClass => "utility:apex",
            Category::ApexTrigger => "utility:connected_apps",
            Category::LightningComponentBundle => "utility:component_customization",
        }
    }

    /// Whether the access matrix is offered for this category.
    ///
    /// Static capability: only categories with direct (not inherited or
    /// contextual) access semantics qualify.
    pub fn supports_access_report(&self) -> bool {
        matches!(
            self,
            Category::ApexClass | Category::CustomObject | Category::CustomField
        )
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::ApexClass
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().to_ascii_lowercase() == needle)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// One catalog entry within a category.
///
/// Categories carry extra descriptive fields of their own; those ride along
/// untyped in `extra` and are preserved verbatim on re-serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub developer_name: Option<String>,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A record linking a dependent artifact to the item it references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEdge {
    /// Id of the referenced item; edges are matched against the current
    /// selection by this field.
    pub ref_id: String,
    pub dependent_id: String,
    pub dependent_name: String,
    #[serde(default)]
    pub dependent_type: Option<String>,
}
