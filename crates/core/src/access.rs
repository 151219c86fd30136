//! Access reports and their renderable form.
//!
//! The catalog service answers access queries in one of two shapes, tagged by
//! `displayType`: a single boolean per row for most categories, or CRUD-style
//! rows for objects and fields. Modeling the report as a tagged enum makes
//! "exactly one shape per report" hold by construction.

use serde::{Deserialize, Serialize};

/// Access result for one item, as returned by the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "displayType", rename_all = "lowercase")]
pub enum AccessReport {
    Simple { records: Vec<SimpleAccessRecord> },
    Crud { records: Vec<CrudAccessRecord> },
}

impl AccessReport {
    pub fn is_empty(&self) -> bool {
        match self {
            AccessReport::Simple { records } => records.is_empty(),
            AccessReport::Crud { records } => records.is_empty(),
        }
    }
}

/// One boolean-access row (profile or permission set grant).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAccessRecord {
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    pub has_access: bool,
}

/// One CRUD row. `perm_create` and `perm_delete` are tri-state: the service
/// omits them (null) where the operation does not apply, e.g. on fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrudAccessRecord {
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    pub perm_read: bool,
    #[serde(default)]
    pub perm_create: Option<bool>,
    pub perm_edit: bool,
    #[serde(default)]
    pub perm_delete: Option<bool>,
}

/// Display glyph for one permission cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Granted,
    Denied,
    NotApplicable,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Granted => "✅",
            Glyph::Denied => "❌",
            Glyph::NotApplicable => "-",
        }
    }

    fn tri_state(value: Option<bool>) -> Self {
        match value {
            Some(v) => Glyph::from(v),
            None => Glyph::NotApplicable,
        }
    }
}

impl From<bool> for Glyph {
    fn from(granted: bool) -> Self {
        if granted {
            Glyph::Granted
        } else {
            Glyph::Denied
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Glyph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A report with display glyphs attached, ready for a frontend to render.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "displayType", rename_all = "lowercase")]
pub enum RenderedAccessReport {
    Simple { records: Vec<RenderedSimpleRow> },
    Crud { records: Vec<RenderedCrudRow> },
}

impl RenderedAccessReport {
    pub fn is_empty(&self) -> bool {
        match self {
            RenderedAccessReport::Simple { records } => records.is_empty(),
            RenderedAccessReport::Crud { records } => records.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSimpleRow {
    #[serde(flatten)]
    pub record: SimpleAccessRecord,
    pub access_symbol: Glyph,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCrudRow {
    #[serde(flatten)]
    pub record: CrudAccessRecord,
    pub read_symbol: Glyph,
    pub create_symbol: Glyph,
    pub edit_symbol: Glyph,
    pub delete_symbol: Glyph,
}

/// Attach display glyphs to every record of a report.
///
/// Pure: the input is left untouched, and every output row carries the
/// original record alongside its derived glyphs. Read and edit are
/// two-state; create and delete are tri-state.
pub fn normalize(report: &AccessReport) -> RenderedAccessReport {
    match report {
        AccessReport::Simple { records } => RenderedAccessReport::Simple {
            records: records
                .iter()
                .map(|r| RenderedSimpleRow {
                    access_symbol: Glyph::from(r.has_access),
                    record: r.clone(),
                })
                .collect(),
        },
        AccessReport::Crud { records } => RenderedAccessReport::Crud {
            records: records
                .iter()
                .map(|r| RenderedCrudRow {
                    read_symbol: Glyph::from(r.perm_read),
                    create_symbol: Glyph::tri_state(r.perm_create),
                    edit_symbol: Glyph::from(r.perm_edit),
                    delete_symbol: Glyph::tri_state(r.perm_delete),
                    record: r.clone(),
                })
                .collect(),
        },
    }
}
