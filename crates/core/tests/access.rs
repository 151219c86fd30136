#![forbid(unsafe_code)]

use metascan_core::access::{
    normalize, AccessReport, CrudAccessRecord, Glyph, RenderedAccessReport, SimpleAccessRecord,
};

fn simple(name: &str, has_access: bool) -> SimpleAccessRecord {
    SimpleAccessRecord {
        name: name.to_string(),
        kind: None,
        has_access,
    }
}

#[test]
fn simple_rows_are_two_state() {
    let report = AccessReport::Simple {
        records: vec![simple("Admin", true), simple("Standard", false)],
    };
    let rendered = normalize(&report);
    let RenderedAccessReport::Simple { records } = rendered else {
        panic!("simple report must normalize to simple rows");
    };
    assert_eq!(records[0].access_symbol, Glyph::Granted);
    assert_eq!(records[1].access_symbol, Glyph::Denied);
    // never the tri-state glyph for a boolean source
    assert!(records
        .iter()
        .all(|r| r.access_symbol != Glyph::NotApplicable));
}

#[test]
fn crud_create_and_delete_are_tri_state() {
    // permRead=true, permCreate=null, permEdit=false, permDelete=null
    let report: AccessReport = serde_json::from_str(
        r#"{
            "displayType": "crud",
            "records": [
                {"name": "Admin", "permRead": true, "permCreate": null,
                 "permEdit": false, "permDelete": null}
            ]
        }"#,
    )
    .unwrap();
    let RenderedAccessReport::Crud { records } = normalize(&report) else {
        panic!("crud report must normalize to crud rows");
    };
    let row = &records[0];
    assert_eq!(row.read_symbol, Glyph::Granted);
    assert_eq!(row.create_symbol, Glyph::NotApplicable);
    assert_eq!(row.edit_symbol, Glyph::Denied);
    assert_eq!(row.delete_symbol, Glyph::NotApplicable);
}

#[test]
fn crud_absent_fields_decode_as_not_applicable() {
    let report: AccessReport = serde_json::from_str(
        r#"{
            "displayType": "crud",
            "records": [{"name": "Admin", "permRead": false, "permEdit": true}]
        }"#,
    )
    .unwrap();
    let RenderedAccessReport::Crud { records } = normalize(&report) else {
        panic!("crud report must normalize to crud rows");
    };
    assert_eq!(records[0].create_symbol, Glyph::NotApplicable);
    assert_eq!(records[0].delete_symbol, Glyph::NotApplicable);
}

#[test]
fn normalize_does_not_mutate_and_keeps_original_fields() {
    let report = AccessReport::Crud {
        records: vec![CrudAccessRecord {
            name: "Sales".to_string(),
            kind: Some("Profile".to_string()),
            perm_read: true,
            perm_create: Some(false),
            perm_edit: true,
            perm_delete: Some(true),
        }],
    };
    let before = report.clone();
    let RenderedAccessReport::Crud { records } = normalize(&report) else {
        panic!("crud report must normalize to crud rows");
    };
    assert_eq!(report, before);
    assert_eq!(records[0].record.name, "Sales");
    assert_eq!(records[0].record.kind.as_deref(), Some("Profile"));
    assert_eq!(records[0].create_symbol, Glyph::Denied);
    assert_eq!(records[0].delete_symbol, Glyph::Granted);
}

#[test]
fn display_type_tag_selects_the_record_shape() {
    let report: AccessReport = serde_json::from_str(
        r#"{"displayType": "simple", "records": [{"name": "Admin", "hasAccess": true}]}"#,
    )
    .unwrap();
    assert!(matches!(report, AccessReport::Simple { .. }));

    let err = serde_json::from_str::<AccessReport>(
        r#"{"displayType": "matrix", "records": []}"#,
    );
    assert!(err.is_err());
}

#[test]
fn glyph_symbols() {
    assert_eq!(Glyph::Granted.as_str(), "✅");
    assert_eq!(Glyph::Denied.as_str(), "❌");
    assert_eq!(Glyph::NotApplicable.as_str(), "-");
}
