use super::{canonical_family, find_face};
use crate::testing::{self, FAMILY};

fn test_db() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_font_data(testing::basic_font());
    db.load_font_data(testing::named_font("Sample Serif", "Regular"));
    db
}

#[test]
fn family_lookup_ignores_case() {
    let db = test_db();
    assert_eq!(canonical_family(&db, "glyphrun test"), Some(FAMILY));
    assert_eq!(canonical_family(&db, "SAMPLE SERIF"), Some("Sample Serif"));
    assert_eq!(canonical_family(&db, "Sample Sans"), None);

    let face = find_face(&db, "GLYPHRUN TEST", None).expect("face");
    assert_eq!(face.families[0].0, FAMILY);
    assert!(matches!(face.source, fontdb::Source::Binary(_)));
}

#[test]
fn unknown_family_finds_no_face() {
    let db = test_db();
    assert!(find_face(&db, "Glyphrun Missing", Some("Bold")).is_none());
}
