//! Tests for domain models.

use chrono::NaiveDate;

use crate::db::{DbError, DeletedNote, Note, NoteInput, TITLE_MAX_LEN};

fn sample_note() -> Note {
    Note {
        id: 3,
        title: "Groceries".to_string(),
        content: "Milk, eggs".to_string(),
        date_created: NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap(),
    }
}

#[test]
fn note_input_accepts_title_at_limit() {
    let input = NoteInput::new("a".repeat(TITLE_MAX_LEN), "body");
    assert!(input.validate().is_ok());
}

#[test]
fn note_input_rejects_title_over_limit() {
    let input = NoteInput::new("a".repeat(TITLE_MAX_LEN + 1), "body");
    let err = input.validate().unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));
    assert!(err.to_string().contains("50"));
}

#[test]
fn note_input_counts_characters_not_bytes() {
    // 50 multi-byte characters is still within the limit
    let input = NoteInput::new("é".repeat(TITLE_MAX_LEN), "body");
    assert!(input.validate().is_ok());
}

#[test]
fn note_input_allows_empty_content() {
    let input = NoteInput::new("Title", "");
    assert!(input.validate().is_ok());
}

#[test]
fn deleted_note_keeps_identifying_fields() {
    let deleted = DeletedNote::from(sample_note());
    assert_eq!(deleted.id, 3);
    assert_eq!(deleted.title, "Groceries");
}
