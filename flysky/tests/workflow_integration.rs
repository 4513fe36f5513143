//! End-to-end tests for the booking workflows on a file-backed store.

mod common;

use common::{create_file_store, FieldsFixture};
use flysky::operations::{book, cancel, edit, find, load, sample_reservations, seed, FieldChanges};
use flysky::{Error, ReservationFields, ReservationId};

#[test]
fn test_booking_lifecycle() {
    let mut fs = create_file_store();

    let id = book(&mut fs.store, &FieldsFixture::new().build()).unwrap();
    assert_eq!(load(&fs.store, id).unwrap().fields().seat_number, "12A");

    let edited = edit(
        &mut fs.store,
        id,
        &FieldChanges::new().with_seat_number("14C").with_date("2025-10-20"),
    )
    .unwrap();
    assert_eq!(edited.fields().seat_number, "14C");
    assert_eq!(edited.fields().date, "2025-10-20");
    assert_eq!(edited.fields().name, "Jane Doe");

    cancel(&mut fs.store, id).unwrap();
    assert!(matches!(load(&fs.store, id), Err(Error::NotFound { .. })));
}

#[test]
fn test_book_trims_and_validates() {
    let mut fs = create_file_store();

    let padded = ReservationFields::new("  Jane Doe ", "FL100", " New York", "London ", "2025-10-15", " 12A ");
    let id = book(&mut fs.store, &padded).unwrap();
    assert_eq!(
        fs.store.get_by_id(id).unwrap().unwrap().fields(),
        &FieldsFixture::new().build()
    );

    let blank_seat = FieldsFixture::new().seat("   ").build();
    let result = book(&mut fs.store, &blank_seat);
    assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == "seat_number"));
    assert_eq!(fs.store.get_all().unwrap().len(), 1);
}

#[test]
fn test_edit_rejects_blanking_a_field() {
    let mut fs = create_file_store();
    let id = book(&mut fs.store, &FieldsFixture::new().build()).unwrap();

    let result = edit(&mut fs.store, id, &FieldChanges::new().with_name(" "));
    assert!(matches!(result, Err(Error::Validation { .. })));
    assert_eq!(load(&fs.store, id).unwrap().fields().name, "Jane Doe");
}

#[test]
fn test_edit_unknown_id_is_not_found() {
    let mut fs = create_file_store();
    let result = edit(
        &mut fs.store,
        ReservationId::new(42),
        &FieldChanges::new().with_name("Nobody"),
    );
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_find_blank_term_lists_everything() {
    let mut fs = create_file_store();
    seed(&mut fs.store, false).unwrap();

    assert_eq!(find(&fs.store, "   ").unwrap().len(), 5);
    assert_eq!(find(&fs.store, "tokyo").unwrap().len(), 1);
    assert!(find(&fs.store, "Atlantis").unwrap().is_empty());
}

#[test]
fn test_seed_populates_once() {
    let mut fs = create_file_store();

    let report = seed(&mut fs.store, false).unwrap();
    assert_eq!(report.inserted.len(), 5);
    assert_eq!(report.failed, 0);

    let stored: Vec<_> = fs
        .store
        .get_all()
        .unwrap()
        .into_iter()
        .map(flysky::Reservation::into_fields)
        .collect();
    assert_eq!(stored, sample_reservations());

    assert!(seed(&mut fs.store, false).unwrap().skipped);
    assert_eq!(fs.store.get_all().unwrap().len(), 5);

    let forced = seed(&mut fs.store, true).unwrap();
    assert_eq!(forced.inserted.len(), 5);
    assert_eq!(fs.store.get_all().unwrap().len(), 10);
}
