//! Property-based tests for store round-trips and search.

use crate::database::test_util::create_test_store;
use crate::ReservationFields;
use proptest::prelude::*;

// Any text SQLite can hold, including padding, quotes, and non-ASCII
fn value_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

fn fields_strategy() -> impl Strategy<Value = ReservationFields> {
    prop::array::uniform6(value_strategy()).prop_map(|[a, b, c, d, e, f]| {
        ReservationFields::new(a, b, c, d, e, f)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // What goes in comes back out byte for byte
    #[test]
    fn add_then_get_round_trips(fields in fields_strategy()) {
        let mut store = create_test_store();
        let id = store.add(&fields).unwrap();

        let stored = store.get_by_id(id).unwrap().unwrap();
        prop_assert_eq!(stored.fields(), &fields);
    }

    // Applying the same update twice leaves the same row as applying it once
    #[test]
    fn update_is_idempotent(original in fields_strategy(), replacement in fields_strategy()) {
        let mut store = create_test_store();
        let id = store.add(&original).unwrap();

        prop_assert!(store.update(id, &replacement));
        let once = store.get_all().unwrap();
        prop_assert!(store.update(id, &replacement));
        prop_assert_eq!(store.get_all().unwrap(), once);
    }

    // Identifiers strictly increase across a batch of inserts
    #[test]
    fn ids_strictly_increase(batch in prop::collection::vec(fields_strategy(), 1..20)) {
        let mut store = create_test_store();
        let ids: Vec<_> = batch.iter().map(|f| store.add(f).unwrap()).collect();

        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // A name always finds its own row when it has no LIKE wildcards
    #[test]
    fn search_finds_own_name(name in "[A-Za-z][A-Za-z ]{0,12}") {
        let mut store = create_test_store();
        let fields = ReservationFields::new(name.clone(), "FL1", "Oslo", "Rome", "d", "1A");
        let id = store.add(&fields).unwrap();

        let found = store.search(&name.to_lowercase()).unwrap();
        prop_assert!(found.iter().any(|r| r.id() == id));
    }
}
