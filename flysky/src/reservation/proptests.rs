//! Property-based tests for `ReservationFields` validation and trimming.

use super::{Field, ReservationFields};
use proptest::prelude::*;

// Strategy for a value with visible content, possibly padded with spaces
fn padded_value_strategy() -> impl Strategy<Value = String> {
    (" {0,3}", "[A-Za-z0-9][A-Za-z0-9 -]{0,15}", " {0,3}")
        .prop_map(|(lead, body, trail)| format!("{lead}{}{trail}", body.trim_end()))
}

fn fields_strategy() -> impl Strategy<Value = ReservationFields> {
    prop::array::uniform6(padded_value_strategy()).prop_map(|[a, b, c, d, e, f]| {
        ReservationFields::new(a, b, c, d, e, f)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Trimming is idempotent
    #[test]
    fn trimmed_is_idempotent(fields in fields_strategy()) {
        let once = fields.trimmed();
        prop_assert_eq!(once.trimmed(), once);
    }

    // Fields with visible content always validate, before and after trimming
    #[test]
    fn visible_fields_validate(fields in fields_strategy()) {
        prop_assert!(fields.validate().is_ok());
        prop_assert!(fields.trimmed().validate().is_ok());
    }

    // Blanking any one field makes validation name exactly that field
    #[test]
    fn blank_field_is_reported(fields in fields_strategy(), index in 0usize..6, blank in " {0,4}") {
        let field = Field::ALL[index];
        let mut fields = fields;
        *fields.get_mut(field) = blank;

        let err = fields.validate().unwrap_err();
        prop_assert_eq!(err.field, field.column());
    }
}
