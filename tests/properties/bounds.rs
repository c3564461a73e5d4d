//! Property tests for bounds resolution.

use datepicker_core::{BoundsConfig, ConfigError, DateField, PartialDate, Unit};
use proptest::prelude::*;

use crate::strategies::any_date;

fn unit() -> impl Strategy<Value = Unit> {
    prop_oneof![Just(Unit::Day), Just(Unit::Month), Just(Unit::Year)]
}

proptest! {
    /// PROPERTY: explicit literal bounds resolve exactly when min <= max.
    #[test]
    fn property_explicit_bounds_ordered(min in any_date(), max in any_date(), now in any_date()) {
        let config = BoundsConfig::Explicit {
            min: DateField::Literal(PartialDate::from(min)),
            max: DateField::Literal(PartialDate::from(max)),
        };

        match config.resolve(now) {
            Ok(bounds) => {
                prop_assert!(min <= max);
                prop_assert!(bounds.min() <= bounds.max());
                prop_assert_eq!((bounds.min(), bounds.max()), (min, max));
            }
            Err(ConfigError::InvertedBounds { .. }) => prop_assert!(min > max),
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    /// PROPERTY: a fixed unit window always resolves and contains today.
    #[test]
    fn property_fixed_unit_contains_now(unit in unit(), now in any_date()) {
        let bounds = BoundsConfig::FixedUnit(unit).resolve(now).unwrap();
        prop_assert!(bounds.min() <= bounds.max());
        prop_assert!(bounds.contains(now));
        prop_assert_eq!(bounds.min(), now.truncate_to(unit));
    }

    /// PROPERTY: a fixed year or year-month window spans exactly that unit.
    #[test]
    fn property_fixed_partial_spans_unit(
        year in 1900u16..=2100,
        month in proptest::option::of(1u8..=12),
        now in any_date(),
    ) {
        let partial = PartialDate::from_parts(year, month, None).unwrap();
        let bounds = BoundsConfig::FixedPartial(partial).resolve(now).unwrap();
        let unit = if month.is_some() { Unit::Month } else { Unit::Year };

        prop_assert_eq!(bounds.min(), partial.lower_bound());
        prop_assert_eq!(bounds.max(), bounds.min().end_of(unit));
    }

    /// PROPERTY: the "now" sentinel resolves to today on either end.
    #[test]
    fn property_now_sentinel(now in any_date()) {
        let config = BoundsConfig::Explicit { min: DateField::Now, max: DateField::Now };
        let bounds = config.resolve(now).unwrap();
        prop_assert_eq!((bounds.min(), bounds.max()), (now, now));
    }
}
