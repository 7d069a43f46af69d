use crate::models::{FieldValue, Property, SearchField};

/// Normalize a raw query. Blank input means "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether one field value contains an already normalized query
pub fn field_matches(value: FieldValue<'_>, needle: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        FieldValue::Number(n) => n.to_string().contains(needle),
        FieldValue::List(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(needle)),
        FieldValue::Absent => false,
    }
}

/// Whether any of `fields` of `property` contains the normalized query
pub fn property_matches(property: &Property, needle: &str, fields: &[SearchField]) -> bool {
    fields
        .iter()
        .any(|&field| field_matches(property.field(field), needle))
}

/// Positions of the records matching `query`, in input order
pub fn filter_indices(query: &str, records: &[Property], fields: &[SearchField]) -> Vec<usize> {
    let Some(needle) = normalize_query(query) else {
        return (0..records.len()).collect();
    };

    records
        .iter()
        .enumerate()
        .filter(|(_, p)| property_matches(p, &needle, fields))
        .map(|(i, _)| i)
        .collect()
}

/// Records matching `query` on at least one of `fields`, in input order.
///
/// A blank query keeps every record.
pub fn filter_properties<'a>(
    query: &str,
    records: &'a [Property],
    fields: &[SearchField],
) -> Vec<&'a Property> {
    filter_indices(query, records, fields)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use proptest::prelude::*;

    fn ids(found: &[&Property]) -> Vec<String> {
        found.iter().map(|p| p.id.clone()).collect()
    }

    fn madrid_and_barcelona() -> Vec<Property> {
        let mut a = property("A1");
        a.location = "Madrid Centro".to_string();
        let mut b = property("B1");
        b.location = "Barcelona".to_string();
        b.title = "Loft en Gràcia".to_string();
        b.office = "Oficina Norte".to_string();
        vec![a, b]
    }

    #[test]
    fn blank_query_keeps_everything_in_order() {
        let records = madrid_and_barcelona();

        for query in ["", "   ", "\t\n"] {
            let found = filter_properties(query, &records, &SearchField::DEFAULTS);
            assert_eq!(ids(&found), vec!["A1", "B1"]);
        }
    }

    #[test]
    fn matches_location_case_insensitively() {
        let records = madrid_and_barcelona();

        let found = filter_properties("  MADRID ", &records, &SearchField::DEFAULTS);

        assert_eq!(ids(&found), vec!["A1"]);
    }

    #[test]
    fn numeric_fields_match_their_decimal_rendering() {
        let mut a = property("A1");
        a.price = 250_000.0;
        a.area = 85.5;
        let b = property("B1");
        let records = vec![a, b];

        let by_price = filter_properties("2500", &records, &[SearchField::Price]);
        assert_eq!(ids(&by_price), vec!["A1"]);

        let by_area = filter_properties("85.5", &records, &[SearchField::Area]);
        assert_eq!(ids(&by_area), vec!["A1"]);

        // integral floats render without a fractional part
        let none = filter_properties("250000.0", &records, &[SearchField::Price]);
        assert!(none.is_empty());
    }

    #[test]
    fn list_fields_match_any_element() {
        let mut a = property("A1");
        a.features = Some(vec!["Piscina".to_string(), "Garaje".to_string()]);
        let b = property("B1");
        let records = vec![a, b];

        let found = filter_properties("garaje", &records, &[SearchField::Features]);

        assert_eq!(ids(&found), vec!["A1"]);
    }

    #[test]
    fn absent_fields_never_match() {
        let mut a = property("A1");
        a.bedrooms = None;
        let records = vec![a];

        assert!(filter_properties("2", &records, &[SearchField::Bedrooms]).is_empty());
        assert!(filter_properties("x", &records, &[SearchField::Description]).is_empty());
    }

    #[test]
    fn unconfigured_fields_are_ignored() {
        let records = madrid_and_barcelona();

        let found = filter_properties("madrid", &records, &[SearchField::Title]);

        assert!(found.is_empty());
    }

    #[test]
    fn indices_point_at_matching_records() {
        let records = madrid_and_barcelona();

        assert_eq!(
            filter_indices("barcelona", &records, &SearchField::DEFAULTS),
            vec![1]
        );
        assert_eq!(
            filter_indices("", &records, &SearchField::DEFAULTS),
            vec![0, 1]
        );
    }

    fn arb_records() -> impl Strategy<Value = Vec<Property>> {
        prop::collection::vec(
            ("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}", 1u32..2_000_000u32),
            0..24,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, location, price))| {
                    let mut p = property(&format!("P{}", i));
                    p.title = title;
                    p.location = location;
                    p.price = f64::from(price);
                    p
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn filter_is_an_ordered_subset(records in arb_records(), query in "[a-zA-Z0-9 ]{0,4}") {
            let fields = [SearchField::Title, SearchField::Location, SearchField::Price];
            let found = filter_indices(&query, &records, &fields);

            prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(found.iter().all(|&i| i < records.len()));
            if query.trim().is_empty() {
                prop_assert_eq!(found.len(), records.len());
            }
        }

        #[test]
        fn filter_is_idempotent(records in arb_records(), query in "[a-zA-Z0-9 ]{0,4}") {
            let fields = [SearchField::Title, SearchField::Location, SearchField::Price];
            let once: Vec<Property> = filter_properties(&query, &records, &fields)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_properties(&query, &once, &fields);

            prop_assert_eq!(twice.len(), once.len());
            prop_assert!(twice.iter().zip(once.iter()).all(|(a, b)| a.id == b.id));
        }
    }
}
