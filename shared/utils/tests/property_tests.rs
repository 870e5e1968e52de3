//! Conveyor Ledger Property-Based Tests
//!
//! Properties of the export extraction grammar over generated files.

use conveyor_ledger_models::{AttributeKey, AttributeValue, DocumentKind, DocumentNumber};
use conveyor_ledger_utils::{
    classify, extract_records, find_key, lookup, scan_modules, Classification,
    ExtractionContext, ParsedFile,
};
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9 .]{0,8}",
        1 => Just("AT_MCP2_PIT_M".to_string()),
        1 => Just("AT_MCP2_RD_VOT".to_string()),
        1 => Just("NA".to_string()),
        1 => "AT-[A-Z0-9]{2,6}",
    ]
}

fn arb_file() -> impl Strategy<Value = ParsedFile> {
    prop::collection::vec(prop::collection::vec(arb_cell(), 0..10), 1..25)
        .prop_map(ParsedFile::from_rows)
}

fn context() -> ExtractionContext {
    ExtractionContext {
        document_number: DocumentNumber::new("500123"),
        creation_date: "01/01/2024".to_string(),
        customer: "Customer".to_string(),
    }
}

// ===== Document Classifier =====

mod classifier_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Classification depends on cell [0][0] only
        #[test]
        fn prop_classify_reads_first_cell_only(first in "[0-9]{1,8}", file in arb_file()) {
            let mut rows = file.rows().to_vec();
            if rows[0].is_empty() {
                rows[0].push(first.clone());
            } else {
                rows[0][0] = first.clone();
            }
            let with_noise = ParsedFile::from_rows(rows);
            let bare = ParsedFile::from_rows(vec![vec![first.clone()]]);

            prop_assert_eq!(classify(&with_noise), classify(&bare));
            prop_assert_eq!(classify(&bare), classify(&bare));
        }

        #[test]
        fn prop_classification_matches_leading_digit(first in "[0-9]{1,8}") {
            let file = ParsedFile::from_rows(vec![vec![first.clone()]]);
            match first.chars().next() {
                Some('5') => prop_assert_eq!(
                    classify(&file),
                    Classification::Recognized { kind: DocumentKind::Order, number: DocumentNumber::new(&first) }
                ),
                Some('2') => prop_assert_eq!(
                    classify(&file),
                    Classification::Recognized { kind: DocumentKind::Quotation, number: DocumentNumber::new(&first) }
                ),
                _ => prop_assert!(!classify(&file).is_recognized()),
            }
        }
    }
}

// ===== Keyed Attribute Lookup =====

mod lookup_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Rows at or before the start row never influence a lookup
        #[test]
        fn prop_lookup_is_forward_only(
            file in arb_file(),
            prefix in prop::collection::vec(prop::collection::vec(arb_cell(), 0..6), 0..8),
        ) {
            let start = prefix.len();
            let mut rows = prefix.clone();
            rows.push(vec!["".to_string(), "".to_string(), "AT-MARK".to_string()]);
            rows.extend(file.rows().iter().cloned());
            let combined = ParsedFile::from_rows(rows);

            let mut scrubbed_rows: Vec<Vec<String>> = prefix
                .iter()
                .map(|row| vec!["junk".to_string(); row.len()])
                .collect();
            scrubbed_rows.push(vec!["".to_string(), "".to_string(), "AT-MARK".to_string()]);
            scrubbed_rows.extend(file.rows().iter().cloned());
            let scrubbed = ParsedFile::from_rows(scrubbed_rows);

            for key in [AttributeKey::Pitch, AttributeKey::Voltage] {
                prop_assert_eq!(lookup(&combined, start, key), lookup(&scrubbed, start, key));
            }
        }

        #[test]
        fn prop_hits_are_after_start(file in arb_file(), start in 0usize..25) {
            if let Some(hit) = find_key(&file, start, AttributeKey::Pitch.token()) {
                prop_assert!(hit.row > start);
            }
        }

        /// The literal NA never leaks into output
        #[test]
        fn prop_na_is_never_returned_verbatim(file in arb_file(), start in 0usize..25) {
            let value = lookup(&file, start, AttributeKey::Voltage);
            prop_assert_ne!(value, AttributeValue::text("NA"));
        }
    }
}

// ===== Module Scanner =====

mod scanner_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Exactly one record per module row, in row order
        #[test]
        fn prop_one_record_per_module_row(file in arb_file()) {
            let expected: Vec<String> = file
                .rows()
                .iter()
                .filter_map(|row| row.get(2))
                .map(|cell| cell.trim().to_string())
                .filter(|code| code.starts_with("AT-"))
                .collect();

            let records = extract_records(&file, &context());
            let codes: Vec<String> = records.iter().map(|r| r.module_code.clone()).collect();

            prop_assert_eq!(codes, expected);
            prop_assert_eq!(scan_modules(&file).count(), records.len());
        }

        #[test]
        fn prop_extraction_is_deterministic(file in arb_file()) {
            prop_assert_eq!(extract_records(&file, &context()), extract_records(&file, &context()));
        }
    }
}
