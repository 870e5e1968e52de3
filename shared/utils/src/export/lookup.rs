//! Keyed Attribute Lookup
//!
//! Forward scan from a module row for the first cell carrying a key token.
//! Matching is substring containment: a cell matches when the token occurs
//! anywhere in its text. The scan never revisits rows at or above the start
//! row, but it does not stop at the next module either, so a key missing from
//! the current module's block is picked up from a later block.

use conveyor_ledger_models::{AttributeKey, AttributeValue};

use super::parser::ParsedFile;

/// Cell holding a key token and what sits to its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHit<'a> {
    pub row: usize,
    pub column: usize,
    /// `None` when the key is the last cell of its row.
    pub adjacent: Option<&'a str>,
}

/// Every cell after `start_row` whose text contains `token`, in row-major order.
pub fn key_hits<'a>(
    file: &'a ParsedFile,
    start_row: usize,
    token: &'a str,
) -> impl Iterator<Item = KeyHit<'a>> + 'a {
    file.rows()
        .iter()
        .enumerate()
        .skip(start_row.saturating_add(1))
        .flat_map(move |(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, cell)| cell.contains(token))
                .map(move |(column, _)| KeyHit {
                    row: row_idx,
                    column,
                    adjacent: row.get(column + 1).map(String::as_str),
                })
        })
}

/// Locate the first cell after `start_row` whose text contains `token`.
pub fn find_key<'a>(file: &'a ParsedFile, start_row: usize, token: &'a str) -> Option<KeyHit<'a>> {
    key_hits(file, start_row, token).next()
}

/// Resolve an attribute value for the module at `start_row`.
pub fn lookup(file: &ParsedFile, start_row: usize, key: AttributeKey) -> AttributeValue {
    let Some(hit) = find_key(file, start_row, key.token()) else {
        return AttributeValue::Missing;
    };

    match hit.adjacent {
        Some("NA") => AttributeValue::NotApplicable,
        Some(value) if !value.trim().is_empty() => AttributeValue::text(value.trim()),
        _ => AttributeValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> ParsedFile {
        ParsedFile::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_value_right_of_key() {
        let file = grid(&[
            &["500123"],
            &["", "", "AT-CV100", "1"],
            &["AT_MCP2_PIT_M", " 60 "],
        ]);
        assert_eq!(lookup(&file, 1, AttributeKey::Pitch), AttributeValue::text("60"));
    }

    #[test]
    fn test_na_becomes_none_sentinel() {
        let file = grid(&[&["500123"], &["AT_MCP2_RD_VOT", "NA"]]);
        assert_eq!(lookup(&file, 0, AttributeKey::Voltage), AttributeValue::NotApplicable);
        assert_eq!(
            lookup(&file, 0, AttributeKey::Voltage).to_cell().as_text(),
            "None"
        );
    }

    #[test]
    fn test_missing_key_and_trailing_key_default() {
        let file = grid(&[&["500123"], &["x", "AT_MCP2_RD_VOT"], &["AT_MCP2_RD_VOT", "24"]]);
        // first hit is the last column of row 1; the later row is not consulted
        assert_eq!(lookup(&file, 0, AttributeKey::Voltage), AttributeValue::Missing);
        assert_eq!(lookup(&file, 0, AttributeKey::Pitch), AttributeValue::Missing);
    }

    #[test]
    fn test_blank_adjacent_is_missing() {
        let file = grid(&[&["500123"], &["AT_MCP2_PIT_M", "   "]]);
        assert_eq!(lookup(&file, 0, AttributeKey::Pitch), AttributeValue::Missing);
    }

    #[test]
    fn test_rows_at_or_before_start_are_ignored() {
        let file = grid(&[
            &["AT_MCP2_PIT_M", "10"],
            &["AT_MCP2_PIT_M", "20"],
            &["AT_MCP2_PIT_M", "30"],
        ]);
        assert_eq!(lookup(&file, 1, AttributeKey::Pitch), AttributeValue::text("30"));
        assert_eq!(lookup(&file, 2, AttributeKey::Pitch), AttributeValue::Missing);
    }

    #[test]
    fn test_substring_containment_is_the_match_rule() {
        let file = grid(&[&["500123"], &["prefix AT_MCP2_PIT_M suffix", "75"]]);
        assert_eq!(lookup(&file, 0, AttributeKey::Pitch), AttributeValue::text("75"));
    }

    #[test]
    fn test_first_match_in_row_major_order() {
        let file = grid(&[
            &["500123"],
            &["AT_MCP2_PIT_M", "1", "AT_MCP2_PIT_M", "2"],
            &["AT_MCP2_PIT_M", "3"],
        ]);
        assert_eq!(lookup(&file, 0, AttributeKey::Pitch), AttributeValue::text("1"));
    }

    #[test]
    fn test_lookup_crosses_into_next_module_block() {
        let file = grid(&[
            &["500123"],
            &["", "", "AT-A", "1"],
            &["AT_MCP2_RD_VOT", "24"],
            &["", "", "AT-B", "1"],
            &["AT_MCP2_PIT_M", "90"],
        ]);
        // module A has no pitch of its own and inherits module B's
        assert_eq!(lookup(&file, 1, AttributeKey::Pitch), AttributeValue::text("90"));
        assert_eq!(lookup(&file, 3, AttributeKey::Voltage), AttributeValue::Missing);
    }

    #[test]
    fn test_find_key_reports_position() {
        let file = grid(&[&["500123"], &["a", "AT_MCP2_FKT_ANG"]]);
        let hit = find_key(&file, 0, "AT_MCP2_FKT_ANG").unwrap();
        assert_eq!((hit.row, hit.column, hit.adjacent), (1, 1, None));
    }

    #[test]
    fn test_key_hits_lists_every_match_in_order() {
        let file = grid(&[
            &["AT_MCP2_FKT_ANG", "10"],
            &["AT_MCP2_FKT_ANG", "99", "AT_MCP2_FKT_ANG"],
            &["x"],
            &["AT_MCP2_FKT_ANG", "45"],
        ]);
        let hits: Vec<_> = key_hits(&file, 0, "AT_MCP2_FKT_ANG")
            .map(|hit| (hit.row, hit.column, hit.adjacent))
            .collect();
        assert_eq!(hits, vec![(1, 0, Some("99")), (1, 2, None), (3, 0, Some("45"))]);
    }
}
