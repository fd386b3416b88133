//! Text codec for the packed pixel grid.
//!
//! One byte covers 8 columns, MSB first: bit `0x80` is the lowest column
//! index of the span. A document is rows of `0xNN` literals, bytes joined
//! by `", "`, rows joined by `",\n"`.
//!
//! Decoding is deliberately permissive: lines and tokens that do not look
//! like `0x..` literals are skipped without error, so free-form text such
//! as comments or blank lines can sit in the buffer between rows.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use crate::grid::{HEIGHT, PixelGrid, WIDTH};

/// Packs one row of cells into `ceil(len / 8)` bytes, MSB first.
/// Low-order bits of a trailing partial byte stay zero.
pub fn pack_row(row: &[bool]) -> Vec<u8> {
    let mut bytes = alloc::vec![0u8; row.len().div_ceil(8)];
    for (i, &on) in row.iter().enumerate() {
        if on {
            bytes[i / 8] |= 0x80 >> (i % 8);
        }
    }
    bytes
}

/// Encodes any row set, ragged ones included. Never fails.
pub fn encode_rows<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a [bool]>,
{
    let mut lines = Vec::new();
    for row in rows {
        let literals: Vec<String> = pack_row(row)
            .iter()
            .map(|b| format!("0x{:02X}", b))
            .collect();
        lines.push(literals.join(", "));
    }
    lines.join(",\n")
}

pub fn encode(grid: &PixelGrid) -> String {
    encode_rows(grid.rows())
}

/// Decodes a text buffer into rows of cells.
///
/// Lines not starting with `0x` (after trimming) are dropped entirely.
/// Within a kept line, comma-separated tokens are kept only when they carry
/// a `0x` prefix and parse as a hex byte. Row lengths are whatever the kept
/// tokens produce; callers must tolerate ragged output.
pub fn decode(text: &str) -> Vec<Vec<bool>> {
    let mut rows = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if !line.starts_with("0x") {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split(',') {
            let token = token.trim();
            let Some(digits) = token.strip_prefix("0x") else {
                continue;
            };
            let Ok(value) = u8::from_str_radix(digits, 16) else {
                debug!("skipping unparseable byte token: {:?}", token);
                continue;
            };
            for bit in 0..8 {
                row.push(value & (0x80 >> bit) != 0);
            }
        }
        rows.push(row);
    }
    rows
}

/// Normalizes ragged decode output into a well-formed grid: long rows are
/// truncated, short rows padded with off cells, and the same for the row
/// count.
pub fn rows_to_grid(rows: &[Vec<bool>]) -> PixelGrid {
    let mut grid = PixelGrid::new();
    for (y, row) in rows.iter().take(HEIGHT).enumerate() {
        for (x, &on) in row.iter().take(WIDTH).enumerate() {
            grid.set(x, y, on);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BYTES_PER_ROW;
    use alloc::vec;

    #[test]
    fn full_grid_document_shape() {
        let text = encode(&PixelGrid::new());
        assert_eq!(text.lines().count(), HEIGHT);
        for line in text.lines() {
            assert_eq!(line.matches("0x").count(), BYTES_PER_ROW);
        }
        assert!(!text.ends_with(','));
    }

    #[test]
    fn pack_row_bit_order() {
        assert_eq!(
            pack_row(&[true, false, false, false, false, false, false, false]),
            vec![0x80]
        );
        assert_eq!(pack_row(&[false; 8]), vec![0x00]);
        assert_eq!(pack_row(&[true; 8]), vec![0xFF]);
    }

    #[test]
    fn pack_row_pads_trailing_partial_byte() {
        assert_eq!(pack_row(&[true, true, false]), vec![0xC0]);
        assert_eq!(pack_row(&[true; 9]), vec![0xFF, 0x80]);
    }

    #[test]
    fn encode_formats_literals() {
        let mut row = [false; 16];
        row[4] = true;
        row[15] = true;
        assert_eq!(encode_rows([&row[..]]), "0x08, 0x01");
    }

    #[test]
    fn encode_joins_rows_with_comma_newline() {
        let on = [true; 8];
        let off = [false; 8];
        assert_eq!(encode_rows([&on[..], &off[..]]), "0xFF,\n0x00");
    }

    #[test]
    fn decode_expands_msb_first() {
        let rows = decode("0x80, 0x01");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 16);
        assert!(rows[0][0]);
        assert!(!rows[0][1]);
        assert!(rows[0][15]);
    }

    #[test]
    fn decode_skips_non_hex_lines() {
        let with_comment = "0xFF, 0x00,\n// comment\n0x0F, 0xF0";
        let without = "0xFF, 0x00,\n0x0F, 0xF0";
        assert_eq!(decode(with_comment), decode(without));
    }

    #[test]
    fn decode_skips_malformed_tokens() {
        let rows = decode("0x80, garbage, 0x01");
        assert_eq!(rows, vec![{
            let mut row = vec![false; 16];
            row[0] = true;
            row[15] = true;
            row
        }]);
    }

    #[test]
    fn decode_skips_overflowing_tokens() {
        let rows = decode("0x1FF, 0x01");
        assert_eq!(rows[0].len(), 8);
    }

    #[test]
    fn decode_tolerates_trailing_comma() {
        assert_eq!(decode("0xFF,"), decode("0xFF"));
    }

    #[test]
    fn well_formed_text_round_trips() {
        let text = "0x0A, 0xFF, 0x00,\n0x80, 0x01, 0x7F";
        let rows = decode(text);
        let slices: Vec<&[bool]> = rows.iter().map(|r| r.as_slice()).collect();
        assert_eq!(encode_rows(slices), text);
    }

    #[test]
    fn text_round_trip() {
        let mut grid = PixelGrid::new();
        grid.set(0, 0, true);
        grid.set(111, 37, true);
        grid.set(56, 19, true);
        let text = encode(&grid);
        assert_eq!(rows_to_grid(&decode(&text)), grid);
        assert_eq!(encode(&rows_to_grid(&decode(&text))), text);
    }

    #[test]
    fn ragged_rows_are_padded_and_truncated() {
        let rows = decode("0xFF\n0xAA, 0xAA");
        let grid = rows_to_grid(&rows);
        assert!(grid.get(7, 0));
        assert!(!grid.get(8, 0));
        assert!(grid.get(0, 1));
        assert!(!grid.get(1, 1));
        assert_eq!(grid.cells().len(), WIDTH * HEIGHT);
    }
}
