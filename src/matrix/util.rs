use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use super::Matrix;

// ── Display ─────────────────────────────────────────────────────────

/// One bracketed line per row, columns right-aligned to the widest cell.
/// The empty matrix prints as `[]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        let columns = self.columns();

        // Render every cell once, row-major, tracking column widths
        let cells: Vec<String> = self
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|v| v.to_string())
            .collect();
        let mut widths = alloc::vec![0_usize; columns];
        for (k, cell) in cells.iter().enumerate() {
            let j = k % columns;
            widths[j] = widths[j].max(cell.chars().count());
        }

        for (i, row) in cells.chunks(columns).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{:>width$}", cell, width = widths[j])?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
