//! Column layout engine.
//!
//! Given the plain names of a listing and a terminal width, computes the
//! grid geometry used by the grid renderer: how many columns fit, how wide
//! each column is, and the per-item widths padding is later derived from.
//!
//! The engine tries candidate column counts from an upper bound down to
//! one. For each candidate the names are chunked row-major, a column is as
//! wide as its widest member plus [`COLUMN_PADDING`], and the candidate is
//! accepted as soon as the summed row width (minus the trailing-gap slack)
//! fits the terminal. Picking the first fit in a descending scan maximizes
//! column usage without overflowing. One column is the guaranteed floor:
//! names wider than the terminal still produce a plan.
//!
//! All widths are display-cell widths, so non-ASCII names measure
//! correctly. Escape codes and icon prefixes never reach this module; it
//! sees plain names only.

use crate::utils::display_width;

/// Upper bound on the number of grid columns.
pub const MAX_COLUMNS: usize = 10;

/// Added to a column's widest name: a two-cell inter-column gap plus slack
/// that absorbs the icon prefix of the rendered form.
const COLUMN_PADDING: usize = 4;

/// Subtracted from the summed column widths: the last column carries no
/// trailing gap.
const ROW_SLACK: usize = 2;

/// Grid geometry for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Number of grid columns, always at least 1.
    pub column_count: usize,
    /// Per-column width: widest member plus [`COLUMN_PADDING`].
    pub column_widths: Vec<usize>,
    /// Plain width plus 2 for every item, in the same row-major order the
    /// renderer chunks with.
    pub item_widths: Vec<Vec<usize>>,
}

impl LayoutPlan {
    /// Total visible width of the widest row, gap slack included.
    pub fn row_width(&self) -> usize {
        self.column_widths.iter().sum::<usize>().saturating_sub(ROW_SLACK)
    }
}

/// Computes the widest grid of `names` that fits `terminal_width`.
///
/// Candidates run from `min(`[`MAX_COLUMNS`]`, names.len())` down to 1 and
/// the first one whose [`LayoutPlan::row_width`] fits is returned, so the
/// chosen `column_count` is the largest feasible one. The result is a pure
/// function of its inputs: identical inputs yield identical plans, and a
/// wider terminal never yields fewer columns.
pub fn compute_layout(names: &[String], terminal_width: usize) -> LayoutPlan {
    let upper = MAX_COLUMNS.min(names.len()).max(1);
    for count in (2..=upper).rev() {
        let plan = plan_with_columns(names, count);
        if plan.row_width() <= terminal_width {
            return plan;
        }
    }
    // One column always yields a plan, even for names wider than the
    // terminal.
    plan_with_columns(names, 1)
}

/// Builds the plan for a fixed column count.
fn plan_with_columns(names: &[String], count: usize) -> LayoutPlan {
    let rows: Vec<&[String]> = names.chunks(count).collect();
    let column_widths = (0..count)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|name| display_width(name) + COLUMN_PADDING)
                .max()
                .unwrap_or(COLUMN_PADDING)
        })
        .collect();
    let item_widths = rows
        .iter()
        .map(|row| row.iter().map(|name| display_width(name) + 2).collect())
        .collect();
    LayoutPlan {
        column_count: count,
        column_widths,
        item_widths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn three_short_names_share_one_row() {
        let plan = compute_layout(&names(&["a.txt", "bb.txt", "ccc.txt"]), 80);
        assert_eq!(plan.column_count, 3);
        assert_eq!(plan.column_widths, vec![9, 10, 11]);
        assert_eq!(plan.item_widths, vec![vec![7, 8, 9]]);
        assert!(plan.row_width() <= 80);
    }

    #[test]
    fn narrow_terminal_forces_one_column() {
        let plan = compute_layout(&names(&["a.txt", "bb.txt", "ccc.txt"]), 10);
        assert_eq!(plan.column_count, 1);
        assert_eq!(plan.item_widths.len(), 3);
    }

    #[test]
    fn names_wider_than_the_terminal_still_get_a_plan() {
        let long = "x".repeat(200);
        let plan = compute_layout(&names(&[&long, &long, &long]), 80);
        assert_eq!(plan.column_count, 1);
        assert_eq!(plan.column_widths, vec![204]);
    }

    #[test]
    fn column_count_is_capped() {
        let many: Vec<String> = (0..40).map(|_| "a".to_string()).collect();
        let plan = compute_layout(&many, 1000);
        assert_eq!(plan.column_count, MAX_COLUMNS);
    }

    #[test]
    fn fitting_result_never_exceeds_terminal_width() {
        let set = names(&["main.rs", "lib.rs", "Cargo.toml", "a", "deep_module.rs"]);
        let widest = set.iter().map(|name| name.len()).max().unwrap();
        for width in widest + 4..200 {
            let plan = compute_layout(&set, width);
            assert!(plan.column_count >= 1);
            assert!(
                plan.row_width() <= width,
                "row width {} exceeds terminal {width}",
                plan.row_width()
            );
        }
    }

    #[test]
    fn wider_terminal_never_loses_columns() {
        let set = names(&["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"]);
        let mut previous = 0;
        for width in 0..=200 {
            let count = compute_layout(&set, width).column_count;
            assert!(
                count >= previous,
                "width {width}: column count dropped from {previous} to {count}"
            );
            previous = count;
        }
    }

    #[test]
    fn identical_inputs_yield_identical_plans() {
        let set = names(&["one", "two", "three", "four"]);
        assert_eq!(compute_layout(&set, 42), compute_layout(&set, 42));
    }

    #[test]
    fn last_short_row_does_not_widen_missing_columns() {
        // two rows of two, second row has a single long name: column 0
        // takes its width from both rows, column 1 only from the first
        let plan = compute_layout(&names(&["aa", "b", "cccccc"]), 14);
        assert_eq!(plan.column_count, 2);
        assert_eq!(plan.column_widths, vec![10, 5]);
        assert_eq!(plan.item_widths, vec![vec![4, 3], vec![8]]);
    }

    #[test]
    fn wide_glyph_names_measure_in_cells() {
        // the snake emoji occupies two terminal cells
        let plan = compute_layout(&names(&["🐍🐍"]), 80);
        assert_eq!(plan.column_widths, vec![8]);
    }

    #[test]
    fn empty_listing_still_has_one_column() {
        let plan = compute_layout(&[], 80);
        assert_eq!(plan.column_count, 1);
        assert!(plan.item_widths.is_empty());
    }
}
