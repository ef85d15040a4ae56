//! Two-way frequency tables against the infection-status target

use polars::prelude::*;

use super::error::AnalysisError;
use super::subset::string_column;

/// A two-way frequency table of one categorical column against another.
///
/// `counts[i][j]` is the number of rows with category `categories[i]` and
/// target level `levels[j]`. Rows with a missing value on either axis are
/// excluded, matching the usual cross-tabulation convention.
#[derive(Debug, Clone)]
pub struct CrossTab {
    /// Category-axis labels, in first-seen row order unless reindexed
    pub categories: Vec<String>,
    /// Target levels (e.g. infection status values), in first-seen order
    pub levels: Vec<String>,
    /// Frequency counts, one row per category
    pub counts: Vec<Vec<u32>>,
}

impl CrossTab {
    /// Total count for one category across all target levels.
    pub fn row_total(&self, category_idx: usize) -> u32 {
        self.counts[category_idx].iter().sum()
    }

    /// Largest row total, used for chart axis scaling.
    pub fn max_row_total(&self) -> u32 {
        (0..self.categories.len())
            .map(|i| self.row_total(i))
            .max()
            .unwrap_or(0)
    }

    /// Reorder the category axis into a fixed canonical display order.
    /// Labels absent from the data appear as zero rows; labels present in
    /// the data but not in `order` are dropped.
    pub fn reindex(self, order: &[&str]) -> CrossTab {
        let counts = order
            .iter()
            .map(|label| {
                self.categories
                    .iter()
                    .position(|c| c == label)
                    .map(|i| self.counts[i].clone())
                    .unwrap_or_else(|| vec![0; self.levels.len()])
            })
            .collect();

        CrossTab {
            categories: order.iter().map(|s| s.to_string()).collect(),
            levels: self.levels,
            counts,
        }
    }
}

/// Build the cross-tabulation of `category_col` against `target_col`.
pub fn crosstab(
    df: &DataFrame,
    category_col: &str,
    target_col: &str,
) -> Result<CrossTab, AnalysisError> {
    let categories_ca = string_column(df, category_col)?;
    let levels_ca = string_column(df, target_col)?;

    let mut categories: Vec<String> = Vec::new();
    let mut levels: Vec<String> = Vec::new();
    let mut counts: Vec<Vec<u32>> = Vec::new();

    for (category, level) in categories_ca.iter().zip(levels_ca.iter()) {
        let (Some(category), Some(level)) = (category, level) else {
            continue;
        };

        let ci = match categories.iter().position(|c| c == category) {
            Some(i) => i,
            None => {
                categories.push(category.to_string());
                counts.push(vec![0; levels.len()]);
                categories.len() - 1
            }
        };
        let li = match levels.iter().position(|l| l == level) {
            Some(i) => i,
            None => {
                levels.push(level.to_string());
                for row in counts.iter_mut() {
                    row.push(0);
                }
                levels.len() - 1
            }
        };

        counts[ci][li] += 1;
    }

    Ok(CrossTab {
        categories,
        levels,
        counts,
    })
}

/// Frequency of each distinct value in a categorical column, in first-seen
/// row order. Missing values are excluded.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<Vec<(String, u32)>, AnalysisError> {
    let ca = string_column(df, column)?;
    let mut out: Vec<(String, u32)> = Vec::new();

    for value in ca.iter().flatten() {
        match out.iter_mut().find(|(v, _)| v.as_str() == value) {
            Some((_, n)) => *n += 1,
            None => out.push((value.to_string(), 1)),
        }
    }

    Ok(out)
}

/// Reorder value counts into a canonical label order, inserting zero
/// entries for absent labels.
pub fn reindex_counts(counts: Vec<(String, u32)>, order: &[&str]) -> Vec<(String, u32)> {
    order
        .iter()
        .map(|label| {
            let n = counts
                .iter()
                .find(|(v, _)| v == label)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            (label.to_string(), n)
        })
        .collect()
}
