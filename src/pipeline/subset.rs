//! Row filtering by case-insensitive substring match on categorical columns

use polars::prelude::*;

use super::error::AnalysisError;

/// A conjunctive set of (column, substring) predicates. A row passes when
/// every named column contains its substring, case-insensitively. Rows with
/// a missing value in any named column never pass.
pub type ContainsPredicates<'a> = [(&'a str, &'a str)];

/// Filter the table down to rows matching every predicate.
pub fn filter_contains(
    df: &DataFrame,
    predicates: &ContainsPredicates,
) -> Result<DataFrame, AnalysisError> {
    let mut mask = vec![true; df.height()];

    for (column, needle) in predicates {
        let ca = string_column(df, column)?;
        let needle = needle.to_lowercase();
        for (keep, value) in mask.iter_mut().zip(ca.iter()) {
            let hit = value
                .map(|v| v.to_lowercase().contains(&needle))
                .unwrap_or(false);
            *keep = *keep && hit;
        }
    }

    let mask = BooleanChunked::from_slice("mask".into(), &mask);
    df.filter(&mask).map_err(|e| AnalysisError::Computation {
        message: format!("row filter failed: {}", e),
    })
}

/// Fetch a column as strings, erroring if it is absent or non-categorical.
pub(crate) fn string_column<'a>(
    df: &'a DataFrame,
    name: &str,
) -> Result<&'a StringChunked, AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::missing_column(name))?;
    column
        .str()
        .map_err(|e| AnalysisError::Computation {
            message: format!("cannot read column '{}' as strings: {}", name, e),
        })
}
