//! Descriptive statistics and Pearson correlation over numeric columns

use polars::prelude::*;
use rayon::prelude::*;

use super::error::AnalysisError;

/// Descriptive statistics for one numeric column (sample std, ddof = 1;
/// linear-interpolated quartiles).
#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Pairwise Pearson correlation matrix over numeric columns.
///
/// `values[i][j]` is the correlation of `columns[i]` with `columns[j]`;
/// the matrix is symmetric with a unit diagonal. Entries are NaN when a
/// pair has no variance or no complete observations.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Names of all numeric columns, in schema order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect()
}

/// Compute descriptive statistics for every numeric column. Columns with no
/// non-missing values are skipped.
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnStats>, AnalysisError> {
    let mut out = Vec::new();

    for name in numeric_column_names(df) {
        let ca = cast_f64(df, &name)?;
        let count = ca.len() - ca.null_count();
        if count == 0 {
            continue;
        }

        let quantile = |q: f64| -> Result<f64, AnalysisError> {
            ca.quantile(q, QuantileMethod::Linear)
                .map_err(|e| AnalysisError::Computation {
                    message: format!("quantile of '{}' failed: {}", name, e),
                })
                .map(|v| v.unwrap_or(f64::NAN))
        };

        out.push(ColumnStats {
            name: name.clone(),
            count,
            mean: ca.mean().unwrap_or(f64::NAN),
            std: ca.std(1).unwrap_or(f64::NAN),
            min: ca.min().unwrap_or(f64::NAN),
            q25: quantile(0.25)?,
            median: ca.median().unwrap_or(f64::NAN),
            q75: quantile(0.75)?,
            max: ca.max().unwrap_or(f64::NAN),
        });
    }

    Ok(out)
}

/// Compute the pairwise Pearson correlation matrix over all numeric columns.
/// Upper-triangle pairs are computed in parallel and mirrored.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix, AnalysisError> {
    let columns = numeric_column_names(df);
    let n = columns.len();

    let float_columns: Vec<Float64Chunked> = columns
        .iter()
        .map(|name| cast_f64(df, name))
        .collect::<Result<_, _>>()?;

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let computed: Vec<((usize, usize), f64)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let corr = pearson_correlation(&float_columns[i], &float_columns[j])
                .unwrap_or(f64::NAN);
            ((i, j), corr)
        })
        .collect();

    let mut values = vec![vec![f64::NAN; n]; n];
    for (i, row) in values.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    for ((i, j), corr) in computed {
        values[i][j] = corr;
        values[j][i] = corr;
    }

    Ok(CorrelationMatrix { columns, values })
}

/// Pearson correlation of two columns over pairwise-complete observations,
/// using a single-pass Welford algorithm for numerical stability.
pub fn pearson_correlation(ca1: &Float64Chunked, ca2: &Float64Chunked) -> Option<f64> {
    if ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        let (Some(x), Some(y)) = (x, y) else {
            continue;
        };

        n += 1.0;
        let dx = x - mean_x;
        mean_x += dx / n;
        let dy = y - mean_y;
        mean_y += dy / n;

        var_x += dx * (x - mean_x);
        var_y += dy * (y - mean_y);
        cov_xy += dx * (y - mean_y);
    }

    if n < 2.0 || var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some(cov_xy / (var_x * var_y).sqrt())
}

/// Least-squares line fit over paired samples; returns (slope, intercept).
/// None when fewer than two complete pairs exist or x has no variance.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let n = points.len() as f64;
    if points.len() < 2 {
        return None;
    }

    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

fn cast_f64(df: &DataFrame, name: &str) -> Result<Float64Chunked, AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::missing_column(name))?;
    let column = column
        .cast(&DataType::Float64)
        .map_err(|e| AnalysisError::Computation {
            message: format!("cannot cast column '{}' to float: {}", name, e),
        })?;
    let ca = column.f64().map_err(|e| AnalysisError::Computation {
        message: format!("cannot read column '{}' as float: {}", name, e),
    })?;
    Ok(ca.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfectly_correlated() {
        let a = Float64Chunked::from_slice("a".into(), &[1.0, 2.0, 3.0, 4.0]);
        let b = Float64Chunked::from_slice("b".into(), &[2.0, 4.0, 6.0, 8.0]);
        let corr = pearson_correlation(&a, &b).unwrap();
        assert!((corr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_anticorrelated() {
        let a = Float64Chunked::from_slice("a".into(), &[1.0, 2.0, 3.0]);
        let b = Float64Chunked::from_slice("b".into(), &[3.0, 2.0, 1.0]);
        let corr = pearson_correlation(&a, &b).unwrap();
        assert!((corr + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_skips_incomplete_pairs() {
        let a: Float64Chunked = [Some(1.0), None, Some(3.0), Some(4.0)].into_iter().collect();
        let b: Float64Chunked = [Some(2.0), Some(9.0), Some(6.0), Some(8.0)].into_iter().collect();
        let corr = pearson_correlation(&a, &b).unwrap();
        assert!((corr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_column_is_undefined() {
        let a = Float64Chunked::from_slice("a".into(), &[5.0, 5.0, 5.0]);
        let b = Float64Chunked::from_slice("b".into(), &[1.0, 2.0, 3.0]);
        assert!(pearson_correlation(&a, &b).is_none());
    }

    #[test]
    fn test_linear_fit_exact_line() {
        let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
        let (slope, intercept) = linear_fit(&points).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_fit_degenerate() {
        assert!(linear_fit(&[(1.0, 2.0)]).is_none());
        assert!(linear_fit(&[(1.0, 2.0), (1.0, 3.0)]).is_none());
    }
}
