//! Dense ridge regression via the normal equations.

use crate::types::StockcastError;

/// Solve `min ||X b - y||^2 + sum(penalty[j] * b[j]^2)`.
///
/// `rows` holds the design matrix row by row; every row must have
/// `penalties.len()` columns.
pub(crate) fn ridge_solve(
    rows: &[Vec<f64>],
    y: &[f64],
    penalties: &[f64],
) -> Result<Vec<f64>, StockcastError> {
    let p = penalties.len();
    let mut ata = vec![0.0; p * p];
    let mut atb = vec![0.0; p];
    for (row, &yi) in rows.iter().zip(y) {
        debug_assert_eq!(row.len(), p);
        for i in 0..p {
            let ri = row[i];
            if ri == 0.0 {
                continue;
            }
            atb[i] += ri * yi;
            for j in 0..=i {
                ata[i * p + j] += ri * row[j];
            }
        }
    }
    for (i, pen) in penalties.iter().enumerate() {
        ata[i * p + i] += pen;
    }
    cholesky_solve(&mut ata, &atb, p)
}

/// Solve `A x = b` for symmetric positive-definite `A` (lower triangle used).
///
/// `a` is overwritten with its Cholesky factor.
fn cholesky_solve(a: &mut [f64], b: &[f64], p: usize) -> Result<Vec<f64>, StockcastError> {
    for j in 0..p {
        let mut d = a[j * p + j];
        for k in 0..j {
            d -= a[j * p + k] * a[j * p + k];
        }
        if !(d > 0.0 && d.is_finite()) {
            return Err(StockcastError::Computation(
                "normal equations are not positive definite".into(),
            ));
        }
        let d = d.sqrt();
        a[j * p + j] = d;
        for i in (j + 1)..p {
            let mut s = a[i * p + j];
            for k in 0..j {
                s -= a[i * p + k] * a[j * p + k];
            }
            a[i * p + j] = s / d;
        }
    }

    // L z = b
    let mut z = vec![0.0; p];
    for i in 0..p {
        let mut s = b[i];
        for k in 0..i {
            s -= a[i * p + k] * z[k];
        }
        z[i] = s / a[i * p + i];
    }
    // L^T x = z
    let mut x = vec![0.0; p];
    for i in (0..p).rev() {
        let mut s = z[i];
        for k in (i + 1)..p {
            s -= a[k * p + i] * x[k];
        }
        x[i] = s / a[i * p + i];
    }
    Ok(x)
}
