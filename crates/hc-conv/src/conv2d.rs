use hc_matrix::{Error, Matrix};
use rayon::prelude::*;

/// Applies a square, odd-sized `kernel` to `src` in valid mode.
///
/// Only interior cells, whose full window fits inside `src`, are recomputed.
/// Border cells within `half` of any edge keep their original value; this is
/// a deliberate simplification, not zero padding or edge replication.
///
/// Interior rows are evaluated in parallel on the global rayon pool, so the
/// number of in-flight workers is bounded by the available hardware
/// parallelism. Every output row is owned by exactly one worker and each cell
/// reads only the immutable input, so results do not depend on scheduling
/// order. On the first error no further rows are scheduled, and the call does
/// not return until every dispatched worker has finished.
pub fn filter(src: &Matrix, kernel: &Matrix) -> Result<Matrix, Error> {
    let (rows, cols) = src.shape();
    let (krows, kcols) = kernel.shape();

    if krows > rows || kcols > cols {
        return Err(Error::KernelTooLarge {
            kernel: (krows, kcols),
            matrix: (rows, cols),
        });
    }
    if krows != kcols {
        return Err(Error::KernelNotSquare {
            rows: krows,
            cols: kcols,
        });
    }
    if krows % 2 == 0 {
        return Err(Error::KernelSizeNotOdd(krows));
    }

    let half = krows / 2;
    let mut out = src.clone();

    out.data_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .skip(half)
        .take(rows - 2 * half)
        .try_for_each(|(i, out_row)| -> Result<(), Error> {
            for (j, out_cell) in out_row.iter_mut().enumerate().take(cols - half).skip(half) {
                // Unreachable after the size checks above, but a window
                // failure must still abort the whole convolution.
                let window = src.subregion(i, j, half)?;
                *out_cell = kernel
                    .data()
                    .iter()
                    .zip(window.data().iter())
                    .map(|(k, w)| k * w)
                    .sum();
            }
            Ok(())
        })?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use hc_matrix::{Error, Matrix};

    use crate::conv2d::filter;

    #[test]
    fn single_cell_identity_kernel_preserves_values() {
        let a = Matrix::from_fn(4, 5, |i, j| (i * 5 + j) as f64);
        let kernel = Matrix::ones(1, 1);
        let out = filter(&a, &kernel).expect("valid kernel");
        assert_eq!(out, a);
    }

    #[test]
    fn box_kernel_averages_interior_and_keeps_border() {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .expect("valid matrix");
        let kernel = Matrix::ones(3, 3).scale(1.0 / 9.0);

        let out = filter(&a, &kernel).expect("valid kernel");

        // Only the center cell is interior; it becomes the window average.
        assert!((out.get(1, 1).expect("in bounds") - 5.0).abs() < 1e-12);
        for (i, j) in [(0, 0), (0, 2), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(out.get(i, j), a.get(i, j), "border cell ({i}, {j})");
        }
    }

    #[test]
    fn kernel_weights_are_applied_flat() {
        // A kernel with a single nonzero weight picks out one neighbor.
        let a = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        let mut kernel = Matrix::zeros(3, 3);
        *kernel.get_mut(0, 0).expect("in bounds") = 1.0;

        let out = filter(&a, &kernel).expect("valid kernel");
        assert_eq!(out.get(1, 1), a.get(0, 0));
    }

    #[test]
    fn rejects_even_sized_kernel() {
        let a = Matrix::zeros(6, 6);
        let kernel = Matrix::ones(2, 2);
        assert_eq!(filter(&a, &kernel), Err(Error::KernelSizeNotOdd(2)));
    }

    #[test]
    fn rejects_non_square_kernel() {
        let a = Matrix::zeros(6, 6);
        let kernel = Matrix::ones(3, 5);
        assert_eq!(
            filter(&a, &kernel),
            Err(Error::KernelNotSquare { rows: 3, cols: 5 })
        );
    }

    #[test]
    fn rejects_kernel_larger_than_matrix() {
        let a = Matrix::zeros(3, 10);
        let kernel = Matrix::ones(5, 5);
        assert_eq!(
            filter(&a, &kernel),
            Err(Error::KernelTooLarge {
                kernel: (5, 5),
                matrix: (3, 10),
            })
        );
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let a = Matrix::from_fn(64, 48, |i, j| ((i * 31 + j * 17) % 256) as f64);
        let kernel = Matrix::from_rows(vec![
            vec![-1.0, 0.0, 1.0],
            vec![-1.0, 0.0, 1.0],
            vec![-1.0, 0.0, 1.0],
        ])
        .expect("valid kernel");

        let first = filter(&a, &kernel).expect("valid kernel");
        let second = filter(&a, &kernel).expect("valid kernel");
        assert_eq!(first, second);
    }
}
