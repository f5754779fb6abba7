//! Fixed convolution kernels used by the Harris pipeline.

use hc_matrix::Matrix;

/// 3x3 uniform average, `1/9` per cell.
pub fn smooth3x3() -> Matrix {
    Matrix::ones(3, 3).scale(1.0 / 9.0)
}

/// 5x5 integer-weighted Gaussian, normalized so the weights sum to 1.
pub fn gaussian5x5() -> Matrix {
    let raw = Matrix::from_rows(vec![
        vec![1.0, 4.0, 7.0, 4.0, 1.0],
        vec![4.0, 16.0, 26.0, 16.0, 4.0],
        vec![7.0, 26.0, 41.0, 26.0, 7.0],
        vec![4.0, 16.0, 26.0, 16.0, 4.0],
        vec![1.0, 4.0, 7.0, 4.0, 1.0],
    ])
    .expect("kernel literal is rectangular");
    raw.scale(1.0 / raw.sum())
}

/// Central-difference style X gradient (not true Sobel).
pub fn gradient_x() -> Matrix {
    Matrix::from_rows(vec![
        vec![-1.0, 0.0, 1.0],
        vec![-1.0, 0.0, 1.0],
        vec![-1.0, 0.0, 1.0],
    ])
    .expect("kernel literal is rectangular")
}

/// Y gradient: transpose of [`gradient_x`].
pub fn gradient_y() -> Matrix {
    gradient_x().transpose()
}
