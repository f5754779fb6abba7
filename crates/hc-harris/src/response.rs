use hc_conv::{filter, kernels};
use hc_matrix::{Comparison, Error, Matrix};

/// Directional gradients `(Ix, Iy)` of the intensity matrix.
pub fn gradients(img: &Matrix) -> Result<(Matrix, Matrix), Error> {
    let ix = filter(img, &kernels::gradient_x())?;
    let iy = filter(img, &kernels::gradient_y())?;
    Ok((ix, iy))
}

/// Gaussian-smoothed structure tensor components `(Sxx, Syy, Sxy)`.
pub fn structure_tensor(ix: &Matrix, iy: &Matrix) -> Result<(Matrix, Matrix, Matrix), Error> {
    let ixx = ix.elementwise_mul(&[ix])?;
    let iyy = iy.elementwise_mul(&[iy])?;
    let ixy = ix.elementwise_mul(&[iy])?;

    let gaussian = kernels::gaussian5x5();
    let sxx = filter(&ixx, &gaussian)?;
    let syy = filter(&iyy, &gaussian)?;
    let sxy = filter(&ixy, &gaussian)?;
    Ok((sxx, syy, sxy))
}

/// Corner response `R = Sxx*Syy - Sxy^2 - k*(Sxx + Syy)^2`, per cell.
///
/// This is the determinant-minus-k-trace-squared score of the 2x2 structure
/// tensor, which tracks its eigenvalue behavior without an explicit
/// eigen-decomposition.
pub fn corner_response(
    sxx: &Matrix,
    syy: &Matrix,
    sxy: &Matrix,
    k: f64,
) -> Result<Matrix, Error> {
    let det = sxx.elementwise_mul(&[syy])?;
    let trace = sxx.add(&[syy])?;
    det.add(&[&sxy.powf(2.0).scale(-1.0), &trace.powf(2.0).scale(-k)])
}

/// Keeps only cells of `r` strictly greater than `threshold`; all others
/// become 0.
pub fn apply_threshold(r: &Matrix, threshold: f64) -> Result<Matrix, Error> {
    let cut = Matrix::ones(r.rows(), r.cols()).scale(threshold);
    r.compare(&cut, Comparison::Greater)
}
