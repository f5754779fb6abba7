use core::fmt;

use crate::{Comparison, Error};

/// Dense `rows x cols` grid of `f64` in row-major storage.
///
/// Dimensions are fixed at construction. All operations produce a fresh
/// matrix; none mutate `self`. The one intentional in-place exception in the
/// workspace is non-maximum suppression, which lives in `hc-harris` and takes
/// `&mut Matrix` explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// All cells zero. A zero-row matrix is normalized to `cols == 0`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::fill(rows, cols, 0.0)
    }

    /// All cells one.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::fill(rows, cols, 1.0)
    }

    fn fill(rows: usize, cols: usize, value: f64) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        let len = rows.checked_mul(cols).expect("matrix size overflow");
        Self {
            rows,
            cols,
            data: vec![value; len],
        }
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, Error> {
        let cols = if rows == 0 { 0 } else { cols };
        let expected = rows.checked_mul(cols).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from nested rows. Fails if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    expected: (n, cols),
                    actual: (n, row.len()),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: n,
            cols,
            data,
        })
    }

    /// Builds a matrix by evaluating `f(i, j)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index out of bounds");
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.data[i * self.cols + j])
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(&mut self.data[i * self.cols + j])
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<(), Error> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }

    /// Elementwise sum of `self` and every matrix in `others`, in order.
    ///
    /// Each operand must match `self`'s shape. An empty slice returns a copy
    /// of `self`.
    pub fn add(&self, others: &[&Matrix]) -> Result<Matrix, Error> {
        let mut out = self.clone();
        for m in others {
            self.check_same_shape(m)?;
            for (o, v) in out.data.iter_mut().zip(m.data.iter()) {
                *o += v;
            }
        }
        Ok(out)
    }

    /// Elementwise product of `self` and every matrix in `others`, in order.
    ///
    /// Same contract as [`Matrix::add`].
    pub fn elementwise_mul(&self, others: &[&Matrix]) -> Result<Matrix, Error> {
        let mut out = self.clone();
        for m in others {
            self.check_same_shape(m)?;
            for (o, v) in out.data.iter_mut().zip(m.data.iter()) {
                *o *= v;
            }
        }
        Ok(out)
    }

    pub fn scale(&self, s: f64) -> Matrix {
        let mut out = self.clone();
        for v in &mut out.data {
            *v *= s;
        }
        out
    }

    /// Raises every cell to the exponent `p`.
    pub fn powf(&self, p: f64) -> Matrix {
        let mut out = self.clone();
        for v in &mut out.data {
            *v = v.powf(p);
        }
        out
    }

    /// Transpose. All values are real, so this is also the conjugate
    /// transpose.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Elementwise mask: keeps `self[i][j]` wherever `self[i][j] op
    /// other[i][j]` holds, otherwise writes 0.
    pub fn compare(&self, other: &Matrix, op: Comparison) -> Result<Matrix, Error> {
        self.check_same_shape(other)?;

        let mut out = Matrix::zeros(self.rows, self.cols);
        for (idx, (&a, &b)) in self.data.iter().zip(other.data.iter()).enumerate() {
            if op.holds(a, b) {
                out.data[idx] = a;
            }
        }
        Ok(out)
    }

    /// Extracts the `(2*half + 1)^2` window centered at `(center_row,
    /// center_col)`. Fails if the window extends past any edge.
    pub fn subregion(
        &self,
        center_row: usize,
        center_col: usize,
        half: usize,
    ) -> Result<Matrix, Error> {
        if center_row < half
            || center_col < half
            || center_row + half >= self.rows
            || center_col + half >= self.cols
        {
            return Err(Error::OutOfBounds);
        }

        let side = 2 * half + 1;
        let mut out = Matrix::zeros(side, side);
        for di in 0..side {
            let src = self.row(center_row - half + di);
            let col0 = center_col - half;
            out.data[di * side..(di + 1) * side].copy_from_slice(&src[col0..col0 + side]);
        }
        Ok(out)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for v in self.row(i) {
                write!(f, "{v} ")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
