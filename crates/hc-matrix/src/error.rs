use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    InvalidOperator(String),
    KernelTooLarge {
        kernel: (usize, usize),
        matrix: (usize, usize),
    },
    KernelNotSquare {
        rows: usize,
        cols: usize,
    },
    KernelSizeNotOdd(usize),
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} elements, got {actual}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::InvalidOperator(op) => write!(f, "invalid comparison operator: {op:?}"),
            Self::KernelTooLarge { kernel, matrix } => {
                write!(
                    f,
                    "kernel {}x{} is larger than matrix {}x{}",
                    kernel.0, kernel.1, matrix.0, matrix.1
                )
            }
            Self::KernelNotSquare { rows, cols } => {
                write!(f, "kernel must be square, got {rows}x{cols}")
            }
            Self::KernelSizeNotOdd(side) => {
                write!(f, "kernel side must be odd, got {side}")
            }
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

impl std::error::Error for Error {}
