use core::str::FromStr;

use crate::Error;

/// Relation used by [`Matrix::compare`](crate::Matrix::compare) masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Comparison {
    pub fn holds(self, a: f64, b: f64) -> bool {
        match self {
            Self::Less => a < b,
            Self::Equal => a == b,
            Self::Greater => a > b,
            Self::LessOrEqual => a <= b,
            Self::GreaterOrEqual => a >= b,
        }
    }
}

impl FromStr for Comparison {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "<" => Ok(Self::Less),
            "==" => Ok(Self::Equal),
            ">" => Ok(Self::Greater),
            "<=" => Ok(Self::LessOrEqual),
            ">=" => Ok(Self::GreaterOrEqual),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}
