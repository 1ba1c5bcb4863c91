use crate::error::{Error, Result};
use std::fmt;
use std::ops::Mul;

/// Dense row-major matrix with runtime-checked dimensions.
///
/// Every shape mismatch is reported through [`Error`] carrying the operation
/// name and the offending shapes, so a caller can tell a 4x4/3x1 mixup from
/// an out-of-bounds element access.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-filled `rows` x `cols` matrix. Either dimension being
    /// zero is a construction error.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidSize {
                operation: "new",
                rows,
                cols,
            });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from row-major `values`; the slice length must be
    /// exactly `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: &[f32]) -> Result<Self> {
        let mut matrix = Self::new(rows, cols)?;
        if values.len() != rows * cols {
            return Err(Error::ValueCount {
                operation: "from_values",
                expected: rows * cols,
                actual: values.len(),
            });
        }
        matrix.data.copy_from_slice(values);
        Ok(matrix)
    }

    /// Internal constructor for fixed-shape builders whose dimensions are
    /// compile-time constants.
    pub(crate) fn from_values_unchecked(rows: usize, cols: usize, values: &[f32]) -> Self {
        debug_assert!(rows >= 1 && cols >= 1 && values.len() == rows * cols);
        Self {
            data: values.to_vec(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                operation: "get",
                rows: self.rows,
                cols: self.cols,
                row,
                col,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                operation: "set",
                rows: self.rows,
                cols: self.cols,
                row,
                col,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// In-place uniform fill.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// In-place identity fill. Requires a square shape.
    pub fn set_identity(&mut self) -> Result<()> {
        if self.rows != self.cols {
            return Err(Error::InvalidSize {
                operation: "set_identity",
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data.fill(0.0);
        for i in 0..self.rows {
            self.data[i * self.cols + i] = 1.0;
        }
        Ok(())
    }

    /// Elementwise sum. Both operands must have identical shapes.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape("add", rhs)?;
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Elementwise difference. Both operands must have identical shapes.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape("sub", rhs)?;
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix product. Requires `self.cols == rhs.rows`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::IncompatibleShapes {
                operation: "mul",
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }
        let mut result = Matrix::new(self.rows, rhs.cols)?;
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                let mut value = 0.0;
                for i in 0..self.cols {
                    value += self.data[row * self.cols + i] * rhs.data[i * rhs.cols + col];
                }
                result.data[row * rhs.cols + col] = value;
            }
        }
        Ok(result)
    }

    /// First component of a column vector. Requires a single column and at
    /// least one row.
    pub fn x(&self) -> Result<f32> {
        self.component("x", 0)
    }

    /// Second component of a column vector with at least two rows.
    pub fn y(&self) -> Result<f32> {
        self.component("y", 1)
    }

    /// Third component of a column vector with at least three rows.
    pub fn z(&self) -> Result<f32> {
        self.component("z", 2)
    }

    /// Fourth component; the matrix must be exactly 4x1.
    pub fn w(&self) -> Result<f32> {
        if self.rows != 4 || self.cols != 1 {
            return Err(Error::InvalidSize {
                operation: "w",
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[3])
    }

    fn component(&self, operation: &'static str, index: usize) -> Result<f32> {
        if self.cols != 1 || self.rows < index + 1 {
            return Err(Error::InvalidSize {
                operation,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[index])
    }

    fn check_same_shape(&self, operation: &'static str, rhs: &Matrix) -> Result<()> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(Error::IncompatibleShapes {
                operation,
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }
        Ok(())
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * rhs).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        &self * rhs
    }
}

impl Mul<&Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &rhs * self
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
