use rand::prelude::*;
use rand_distr::{Exp1, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A fixed-size rectangular matrix of `f64` values, stored row-major: element
/// (i, j) lives at `data[i * cols + j]`.
///
/// The buffer length always equals `rows * cols`; only `reshape` may change the
/// shape, and it re-validates that invariant. Arithmetic never mutates an
/// operand; every operation allocates and returns a new matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix with every cell set to 0.0.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        if rows < 1 || cols < 1 {
            return Err(Error::Dimension { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Creates a `rows x cols` matrix with every cell set to 1.0.
    pub fn ones(rows: usize, cols: usize) -> Result<Matrix> {
        if rows < 1 || cols < 1 {
            return Err(Error::Dimension { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![1.0; rows * cols],
        })
    }

    /// Creates a `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Matrix> {
        let mut res = Matrix::zeros(size, size)?;
        for i in 0..size {
            res.data[i * (size + 1)] = 1.0;
        }
        Ok(res)
    }

    /// Creates a matrix with each cell drawn independently from an exponential
    /// distribution with rate `lambda`: a standard exponential sample divided
    /// by the rate.
    pub fn exponential(rows: usize, cols: usize, lambda: f64) -> Result<Matrix> {
        if lambda <= 0.0 {
            return Err(Error::InvalidParameter { rate: lambda });
        }
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols)?;
        for cell in res.data.iter_mut() {
            let sample: f64 = rng.sample(Exp1);
            *cell = sample / lambda;
        }
        Ok(res)
    }

    /// Creates a matrix with each cell drawn independently from a normal
    /// distribution with the given mean and standard deviation.
    pub fn normal(rows: usize, cols: usize, mean: f64, std_dev: f64) -> Result<Matrix> {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols)?;
        for cell in res.data.iter_mut() {
            let sample: f64 = rng.sample(StandardNormal);
            *cell = sample * std_dev + mean;
        }
        Ok(res)
    }

    /// Creates a matrix that takes ownership of `data`, interpreted row-major.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        if rows < 1 || cols < 1 || data.len() != rows * cols {
            return Err(Error::Dimension { rows, cols });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The backing buffer, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Reinterprets the buffer under a new shape. The new shape must cover
    /// exactly the same number of cells.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows < 1 || cols < 1 || rows * cols != self.data.len() {
            return Err(Error::Dimension { rows, cols });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    fn check_coordinate(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::Coordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Reads the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_coordinate(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Writes the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_coordinate(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns row `row` as a freshly allocated vector, never a view.
    pub fn row(&self, row: usize) -> Result<Vec<f64>> {
        if row >= self.rows {
            return Err(Error::Coordinate {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Returns column `col` as a freshly allocated vector, never a view.
    pub fn col(&self, col: usize) -> Result<Vec<f64>> {
        if col >= self.cols {
            return Err(Error::Coordinate {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut column = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            column.push(self.data[row * self.cols + col]);
        }
        Ok(column)
    }

    /// Multiplies every cell by `value`.
    pub fn scalar(&self, value: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| x * value).collect(),
        }
    }

    /// Applies `functor` to every cell, preserving shape.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Cell-wise sum. Both operands must have identical shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::Dimension {
                rows: other.rows,
                cols: other.cols,
            });
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Standard matrix product: `self.cols` must equal `other.rows`; the result
    /// is `self.rows x other.cols` with cell (i, j) accumulated over k in
    /// ascending order.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::Dimension {
                rows: other.rows,
                cols: other.cols,
            });
        }
        let mut res = Matrix::zeros(self.rows, other.cols)?;
        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                res.data[i * res.cols + j] = sum;
            }
        }
        Ok(res)
    }

    /// Deep-copies `other`'s shape and contents into `self`, reusing the
    /// existing allocation when it is large enough. The one mutating operation
    /// on an existing matrix; used to refresh cached activation buffers.
    pub fn copy_from(&mut self, other: &Matrix) {
        self.rows = other.rows;
        self.cols = other.cols;
        self.data.clear();
        self.data.extend_from_slice(&other.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zeros_and_ones_fill_every_cell() {
        let z = Matrix::zeros(3, 4).unwrap();
        let o = Matrix::ones(3, 4).unwrap();
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(z.get(i, j).unwrap(), 0.0);
                assert_eq!(o.get(i, j).unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn constructors_reject_empty_shapes() {
        assert_eq!(
            Matrix::zeros(0, 4),
            Err(Error::Dimension { rows: 0, cols: 4 })
        );
        assert_eq!(
            Matrix::ones(2, 0),
            Err(Error::Dimension { rows: 2, cols: 0 })
        );
        assert!(Matrix::identity(0).is_err());
    }

    #[test]
    fn identity_is_one_on_the_diagonal() {
        let id = Matrix::identity(4).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let want = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id.get(i, j).unwrap(), want);
            }
        }
    }

    #[test]
    fn exponential_rejects_nonpositive_rate() {
        assert_eq!(
            Matrix::exponential(2, 2, 0.0),
            Err(Error::InvalidParameter { rate: 0.0 })
        );
        assert_eq!(
            Matrix::exponential(2, 2, -1.5),
            Err(Error::InvalidParameter { rate: -1.5 })
        );
    }

    #[test]
    fn exponential_samples_are_nonnegative() {
        let m = Matrix::exponential(10, 10, 2.0).unwrap();
        assert!(m.data().iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn normal_with_zero_std_dev_is_constant() {
        let m = Matrix::normal(5, 3, 2.5, 0.0).unwrap();
        assert!(m.data().iter().all(|&x| x == 2.5));
    }

    #[test]
    fn from_vec_validates_buffer_length() {
        assert!(Matrix::from_vec(2, 3, vec![1.0; 6]).is_ok());
        assert_eq!(
            Matrix::from_vec(2, 3, vec![1.0; 5]),
            Err(Error::Dimension { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn from_vec_is_row_major() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(0, 2).unwrap(), 3.0);
        assert_eq!(m.get(1, 0).unwrap(), 4.0);
    }

    #[test]
    fn reshape_revalidates_the_cell_count() {
        let mut m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        m.reshape(3, 2).unwrap();
        assert_eq!(m.get(2, 1).unwrap(), 6.0);
        assert_eq!(m.reshape(4, 2), Err(Error::Dimension { rows: 4, cols: 2 }));
    }

    #[test]
    fn get_and_set_check_bounds() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        m.set(1, 1, 7.0).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 7.0);
        assert_eq!(
            m.get(2, 0),
            Err(Error::Coordinate {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(m.set(0, 2, 0.0).is_err());
    }

    #[test]
    fn row_and_col_return_fresh_copies() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.col(2).unwrap(), vec![3.0, 6.0]);
        assert!(m.row(2).is_err());
        assert!(m.col(3).is_err());
    }

    #[test]
    fn scalar_and_map_leave_the_operand_untouched() {
        let m = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.0, -4.0]).unwrap();
        let doubled = m.scalar(2.0);
        assert_eq!(doubled.data(), &[2.0, -4.0, 6.0, -8.0]);
        let abs = m.map(f64::abs);
        assert_eq!(abs.data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.data(), &[1.0, -2.0, 3.0, -4.0]);
    }

    #[test]
    fn add_is_commutative_and_checks_shape() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![0.5, -1.0, 2.0, 0.0]).unwrap();
        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.data(), &[1.5, 1.0, 5.0, 4.0]);

        let c = Matrix::zeros(3, 2).unwrap();
        assert_eq!(a.add(&c), Err(Error::Dimension { rows: 3, cols: 2 }));
    }

    #[test]
    fn matmul_matches_hand_computed_product() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_relative_eq!(c.get(0, 0).unwrap(), 58.0);
        assert_relative_eq!(c.get(0, 1).unwrap(), 64.0);
        assert_relative_eq!(c.get(1, 0).unwrap(), 139.0);
        assert_relative_eq!(c.get(1, 1).unwrap(), 154.0);
    }

    #[test]
    fn matmul_checks_inner_dimension() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 2).unwrap();
        assert_eq!(a.matmul(&b), Err(Error::Dimension { rows: 2, cols: 2 }));
    }

    #[test]
    fn matmul_is_associative_in_shape() {
        let a = Matrix::ones(2, 3).unwrap();
        let b = Matrix::ones(3, 4).unwrap();
        let c = Matrix::ones(4, 5).unwrap();
        let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
        let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
        assert_eq!((left.rows(), left.cols()), (right.rows(), right.cols()));
    }

    #[test]
    fn copy_from_refreshes_shape_and_contents() {
        let mut dst = Matrix::zeros(1, 4).unwrap();
        let src = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        dst.copy_from(&src);
        assert_eq!((dst.rows(), dst.cols()), (2, 2));
        assert_eq!(dst.data(), src.data());
    }
}
