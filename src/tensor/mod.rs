// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense 2-D and 3-D numeric arrays.
//!
//! A [`Tensor`] wraps an `ndarray::Array3` of shape `(rows, cols, channels)`.
//! Graph weight tables use a single channel; the optimizer's search tensor
//! uses one channel per start node. All access is bounds checked and panics
//! on violation.
//!
//! The row and column queries (`row_sum`, `min_col`, ...) operate on
//! channel 0.

use std::fmt;
use std::ops::{Index, IndexMut};

use ndarray::{Array3, ArrayView2, Axis, LinalgScalar};

/// Numeric element types a [`Tensor`] can hold.
pub trait Element: LinalgScalar + PartialOrd + fmt::Debug {
    /// Largest finite value, used as the starting point of minimum scans.
    const MAX: Self;
}

impl Element for i32 {
    const MAX: Self = i32::MAX;
}

impl Element for i64 {
    const MAX: Self = i64::MAX;
}

impl Element for f32 {
    const MAX: Self = f32::MAX;
}

impl Element for f64 {
    const MAX: Self = f64::MAX;
}

fn smaller<T: Element>(min: T, value: &T) -> T {
    if *value < min {
        *value
    } else {
        min
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Element> {
    data: Array3<T>,
}

impl<T: Element> Tensor<T> {
    /// Allocate a `rows × cols × channels` tensor filled with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `channels == 0`.
    pub fn new(rows: usize, cols: usize, channels: usize, value: T) -> Self {
        assert!(channels >= 1, "Tensor needs at least one channel");
        Self {
            data: Array3::from_elem((rows, cols, channels), value),
        }
    }

    /// Allocate a single-channel `rows × cols` matrix filled with `value`.
    pub fn matrix(rows: usize, cols: usize, value: T) -> Self {
        Self::new(rows, cols, 1, value)
    }

    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    fn check(&self, row: usize, col: usize, channel: usize) -> [usize; 3] {
        let (rows, cols, channels) = self.data.dim();
        assert!(
            row < rows && col < cols && channel < channels,
            "Tensor index ({}, {}, {}) out of bounds ({}, {}, {})",
            row,
            col,
            channel,
            rows,
            cols,
            channels
        );
        [row, col, channel]
    }

    /// Channel 0 as a `rows × cols` view.
    fn plane(&self) -> ArrayView2<'_, T> {
        self.data.index_axis(Axis(2), 0)
    }

    fn check_row(&self, row: usize) {
        assert!(row < self.rows(), "Row {} out of bounds ({})", row, self.rows());
    }

    fn check_col(&self, col: usize) {
        assert!(col < self.cols(), "Column {} out of bounds ({})", col, self.cols());
    }

    /// Sum of row `row`.
    pub fn row_sum(&self, row: usize) -> T {
        self.check_row(row);
        self.plane().row(row).sum()
    }

    /// Sum of column `col`.
    pub fn col_sum(&self, col: usize) -> T {
        self.check_col(col);
        self.plane().column(col).sum()
    }

    /// Smallest element of row `row`, or `T::MAX` for an empty row.
    pub fn min_row(&self, row: usize) -> T {
        self.check_row(row);
        self.plane().row(row).fold(T::MAX, smaller)
    }

    /// Smallest element of column `col`, or `T::MAX` for an empty column.
    pub fn min_col(&self, col: usize) -> T {
        self.check_col(col);
        self.plane().column(col).fold(T::MAX, smaller)
    }

    /// Row index of the first minimum of column `col`.
    ///
    /// Returns `None` when no element is strictly below `T::MAX`.
    pub fn arg_min_col(&self, col: usize) -> Option<usize> {
        self.check_col(col);
        let plane = self.plane();
        let mut best = T::MAX;
        let mut arg = None;
        for (row, &value) in plane.column(col).iter().enumerate() {
            if value < best {
                best = value;
                arg = Some(row);
            }
        }
        arg
    }
}

impl<T: Element> Index<(usize, usize)> for Tensor<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.check(row, col, 0)]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Tensor<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let index = self.check(row, col, 0);
        &mut self.data[index]
    }
}

impl<T: Element> Index<(usize, usize, usize)> for Tensor<T> {
    type Output = T;

    fn index(&self, (row, col, channel): (usize, usize, usize)) -> &T {
        &self.data[self.check(row, col, channel)]
    }
}

impl<T: Element> IndexMut<(usize, usize, usize)> for Tensor<T> {
    fn index_mut(&mut self, (row, col, channel): (usize, usize, usize)) -> &mut T {
        let index = self.check(row, col, channel);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tensor<i32> {
        // 1 2 3
        // 4 0 6
        let mut m = Tensor::matrix(2, 3, 0);
        let values = [[1, 2, 3], [4, 0, 6]];
        for (r, row) in values.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                m[(r, c)] = v;
            }
        }
        m
    }

    #[test]
    fn test_sums() {
        let m = sample();
        assert_eq!(m.row_sum(0), 6);
        assert_eq!(m.row_sum(1), 10);
        assert_eq!(m.col_sum(0), 5);
        assert_eq!(m.col_sum(2), 9);
    }

    #[test]
    fn test_minima() {
        let m = sample();
        assert_eq!(m.min_row(0), 1);
        assert_eq!(m.min_row(1), 0);
        assert_eq!(m.min_col(1), 0);
        assert_eq!(m.arg_min_col(1), Some(1));
        assert_eq!(m.arg_min_col(0), Some(0));
    }

    #[test]
    fn test_arg_min_first_wins_on_tie() {
        let m: Tensor<f32> = Tensor::matrix(3, 1, 2.0);
        assert_eq!(m.arg_min_col(0), Some(0));
    }

    #[test]
    fn test_arg_min_none_when_saturated() {
        let m: Tensor<f32> = Tensor::matrix(3, 1, f32::MAX);
        assert_eq!(m.arg_min_col(0), None);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut t: Tensor<f64> = Tensor::new(2, 2, 3, 0.0);
        t[(1, 1, 2)] = 7.5;
        assert_eq!(t[(1, 1, 2)], 7.5);
        assert_eq!(t[(1, 1, 0)], 0.0);
        assert_eq!(t[(1, 1)], 0.0);
        assert_eq!(t.channels(), 3);
    }

    #[test]
    fn test_queries_ignore_other_channels() {
        let mut t: Tensor<i64> = Tensor::new(2, 2, 2, 1);
        t[(0, 0, 1)] = -9;
        t[(1, 0, 1)] = 100;
        assert_eq!(t.row_sum(0), 2);
        assert_eq!(t.col_sum(0), 2);
        assert_eq!(t.min_col(0), 1);
        assert_eq!(t.arg_min_col(0), Some(0));
    }

    #[test]
    fn test_dimensions() {
        let t: Tensor<f32> = Tensor::new(4, 5, 6, 0.0);
        assert_eq!((t.rows(), t.cols(), t.channels()), (4, 5, 6));
        let m: Tensor<f32> = Tensor::matrix(2, 7, 0.0);
        assert_eq!((m.rows(), m.cols(), m.channels()), (2, 7, 1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds() {
        let m = sample();
        let _ = m[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "Column 3 out of bounds")]
    fn test_column_query_out_of_bounds() {
        sample().col_sum(3);
    }

    #[test]
    #[should_panic(expected = "at least one channel")]
    fn test_zero_channels() {
        let _: Tensor<i64> = Tensor::new(1, 1, 0, 0);
    }
}
