use std::fmt;

use crate::error::{FuzzyError, Result};
use crate::math::Matrix;
use crate::membership::{clamp_unit, Element};
use crate::set::FuzzySet;

/// A fuzzy relation between two discrete universes, stored as a
/// `rows × columns` matrix of degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyRelation<R = String, C = R> {
    name: String,
    rows: Vec<R>,
    columns: Vec<C>,
    matrix: Matrix<f64>,
}

impl<R: Element, C: Element> FuzzyRelation<R, C> {
    /// `matrix` must have one entry per row label, each as long as `columns`.
    pub fn new<M: AsRef<[f64]>>(
        name: impl Into<String>,
        rows: Vec<R>,
        columns: Vec<C>,
        matrix: &[M],
    ) -> Result<Self> {
        let name = name.into();

        if matrix.len() != rows.len() {
            return Err(FuzzyError::incompatible(
                "FuzzyRelation::new",
                (rows.len(), columns.len()),
                (matrix.len(), columns.len()),
            ));
        }

        let Some(matrix) = Matrix::from_rows(matrix, columns.len()) else {
            let found = matrix.iter().map(|row| row.as_ref().len()).collect::<Vec<_>>();

            return Err(FuzzyError::incompatible(
                "FuzzyRelation::new",
                format!("{} columns per row", columns.len()),
                found,
            ));
        };

        Self::from_matrix(name, rows, columns, matrix)
    }

    /// Cells are clamped into `[0, 1]`; NaN becomes 0.
    pub fn from_matrix(
        name: impl Into<String>,
        rows: Vec<R>,
        columns: Vec<C>,
        matrix: Matrix<f64>,
    ) -> Result<Self> {
        if matrix.shape() != (rows.len(), columns.len()) {
            return Err(FuzzyError::incompatible(
                "FuzzyRelation::from_matrix",
                (rows.len(), columns.len()),
                matrix.shape(),
            ));
        }

        Ok(Self {
            name: name.into(),
            rows,
            columns,
            matrix: matrix.map(clamp_unit),
        })
    }

    /// Production relation `A → B`: `R[i][j] = min(μ_A(i), μ_B(j))` over the
    /// elements of two discrete sets.
    pub fn from_sets(a: &FuzzySet<R>, b: &FuzzySet<C>) -> Self {
        let rows: Vec<R> = a.elements().cloned().collect();
        let columns: Vec<C> = b.elements().cloned().collect();
        let mu_a: Vec<f64> = a.values().collect();
        let mu_b: Vec<f64> = b.values().collect();

        Self {
            name: format!("{} → {}", a.name(), b.name()),
            rows,
            columns,
            matrix: Matrix::outer_min(&mu_a, &mu_b),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[C] {
        &self.columns
    }

    pub fn matrix(&self) -> &Matrix<f64> {
        &self.matrix
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.matrix.get(row, column)
    }

    /// Degree between two labels; 0 when either label is unknown.
    pub fn degree(&self, row: &R, column: &C) -> f64 {
        let i = self.rows.iter().position(|r| r == row);
        let j = self.columns.iter().position(|c| c == column);

        match (i, j) {
            (Some(i), Some(j)) => self.matrix.get(i, j).unwrap_or(0.),
            _ => 0.,
        }
    }

    /// Max-min composition `self ∘ other`. The column labels of `self` must
    /// equal the row labels of `other`, in order.
    pub fn compose_max_min<D: Element>(&self, other: &FuzzyRelation<C, D>) -> Result<FuzzyRelation<R, D>> {
        if self.columns != other.rows {
            return Err(FuzzyError::incompatible("compose_max_min", &self.columns, &other.rows));
        }

        let matrix = self.matrix.max_min(&other.matrix).ok_or_else(|| {
            FuzzyError::incompatible("compose_max_min", self.matrix.shape(), other.matrix.shape())
        })?;

        Ok(FuzzyRelation {
            name: format!("({}) ∘ ({})", self.name, other.name),
            rows: self.rows.clone(),
            columns: other.columns.clone(),
            matrix,
        })
    }

    /// Swaps premise and conclusion.
    pub fn transpose(&self) -> FuzzyRelation<C, R> {
        FuzzyRelation {
            name: format!("transposed: {}", self.name),
            rows: self.columns.clone(),
            columns: self.rows.clone(),
            matrix: self.matrix.transpose(),
        }
    }

    pub fn complement(&self) -> Self {
        Self {
            name: format!("complement: {}", self.name),
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            matrix: self.matrix.map(|degree| 1. - degree),
        }
    }
}

impl<R, C> fmt::Display for FuzzyRelation<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FuzzyRelation: {} ({}x{})",
            self.name,
            self.rows.len(),
            self.columns.len()
        )
    }
}
