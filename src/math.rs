use num::Float;

/// Similar to numpy.interp: linear interpolation through `coords`, which must be
/// sorted by x. Values outside the coordinate range take the nearest endpoint's y.
pub(crate) fn interp<F: Float>(x: F, coords: &[(F, F)]) -> F {
    let (Some(&(x_first, y_first)), Some(&(x_last, y_last))) = (coords.first(), coords.last()) else {
        return F::zero();
    };

    // Base cases
    if x <= x_first {
        return y_first;
    }
    if x >= x_last {
        return y_last;
    }

    for window in coords.windows(2) {
        let (x1, y1) = window[0];
        let (x2, y2) = window[1];

        // Actual interpolation
        if x1 <= x && x <= x2 {
            if x2 == x1 {
                return y2;
            }

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    // Only reachable for NaN input
    F::zero()
}

/// Dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F> {
    data: Vec<F>,
    shape: (usize, usize),
}

impl<F: Float> Matrix<F> {
    /// Returns `None` when `data.len()` disagrees with `shape`.
    pub fn new(data: Vec<F>, shape: (usize, usize)) -> Option<Self> {
        if data.len() != shape.0 * shape.1 {
            return None;
        }

        Some(Self { data, shape })
    }

    pub fn zeros(shape: (usize, usize)) -> Self {
        Self {
            data: vec![F::zero(); shape.0 * shape.1],
            shape,
        }
    }

    /// Builds a matrix from nested rows, each of which must be `n_cols` long.
    pub fn from_rows<R: AsRef<[F]>>(rows: &[R], n_cols: usize) -> Option<Self> {
        let mut data = Vec::with_capacity(rows.len() * n_cols);

        for row in rows {
            let row = row.as_ref();

            if row.len() != n_cols {
                return None;
            }

            data.extend_from_slice(row);
        }

        Some(Self {
            data,
            shape: (rows.len(), n_cols),
        })
    }

    /// `m[i][j] = min(u[i], v[j])`
    pub fn outer_min(u: &[F], v: &[F]) -> Self {
        let data = u
            .iter()
            .flat_map(|&ui| v.iter().map(move |&vj| F::min(ui, vj)))
            .collect();

        Self {
            data,
            shape: (u.len(), v.len()),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn get(&self, row: usize, col: usize) -> Option<F> {
        if row >= self.shape.0 || col >= self.shape.1 {
            return None;
        }

        Some(self.data[row * self.shape.1 + col])
    }

    pub fn row(&self, row: usize) -> &[F] {
        let start = row * self.shape.1;

        &self.data[start..start + self.shape.1]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        // chunks panics on zero
        self.data.chunks(self.shape.1.max(1)).take(self.shape.0)
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn map(&self, f: impl Fn(F) -> F) -> Self {
        Self {
            data: self.data.iter().copied().map(f).collect(),
            shape: self.shape,
        }
    }

    pub fn transpose(&self) -> Self {
        let (n_rows, n_cols) = self.shape;
        let mut data = Vec::with_capacity(self.data.len());

        for j in 0..n_cols {
            for i in 0..n_rows {
                data.push(self.data[i * n_cols + j]);
            }
        }

        Self {
            data,
            shape: (n_cols, n_rows),
        }
    }

    /// Max-min composition. `None` when the inner dimensions differ.
    pub fn max_min(&self, rhs: &Self) -> Option<Self> {
        let (n, p) = self.shape;
        let (p2, m) = rhs.shape;

        if p != p2 {
            return None;
        }

        let mut data = Vec::with_capacity(n * m);

        for i in 0..n {
            let lhs_row = self.row(i);

            for j in 0..m {
                let val = (0..p)
                    .map(|k| F::min(lhs_row[k], rhs.data[k * m + j]))
                    .fold(F::zero(), F::max);

                data.push(val);
            }
        }

        Some(Self { data, shape: (n, m) })
    }
}

/// Rounds half away from zero to `decimals` places. Past the precision of an
/// `f64` the value is returned as is.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    const MAX_DECIMALS: u32 = f64::DIGITS;

    if decimals > MAX_DECIMALS {
        return value;
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;

    if !scaled.is_finite() {
        return value;
    }

    scaled.round() / factor
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];

    assert_eq!(
        x.map(|x| interp(x, &coords)),
        [3., 3., 2.5, 0.5599999999999996, 0.]
    );

    let x = [2.5, -1., 7.5];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];

    assert_eq!(x.map(|x| interp(x, &coords)), [4., 0., 2.]);
}

#[test]
fn test_interp_degenerate_coords() {
    assert_eq!(interp(4., &[] as &[(f64, f64)]), 0.);
    assert_eq!(interp(4., &[(4., 0.7)]), 0.7);
    assert_eq!(interp(1., &[(1., 0.), (1., 1.), (2., 1.)]), 0.);
    assert_eq!(interp(1.5, &[(1., 0.), (1., 1.), (2., 1.)]), 1.);
}

#[test]
fn test_matrix_transpose_and_compose() {
    let r = Matrix::from_rows(&[[0.2, 0.8, 0.5], [1.0, 0.1, 0.4]], 3).unwrap();
    let t = r.transpose();

    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.row(0), &[0.2, 1.0]);
    assert_eq!(t.transpose(), r);

    let s = Matrix::from_rows(&[[0.9, 0.3], [0.6, 0.7], [0.2, 1.0]], 2).unwrap();
    let rs = r.max_min(&s).unwrap();

    // row 0: max(min(.2,.9), min(.8,.6), min(.5,.2)) = .6 ; max(min(.2,.3), min(.8,.7), min(.5,1)) = .7
    assert_eq!(rs.row(0), &[0.6, 0.7]);
    assert_eq!(rs.row(1), &[0.9, 0.4]);
    assert!(r.max_min(&r).is_none());
}

#[test]
fn test_matrix_shape_checks() {
    assert!(Matrix::new(vec![0.1f64, 0.2, 0.3], (2, 2)).is_none());
    assert!(Matrix::from_rows(&[vec![0.1f64, 0.2], vec![0.3]], 2).is_none());
    assert_eq!(Matrix::<f64>::zeros((0, 3)).rows().count(), 0);

    let m = Matrix::outer_min(&[0.3, 1.0], &[0.5, 0.2, 0.9]);

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row(0), &[0.3, 0.2, 0.3]);
    assert_eq!(m.row(1), &[0.5, 0.2, 0.9]);
    assert_eq!(m.get(1, 2), Some(0.9));
    assert_eq!(m.get(2, 0), None);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.456, 2), 0.46);
    assert_eq!(round_to(0.3, 0), 0.);
    assert_eq!(round_to(0.125, 1), 0.1);
    assert_eq!(round_to(0.123456789, 400), 0.123456789);
    assert_eq!(round_to(0.5, u32::MAX), 0.5);
    assert_eq!(round_to(f64::MAX, 15), f64::MAX);
}
