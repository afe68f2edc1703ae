use std::fmt;
use std::sync::Arc;

use crate::math::interp;

/// An element a membership function can be evaluated on.
///
/// Numeric elements expose their crisp value so continuous shapes can be
/// evaluated on them; labels (strings, chars) only ever match discrete entries.
pub trait Element: PartialEq + Clone + fmt::Debug {
    fn crisp(&self) -> Option<f64> {
        None
    }
}

macro_rules! numeric_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn crisp(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_element!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Element for String {}
impl Element for &str {}
impl Element for char {}

/// A membership function μ(x) ∈ [0, 1].
///
/// Evaluation always clamps into the unit interval, so a sloppy discrete table
/// or custom closure can never leak out-of-range degrees into inference.
#[derive(Clone)]
pub enum MembershipFunction<K = f64> {
    /// Finite table of elements; anything not listed has degree 0.
    Discrete(Vec<(K, f64)>),
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// Linear interpolation through `(x, μ)` points sorted by x, flat outside them.
    Piecewise(Vec<(f64, f64)>),
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
    Complement(Box<MembershipFunction<K>>),
}

impl<K: Element> MembershipFunction<K> {
    /// Expects `a <= b <= c`.
    pub fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    /// Expects `a <= b <= c <= d`.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    pub fn discrete(degrees: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self::Discrete(degrees.into_iter().collect())
    }

    pub fn piecewise(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut points: Vec<_> = points.into_iter().collect();

        points.sort_by(|(x1, _), (x2, _)| x1.total_cmp(x2));

        Self::Piecewise(points)
    }

    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn mu(&self, x: &K) -> f64 {
        let degree = match self {
            Self::Discrete(degrees) => degrees
                .iter()
                .find(|(element, _)| element == x)
                .map_or(0., |(_, degree)| *degree),
            Self::Complement(inner) => 1. - inner.mu(x),
            continuous => match x.crisp() {
                Some(x) => continuous.eval_crisp(x),
                None => 0.,
            },
        };

        clamp_unit(degree)
    }

    fn eval_crisp(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => triangular_mu(x, a, b, c),
            Self::Trapezoidal { a, b, c, d } => trapezoidal_mu(x, a, b, c, d),
            Self::Piecewise(ref points) => interp(x, points),
            Self::Custom(ref f) => f(x),
            Self::Discrete(_) | Self::Complement(_) => 0.,
        }
    }

    pub fn complement(&self) -> Self {
        match self {
            Self::Discrete(degrees) => Self::Discrete(
                degrees
                    .iter()
                    .map(|(element, degree)| (element.clone(), 1. - clamp_unit(*degree)))
                    .collect(),
            ),
            Self::Complement(inner) => (**inner).clone(),
            other => Self::Complement(Box::new(other.clone())),
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete(_))
    }

    /// Elements of a discrete table, in insertion order. Empty for continuous shapes.
    pub fn elements(&self) -> impl Iterator<Item = &K> + '_ {
        self.table().iter().map(|(element, _)| element)
    }

    /// Degrees of a discrete table, in insertion order. Empty for continuous shapes.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.table().iter().map(|(_, degree)| clamp_unit(*degree))
    }

    fn table(&self) -> &[(K, f64)] {
        match self {
            Self::Discrete(degrees) => degrees,
            _ => &[],
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for MembershipFunction<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete(degrees) => f.debug_tuple("Discrete").field(degrees).finish(),
            Self::Triangular { a, b, c } => f
                .debug_struct("Triangular")
                .field("a", a)
                .field("b", b)
                .field("c", c)
                .finish(),
            Self::Trapezoidal { a, b, c, d } => f
                .debug_struct("Trapezoidal")
                .field("a", a)
                .field("b", b)
                .field("c", c)
                .field("d", d)
                .finish(),
            Self::Piecewise(points) => f.debug_tuple("Piecewise").field(points).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Complement(inner) => f.debug_tuple("Complement").field(inner).finish(),
        }
    }
}

/// Shorthand for [`MembershipFunction::triangular`].
pub fn triangular(a: f64, b: f64, c: f64) -> MembershipFunction {
    MembershipFunction::triangular(a, b, c)
}

/// Shorthand for [`MembershipFunction::trapezoidal`].
pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> MembershipFunction {
    MembershipFunction::trapezoidal(a, b, c, d)
}

pub(crate) fn clamp_unit(degree: f64) -> f64 {
    if degree.is_nan() {
        0.
    } else {
        degree.clamp(0., 1.)
    }
}

// Boundaries are half-open on the left: (a, b] rises, (b, c] falls.
fn triangular_mu(x: f64, a: f64, b: f64, c: f64) -> f64 {
    // A collapsed rising edge is a step at b, peak included. The `x <= a`
    // branch alone would give 0 at the peak.
    if a == b && x == b {
        return 1.;
    }

    if x <= a {
        0.
    } else if x <= b {
        (x - a) / (b - a)
    } else if x <= c {
        (c - x) / (c - b)
    } else {
        0.
    }
}

fn trapezoidal_mu(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    // Same step as triangular_mu, so a collapsed rising edge starts the plateau
    if a == b && x == b {
        return 1.;
    }

    if x <= a {
        0.
    } else if x <= b {
        (x - a) / (b - a)
    } else if x <= c {
        1.
    } else if x <= d {
        (d - x) / (d - c)
    } else {
        0.
    }
}
