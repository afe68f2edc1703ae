use std::iter::Sum;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::math::interp;

/// Method for defuzzificating the aggregated membership function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationOp {
    /// Center of gravity over the samples: Σ(u·μ) / Σμ
    #[default]
    Centroid,
    /// Center of gravity of the piecewise-linear area under the curve
    AreaCentroid,
    /// Bisector of Area
    Bisector,
    /// Mean of the values for which the membership function is maximum
    MeanOfMaximum,
    /// Largest value for which the membership function is maximum
    LargestOfMaximum,
    /// Smallest value for which the membership function is maximum
    SmallestOfMaximum,
}

impl DefuzzificationOp {
    /// Returns `None` when there is nothing to defuzzify: no samples, mismatched
    /// lengths or zero total membership.
    pub fn call<F: Float + Sum>(self, universe: &[F], membership: &[F]) -> Option<F> {
        if universe.is_empty() || universe.len() != membership.len() {
            return None;
        }

        let total = membership.iter().copied().sum::<F>();

        if total <= F::zero() {
            return None;
        }

        if let [only] = universe {
            return Some(*only);
        }

        match self {
            Self::Centroid => {
                let num = universe
                    .iter()
                    .zip(membership)
                    .map(|(&u, &m)| u * m)
                    .sum::<F>();

                Some(num / total)
            },
            Self::AreaCentroid => area_centroid(universe, membership),
            Self::Bisector => bisector(universe, membership),
            Self::MeanOfMaximum => {
                let (len, sum) = maxima(universe, membership)
                    .fold((0usize, F::zero()), |(len, sum), u| (len + 1, sum + u));

                Some(sum / F::from(len)?)
            },
            Self::LargestOfMaximum => maxima(universe, membership).reduce(F::max),
            Self::SmallestOfMaximum => maxima(universe, membership).reduce(F::min),
        }
    }
}

fn maxima<'a, F: Float>(universe: &'a [F], membership: &'a [F]) -> impl Iterator<Item = F> + 'a {
    let maximum = membership.iter().copied().fold(F::neg_infinity(), F::max);

    universe
        .iter()
        .zip(membership)
        .filter_map(move |(&u, &m)| if m == maximum { Some(u) } else { None })
}

fn area_centroid<F: Float + Sum>(universe: &[F], membership: &[F]) -> Option<F> {
    let two = F::one() + F::one();
    let three = two + F::one();
    let mut den = F::zero();
    let mut num = F::zero();

    for i in 0..universe.len() - 1 {
        let base = universe[i + 1] - universe[i];
        let area_rect = F::min(membership[i], membership[i + 1]) * base;
        let center_rect = universe[i] + base / two;
        let (area_tria, center_tria) = if membership[i + 1] == membership[i] {
            (F::zero(), F::zero())
        } else if membership[i + 1] > membership[i] {
            (
                base * F::abs(membership[i + 1] - membership[i]) / two,
                universe[i] + two / three * base,
            )
        } else {
            (
                base * F::abs(membership[i + 1] - membership[i]) / two,
                universe[i] + F::one() / three * base,
            )
        };

        den = den + area_rect + area_tria;
        num = num + area_rect * center_rect + area_tria * center_tria;
    }

    if den == F::zero() {
        return None;
    }

    Some(num / den)
}

fn bisector<F: Float + Sum>(universe: &[F], membership: &[F]) -> Option<F> {
    let two = F::one() + F::one();
    let areas: Vec<F> = universe
        .windows(2)
        .zip(membership.windows(2))
        .map(|(u, m)| (m[0] + m[1]) * (u[1] - u[0]) / two)
        .collect();
    let target = areas.iter().copied().sum::<F>() / two;

    if target == F::zero() {
        return None;
    }

    let mut cum_area = F::zero();

    for (i, &area) in areas.iter().enumerate() {
        cum_area = cum_area + area;

        if cum_area >= target {
            let coords = [(cum_area - area, universe[i]), (cum_area, universe[i + 1])];

            return Some(interp(target, &coords));
        }
    }

    universe.last().copied()
}
