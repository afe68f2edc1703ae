use num::Float;

/// Evenly spaced samples over a closed interval, like `numpy.linspace`.
#[derive(Clone, Debug)]
pub struct Linspace<F = f64> {
    start: F,
    end: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = F::from(n - 1).unwrap_or_else(F::one);
            (max - min) / num_steps
        } else {
            F::zero()
        };
        Linspace {
            start: min,
            end: max,
            step,
            index: 0,
            len: n,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;

            // numpy pins the last sample to the endpoint to avoid drift
            if self.len > 1 && i == self.len - 1 {
                return Some(self.end);
            }

            Some(self.start + self.step * F::from(i).unwrap_or_else(F::zero))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace_endpoints() {
    let xs: Vec<f64> = Linspace::new(0., 1., 5).collect();

    assert_eq!(xs, vec![0., 0.25, 0.5, 0.75, 1.]);

    let xs: Vec<f64> = Linspace::new(0., 0.3, 4).collect();

    assert_eq!(xs.len(), 4);
    assert_eq!(xs[3], 0.3);
}

#[test]
fn test_linspace_single_point() {
    let xs: Vec<f32> = Linspace::new(2., 7., 1).collect();

    assert_eq!(xs, vec![2.]);
    assert_eq!(Linspace::new(0., 1., 0).count(), 0);
}
