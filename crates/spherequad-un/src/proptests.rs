//! Property-based tests for scheme evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use spherequad_measure::sphere_measure;

    use crate::{Sphere, UnScheme};

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn cross_polytope(n: usize) -> UnScheme {
        let mut points = Vec::with_capacity(2 * n);
        for i in 0..n {
            for sign in [1.0, -1.0] {
                let mut p = vec![0.0; n];
                p[i] = sign;
                points.push(p);
            }
        }
        UnScheme::new("cross polytope", n as u32, vec![1.0 / (2 * n) as f64; 2 * n], points, 3, None)
            .unwrap()
    }

    fn sphere() -> impl Strategy<Value = Sphere> {
        (1usize..6).prop_flat_map(|n| {
            (proptest::collection::vec(-10.0f64..10.0, n), 0.1f64..5.0)
                .prop_map(|(center, radius)| Sphere::new(center, radius))
        })
    }

    proptest! {
        #[test]
        fn constant_integrates_to_measure(s in sphere()) {
            let scheme = cross_polytope(s.dim());
            let value = scheme.integrate(|axes| vec![1.0; axes[0].len()], &s.center, s.radius).unwrap();
            let measure = sphere_measure(scheme.dim() - 1, s.radius);
            prop_assert!((value - measure).abs() <= 1e-12 * measure);
        }

        #[test]
        fn linear_integrates_to_center_times_measure(s in sphere(), axis in 0usize..6) {
            let axis = axis % s.dim();
            let scheme = cross_polytope(s.dim());
            let value = scheme.integrate(|axes| axes[axis].clone(), &s.center, s.radius).unwrap();
            let measure = sphere_measure(scheme.dim() - 1, s.radius);
            let expected = s.center[axis] * measure;
            let scale = (s.center[axis].abs() + s.radius) * measure;
            prop_assert!((value - expected).abs() <= 1e-13 * scale);
        }

        #[test]
        fn evaluation_points_lie_on_sphere(s in sphere()) {
            let scheme = cross_polytope(s.dim());
            let axes = scheme.evaluation_points(&s.center, s.radius).unwrap();
            for j in 0..scheme.len() {
                let dist2: f64 = axes
                    .iter()
                    .zip(&s.center)
                    .map(|(axis, c)| (axis[j] - c).powi(2))
                    .sum();
                prop_assert!((dist2.sqrt() - s.radius).abs() <= 1e-12 * s.radius.max(1.0));
            }
        }
    }
}
