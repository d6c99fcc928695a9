//! Enumeration of monomial exponent vectors.

/// All exponent vectors of length `dim` with total degree exactly `degree`.
///
/// Vectors are produced in descending lexicographic order, e.g. for
/// `dim = 2, degree = 2`: `[2, 0], [1, 1], [0, 2]`. There are
/// `C(degree + dim - 1, dim - 1)` of them.
#[must_use]
pub fn monomial_exponents(dim: usize, degree: u32) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    if dim == 0 {
        if degree == 0 {
            out.push(Vec::new());
        }
        return out;
    }

    let mut current = vec![0; dim];
    fill(&mut current, 0, degree, &mut out);
    out
}

/// All exponent vectors of length `dim` with total degree at most `max_degree`,
/// grouped by increasing degree.
#[must_use]
pub fn monomial_exponents_up_to(dim: usize, max_degree: u32) -> Vec<Vec<u32>> {
    (0..=max_degree)
        .flat_map(|d| monomial_exponents(dim, d))
        .collect()
}

fn fill(current: &mut [u32], axis: usize, remaining: u32, out: &mut Vec<Vec<u32>>) {
    if axis + 1 == current.len() {
        current[axis] = remaining;
        out.push(current.to_vec());
        return;
    }
    for e in (0..=remaining).rev() {
        current[axis] = e;
        fill(current, axis + 1, remaining - e, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        assert_eq!(
            monomial_exponents(2, 2),
            vec![vec![2, 0], vec![1, 1], vec![0, 2]]
        );
    }

    #[test]
    fn test_counts() {
        // C(d + n - 1, n - 1)
        assert_eq!(monomial_exponents(3, 4).len(), 15);
        assert_eq!(monomial_exponents(4, 3).len(), 20);
        assert_eq!(monomial_exponents(1, 7), vec![vec![7]]);
        assert_eq!(monomial_exponents_up_to(3, 2).len(), 1 + 3 + 6);
    }

    #[test]
    fn test_degrees() {
        for k in monomial_exponents(4, 5) {
            assert_eq!(k.iter().sum::<u32>(), 5);
        }
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(monomial_exponents(0, 0), vec![Vec::<u32>::new()]);
        assert!(monomial_exponents(0, 3).is_empty());
    }
}
