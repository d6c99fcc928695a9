//! Prints closed-form sphere measures and checks a small rule against them.

use spherequad::prelude::*;

fn main() {
    println!("Unit sphere measures");
    for n in 0..8 {
        let exact = unit_sphere_measure(n, Mode::Exact);
        println!("  |S^{n}| = {exact} ≈ {:.12}", exact.to_f64());
    }

    println!("\nMonomials over the unit 2-sphere");
    for k in [[2, 0, 0], [4, 0, 0], [2, 2, 0], [2, 2, 2], [6, 0, 0]] {
        match integrate_monomial_exact(&k) {
            Ok(v) => println!("  ∫ x^{k:?} dσ = {v}"),
            Err(e) => println!("  ∫ x^{k:?} dσ failed: {e}"),
        }
    }

    // The octahedron vertices ±eᵢ integrate cubics exactly.
    let mut points = Vec::new();
    for i in 0..3 {
        for sign in [1.0, -1.0] {
            let mut p = vec![0.0; 3];
            p[i] = sign;
            points.push(p);
        }
    }
    let scheme = match UnScheme::new("octahedron", 3, vec![1.0 / 6.0; 6], points, 3, None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid scheme: {e}");
            return;
        }
    };

    println!("\n{scheme}");
    println!("  declared degree reached: {}", scheme.check_degree());
    println!("  exactness degree (≤ 6): {:?}", scheme.exactness_degree(6));

    let f = |axes: &[Vec<f64>]| -> Vec<f64> { axes[2].iter().map(|z| z * z).collect() };
    for r in [0.5, 1.0, 2.0] {
        match scheme.integrate(f, &[0.0, 0.0, 0.0], r) {
            Ok(v) => println!("  ∫ z² over radius {r}: {v:.12}"),
            Err(e) => println!("  radius {r}: {e}"),
        }
    }
}
