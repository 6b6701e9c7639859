//! Comparison against published Sobol sequence values.
//!
//! The expected values below are the unscrambled Joe-Kuo sequence
//! prefixes as printed by the reference Algorithm 659 implementations.
//! Every value is an exact binary fraction at scale 31, so most
//! comparisons can be exact.

use approx::assert_relative_eq;
use gsa_directions::JoeKuoD6;
use gsa_sampling::sobol::{SobolConfig, SobolSequence};

fn sample_matrix(n_samples: usize, n_dimensions: usize) -> gsa_sampling::SampleMatrix {
    let config = SobolConfig::builder()
        .n_samples(n_samples)
        .n_dimensions(n_dimensions)
        .build()
        .unwrap();
    SobolSequence::new(config, &JoeKuoD6).unwrap().sample_all()
}

#[test]
fn test_two_dimensional_sixteen_point_prefix() {
    let expected: [[f64; 2]; 16] = [
        [0.0, 0.0],
        [0.5, 0.5],
        [0.75, 0.25],
        [0.25, 0.75],
        [0.375, 0.375],
        [0.875, 0.875],
        [0.625, 0.125],
        [0.125, 0.625],
        [0.1875, 0.3125],
        [0.6875, 0.8125],
        [0.9375, 0.0625],
        [0.4375, 0.5625],
        [0.3125, 0.1875],
        [0.8125, 0.6875],
        [0.5625, 0.4375],
        [0.0625, 0.9375],
    ];

    let matrix = sample_matrix(16, 2);
    for (j, point) in expected.iter().enumerate() {
        assert_eq!(matrix.row(j), point, "sample {} differs", j);
    }
}

#[test]
fn test_four_dimensional_eight_point_prefix() {
    let expected: [[f64; 4]; 8] = [
        [0.0, 0.0, 0.0, 0.0],
        [0.5, 0.5, 0.5, 0.5],
        [0.75, 0.25, 0.25, 0.25],
        [0.25, 0.75, 0.75, 0.75],
        [0.375, 0.375, 0.625, 0.875],
        [0.875, 0.875, 0.125, 0.375],
        [0.625, 0.125, 0.875, 0.625],
        [0.125, 0.625, 0.375, 0.125],
    ];

    let matrix = sample_matrix(8, 4);
    for (j, point) in expected.iter().enumerate() {
        for (dim, &value) in point.iter().enumerate() {
            assert_relative_eq!(matrix.get(j, dim), value);
        }
    }
}

#[test]
fn test_reduced_scale_reproduces_same_prefix() {
    // The leading samples only exercise the top index bits, so a smaller
    // scale yields the same fractions.
    let config = SobolConfig::builder()
        .n_samples(16)
        .n_dimensions(2)
        .scale(16)
        .build()
        .unwrap();
    let narrow = SobolSequence::new(config, &JoeKuoD6).unwrap().sample_all();
    let wide = sample_matrix(16, 2);

    assert_eq!(narrow.as_slice(), wide.as_slice());
}
