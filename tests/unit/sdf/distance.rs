use super::*;

fn brute_force(size: Size, seeds: &[bool]) -> Vec<f32> {
    let w = size.width as usize;
    let points: Vec<(f32, f32)> = seeds
        .iter()
        .enumerate()
        .filter(|(_, s)| **s)
        .map(|(i, _)| ((i % w) as f32, (i / w) as f32))
        .collect();
    (0..size.area())
        .map(|i| {
            let (x, y) = ((i % w) as f32, (i / w) as f32);
            points
                .iter()
                .map(|(px, py)| ((x - px).powi(2) + (y - py).powi(2)).sqrt())
                .fold(f32::INFINITY, f32::min)
        })
        .collect()
}

#[test]
fn single_seed_gives_euclidean_distances() {
    let size = Size::new(3, 3);
    let mut seeds = vec![false; 9];
    seeds[0] = true;
    let d = distance_to_seeds(size, &seeds).unwrap();
    assert_eq!(d[0], 0.0);
    assert_eq!(d[1], 1.0);
    assert_eq!(d[2], 2.0);
    assert!((d[4] - 2f32.sqrt()).abs() < 1e-6);
    assert!((d[8] - 8f32.sqrt()).abs() < 1e-6);
}

#[test]
fn matches_brute_force_on_scattered_seeds() {
    let size = Size::new(9, 7);
    let seeds: Vec<bool> = (0..size.area()).map(|i| (i * 7 + 3) % 11 == 0).collect();
    let fast = distance_to_seeds(size, &seeds).unwrap();
    let slow = brute_force(size, &seeds);
    for (a, b) in fast.iter().zip(&slow) {
        assert!((a - b).abs() < 1e-4, "{a} vs {b}");
    }
}

#[test]
fn columns_without_seeds_are_resolved_through_rows() {
    let size = Size::new(6, 2);
    let mut seeds = vec![false; 12];
    seeds[5] = true;
    let fast = distance_to_seeds(size, &seeds).unwrap();
    let slow = brute_force(size, &seeds);
    for (a, b) in fast.iter().zip(&slow) {
        assert!((a - b).abs() < 1e-4);
    }
}

#[test]
fn no_seed_is_degenerate() {
    let err = distance_to_seeds(Size::new(2, 2), &[false; 4]).unwrap_err();
    assert!(matches!(err, GlyphError::DegenerateField(_)));
}

#[test]
fn wrong_buffer_length_is_rejected() {
    assert!(distance_to_seeds(Size::new(2, 2), &[true; 3]).is_err());
}

#[test]
fn mask_helpers_measure_opposite_sides() {
    // Foreground block in the left half of a 4x1 strip.
    let mask = Mask::from_fn(Size::new(4, 1), |x, _| x < 2);
    assert_eq!(distance_to_background(&mask).unwrap(), vec![2.0, 1.0, 0.0, 0.0]);
    assert_eq!(distance_to_foreground(&mask).unwrap(), vec![0.0, 0.0, 1.0, 2.0]);
}
