use crate::config::*;

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Circle overlap test with sizes interpreted as diameters:
/// centers closer than the sum of the two radii.
pub fn circles_overlap(x1: f64, y1: f64, size1: f64, x2: f64, y2: f64, size2: f64) -> bool {
    distance(x1, y1, x2, y2) < (size1 + size2) / 2.0
}

/// A player may consume another only with a strict 20% size advantage.
pub fn can_consume(attacker_size: f64, victim_size: f64) -> bool {
    attacker_size > victim_size * CONSUME_SIZE_RATIO
}

/// Clamp position to world bounds with a half-size margin
pub fn clamp_to_world(x: f64, y: f64, size: f64) -> (f64, f64) {
    let half = size / 2.0;
    let x = x.max(half).min(WORLD_SIZE - half);
    let y = y.max(half).min(WORLD_SIZE - half);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_threshold_is_half_the_size_sum() {
        // sizes 40 and 10 -> threshold 25
        assert!(circles_overlap(0.0, 0.0, 40.0, 24.9, 0.0, 10.0));
        assert!(!circles_overlap(0.0, 0.0, 40.0, 25.0, 0.0, 10.0));
    }

    #[test]
    fn consume_requires_strict_20_percent_advantage() {
        assert!(can_consume(100.0, 70.0)); // 100 > 84
        assert!(!can_consume(84.0, 70.0)); // not strictly greater
        assert!(!can_consume(70.0, 100.0));
    }

    #[test]
    fn clamp_keeps_half_size_inside_world() {
        let (x, y) = clamp_to_world(-50.0, WORLD_SIZE + 50.0, 40.0);
        assert_eq!(x, 20.0);
        assert_eq!(y, WORLD_SIZE - 20.0);

        let (x, y) = clamp_to_world(1500.0, 1500.0, 40.0);
        assert_eq!((x, y), (1500.0, 1500.0));
    }
}
