use super::*;

#[test]
fn px_conversions_saturate() {
    assert_eq!(to_px(12), 12);
    assert_eq!(to_px(u32::MAX), i32::MAX);
    assert_eq!(to_extent(-3), 0);
    assert_eq!(to_extent(40), 40);
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_below_stays_in_range() {
    let mut rng = Rng64::new(42);
    for bound in [1usize, 2, 3, 10, 30] {
        for _ in 0..64 {
            assert!(rng.next_below(bound) < bound);
        }
    }
    assert_eq!(rng.next_below(0), 0);
}
