// crates/shared-kernel/tests/counts_eq.rs
use c2ps_shared_kernel::{LineCount, PageCount};

#[test]
fn eq_with_usize_both_sides() {
    let count = LineCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}

#[test]
fn zero_and_default_agree() {
    assert_eq!(PageCount::default(), PageCount::ZERO);
    assert!(PageCount::zero().is_zero());
    assert!(!PageCount::from(1).is_zero());
}
