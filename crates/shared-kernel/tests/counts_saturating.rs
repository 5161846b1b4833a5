// crates/shared-kernel/tests/counts_saturating.rs
use c2ps_shared_kernel::{ColumnCount, LineCount, PageCount};

#[test]
fn linecount_saturating_add_and_sub() {
    let max = LineCount::from(usize::MAX);
    assert_eq!(max.saturating_add(1), max);
    assert_eq!(LineCount::zero().saturating_sub(5), LineCount::zero());
}

#[test]
fn pagecount_saturating_add_and_sub() {
    let max = PageCount::from(usize::MAX);
    assert_eq!(max.saturating_add(42), max);
    assert_eq!(PageCount::from(3).saturating_sub(5), PageCount::ZERO);
}

#[test]
fn columncount_saturating_add() {
    let max = ColumnCount::from(usize::MAX - 1);
    assert_eq!(max.saturating_add(usize::MAX), ColumnCount::from(usize::MAX));
}
