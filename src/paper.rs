// src/paper.rs
use clap::ValueEnum;

/// 用紙サイズ (ポイント単位の幅 x 高さ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaperSize {
    #[default]
    Letter,
    A3,
    A4,
    Legal,
    Ledger,
}

impl PaperSize {
    #[must_use]
    pub const fn dimensions(self) -> (i32, i32) {
        match self {
            Self::Letter => (612, 792),
            Self::A3 => (594, 846),
            Self::A4 => (846, 1184),
            Self::Legal => (612, 1108),
            Self::Ledger => (792, 1224),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c2ps_engine::LayoutGeometry;

    #[test]
    fn test_every_paper_has_valid_geometry() {
        for paper in PaperSize::value_variants() {
            let (w, h) = paper.dimensions();
            assert!(LayoutGeometry::for_paper(w, h, false).is_ok(), "{paper:?}");
            assert!(LayoutGeometry::for_paper(w, h, true).is_ok(), "{paper:?} rotated");
        }
    }
}
