// crates/engine/src/config.rs
use derive_builder::Builder;

use crate::error::{EngineError, Result};

/// 許される N-up / 両面印刷のページグループ
pub const PAGE_GROUPS: [usize; 4] = [1, 2, 4, 8];

/// 用紙寸法から決まる固定のレイアウト (単位はポイント)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGeometry {
    width: i32,
    height: i32,
    top: i32,
    topline: i32,
    right_margin: i32,
    wrap_col: usize,
}

impl LayoutGeometry {
    pub const LEFT_MARGIN: i32 = 60;
    pub const BOTTOM: i32 = 72;
    /// 下端の罫線と下部テキストの高さ
    pub const BOTTOM_LINE: i32 = Self::BOTTOM - 24;
    pub const LINE_HEIGHT: i32 = 12;
    pub const TAB_WIDTH: usize = 8;

    /// # Errors
    /// 寸法が正でない場合や、本文を置く余地がない場合
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidGeometry(format!(
                "paper size must be positive, got {width}x{height}"
            )));
        }
        let geometry = Self::compute(width, height);
        if geometry.top <= Self::BOTTOM {
            return Err(EngineError::InvalidGeometry(format!(
                "page height {height} leaves no room for text"
            )));
        }
        if geometry.wrap_col < Self::TAB_WIDTH {
            return Err(EngineError::InvalidGeometry(format!(
                "page width {width} leaves no room for text"
            )));
        }
        Ok(geometry)
    }

    /// 横置きなら幅と高さを入れ替えて作る
    ///
    /// # Errors
    /// [`LayoutGeometry::new`] と同じ
    pub fn for_paper(width: i32, height: i32, rotate: bool) -> Result<Self> {
        if rotate {
            Self::new(height, width)
        } else {
            Self::new(width, height)
        }
    }

    const fn compute(width: i32, height: i32) -> Self {
        let top = height - 10 - 90;
        let right_margin = width - 36;
        let span = right_margin - Self::LEFT_MARGIN;
        let wrap_col = if span > 0 {
            ((span * 100 / 465) / 8 * 8) as usize
        } else {
            0
        };
        Self {
            width,
            height,
            top,
            topline: top + 24,
            right_margin,
            wrap_col,
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// 本文の 1 行目の y 座標
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// ヘッダ (ファイル名・区切り線) の基準 y 座標
    #[must_use]
    pub const fn topline(&self) -> i32 {
        self.topline
    }

    #[must_use]
    pub const fn right_margin(&self) -> i32 {
        self.right_margin
    }

    /// プレーンテキストを折り返す桁
    #[must_use]
    pub const fn wrap_col(&self) -> usize {
        self.wrap_col
    }
}

impl Default for LayoutGeometry {
    /// US Letter (612x792)
    fn default() -> Self {
        Self::compute(612, 792)
    }
}

/// # Errors
/// `group` が 1, 2, 4, 8 のいずれでもない場合
pub fn validate_page_group(group: usize) -> Result<usize> {
    if PAGE_GROUPS.contains(&group) {
        Ok(group)
    } else {
        Err(EngineError::InvalidPageGroup(group))
    }
}

/// 文書全体に共通の設定
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct DocumentOptions {
    #[builder(default)]
    pub geometry: LayoutGeometry,
    /// 入力ごとのページ数をこの倍数に揃える
    #[builder(default = "1")]
    pub page_group: usize,
}

impl DocumentOptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.page_group {
            Some(group) => validate_page_group(group)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            None => Ok(()),
        }
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            geometry: LayoutGeometry::default(),
            page_group: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_geometry() {
        let g = LayoutGeometry::new(612, 792).unwrap();
        assert_eq!(g.top(), 692);
        assert_eq!(g.topline(), 716);
        assert_eq!(g.right_margin(), 576);
        assert_eq!(g.wrap_col(), 104);
        assert_eq!(g, LayoutGeometry::default());
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let g = LayoutGeometry::for_paper(612, 792, true).unwrap();
        assert_eq!(g.width(), 792);
        assert_eq!(g.right_margin(), 756);
        assert_eq!(g.top(), 512);
        assert_eq!(g.wrap_col(), 144);
    }

    #[test]
    fn test_degenerate_geometry_is_rejected() {
        assert!(matches!(
            LayoutGeometry::new(0, 792),
            Err(EngineError::InvalidGeometry(_))
        ));
        assert!(LayoutGeometry::new(612, 150).is_err());
        assert!(LayoutGeometry::new(120, 792).is_err());
    }

    #[test]
    fn test_builder_validates_page_group() {
        let opts = DocumentOptionsBuilder::default().page_group(4usize).build().unwrap();
        assert_eq!(opts.page_group, 4);
        assert_eq!(opts.geometry, LayoutGeometry::default());

        let err = DocumentOptionsBuilder::default().page_group(3usize).build();
        assert!(err.is_err());
        assert!(matches!(validate_page_group(3), Err(EngineError::InvalidPageGroup(3))));
    }
}
