// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// `usize` を包むカウント値オブジェクトを定義する
macro_rules! count_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }

            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }

            #[inline]
            #[must_use]
            pub const fn saturating_add(self, rhs: usize) -> Self {
                Self(self.0.saturating_add(rhs))
            }

            #[inline]
            #[must_use]
            pub const fn saturating_sub(self, rhs: usize) -> Self {
                Self(self.0.saturating_sub(rhs))
            }

            /// 1 だけ増やす
            #[inline]
            pub fn increment(&mut self) {
                self.0 = self.0.saturating_add(1);
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Add<usize> for $name {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self(self.0 + rhs)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl AddAssign<usize> for $name {
            fn add_assign(&mut self, rhs: usize) {
                self.0 += rhs;
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl Sum<usize> for $name {
            fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
                Self(iter.sum())
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for usize {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_type!(
    /// 論理行数
    LineCount
);

count_type!(
    /// ページ数
    PageCount
);

count_type!(
    /// 桁位置 (タブ展開後)
    ColumnCount
);

impl PageCount {
    /// `group` の倍数に切り上げるのに必要な空白ページ数
    ///
    /// `group` が 0 の場合は 0 を返す。
    #[inline]
    pub const fn padding_to(self, group: usize) -> usize {
        if group == 0 {
            return 0;
        }
        let rem = self.0 % group;
        if rem == 0 { 0 } else { group - rem }
    }
}
