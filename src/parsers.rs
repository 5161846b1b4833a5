// src/parsers.rs
use std::ffi::OsString;
use std::fmt::Display;
use std::str::FromStr;

use c2ps_engine::Language;
use c2ps_engine::config::validate_page_group;

/// 既定引数を入れる環境変数
pub const DEFAULTS_ENV: &str = "C2PS_DEFAULTS";

/// 環境変数の既定引数 (空白区切り) をプログラム名の直後に差し込む
pub fn prepend_defaults<I>(args: I, defaults: Option<&str>) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    if let Some(defaults) = defaults {
        out.extend(defaults.split_whitespace().map(OsString::from));
    }
    out.extend(args);
    out
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// ページグループ (1, 2, 4, 8)
///
/// # Errors
/// 数値でない場合や許されない値の場合
pub fn parse_page_group(s: &str) -> Result<usize, String> {
    let group = parse_bounded_number(s, 1, Some(8))?;
    validate_page_group(group).map_err(|e| e.to_string())
}

/// `count` の N-up 数 (1 または 2)
///
/// # Errors
/// 1, 2 以外の場合
pub fn parse_nup(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(2))
}

/// # Errors
/// 未知の言語名の場合
pub fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}
