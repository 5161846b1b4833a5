// crates/engine/src/source.rs
//! 行単位の入力ソースと、先読み用の位置復元ガード

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// 復元可能なストリーム位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Marker(u64);

impl Marker {
    #[must_use]
    pub const fn new(offset: u64) -> Self {
        Self(offset)
    }

    #[must_use]
    pub const fn offset(self) -> u64 {
        self.0
    }
}

/// 逐次読み出しと位置の保存・復元ができる入力
pub trait InputSource {
    /// 改行を含めて 1 行を `buf` に追記する。終端では `Ok(0)` を返す。
    ///
    /// # Errors
    /// 下位の読み出しに失敗した場合
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;

    /// # Errors
    /// 下位ストリームが位置を返せない場合
    fn position(&mut self) -> io::Result<Marker>;

    /// # Errors
    /// 下位ストリームのシークに失敗した場合
    fn seek(&mut self, marker: Marker) -> io::Result<()>;
}

/// `BufRead + Seek` 上の入力ソース (不正な UTF-8 は置換文字になる)
#[derive(Debug)]
pub struct LineSource<R> {
    inner: R,
    bytes: Vec<u8>,
}

impl<R: BufRead + Seek> LineSource<R> {
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            bytes: Vec::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl LineSource<Cursor<Vec<u8>>> {
    /// メモリ上のバッファ (標準入力など) から作る
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(bytes.into()))
    }
}

impl LineSource<BufReader<File>> {
    /// # Errors
    /// ファイルを開けない場合
    pub fn open(path: &Path) -> io::Result<Self> {
        File::open(path).map(|f| Self::new(BufReader::new(f)))
    }
}

impl<R: BufRead + Seek> InputSource for LineSource<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.bytes.clear();
        let n = self.inner.read_until(b'\n', &mut self.bytes)?;
        match std::str::from_utf8(&self.bytes) {
            Ok(line) => buf.push_str(line),
            // UTF-8 でない行は Latin-1 として 1 バイト 1 文字で読む
            Err(_) => buf.extend(self.bytes.iter().map(|&b| char::from(b))),
        }
        Ok(n)
    }

    fn position(&mut self) -> io::Result<Marker> {
        self.inner.stream_position().map(Marker)
    }

    fn seek(&mut self, marker: Marker) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(marker.0)).map(|_| ())
    }
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        (**self).read_line(buf)
    }

    fn position(&mut self) -> io::Result<Marker> {
        (**self).position()
    }

    fn seek(&mut self, marker: Marker) -> io::Result<()> {
        (**self).seek(marker)
    }
}

/// 生存中に読み進めた位置を、破棄時に必ず元へ戻すガード
pub struct PositionGuard<'a, S: InputSource + ?Sized> {
    source: &'a mut S,
    marker: Marker,
}

impl<'a, S: InputSource + ?Sized> PositionGuard<'a, S> {
    /// # Errors
    /// 現在位置を取得できない場合
    pub fn capture(source: &'a mut S) -> io::Result<Self> {
        let marker = source.position()?;
        Ok(Self { source, marker })
    }
}

impl<S: InputSource + ?Sized> Deref for PositionGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.source
    }
}

impl<S: InputSource + ?Sized> DerefMut for PositionGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.source
    }
}

impl<S: InputSource + ?Sized> Drop for PositionGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.source.seek(self.marker) {
            log::warn!(
                "failed to restore input position {}: {err}",
                self.marker.offset()
            );
        }
    }
}

/// 行末の改行 (`\n`) を取り除き、改行があったかを返す
#[must_use]
pub fn split_newline(line: &str) -> (&str, bool) {
    line.strip_suffix('\n')
        .map_or((line, false), |content| (content, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_until_eof() {
        let mut src = LineSource::from_bytes("one\ntwo");
        let mut buf = String::new();
        assert_eq!(src.read_line(&mut buf).unwrap(), 4);
        assert_eq!(buf, "one\n");
        buf.clear();
        assert_eq!(src.read_line(&mut buf).unwrap(), 3);
        assert_eq!(buf, "two");
        buf.clear();
        assert_eq!(src.read_line(&mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_non_utf8_line_is_read_as_latin1() {
        let mut src = LineSource::from_bytes(b"caf\xe9\nna\xc3\xafve\n".to_vec());
        let mut buf = String::new();
        src.read_line(&mut buf).unwrap();
        assert_eq!(buf, "caf\u{e9}\n");

        buf.clear();
        src.read_line(&mut buf).unwrap();
        assert_eq!(buf, "na\u{ef}ve\n");
    }

    #[test]
    fn test_guard_restores_position() {
        let mut src = LineSource::from_bytes("a\nb\nc\n");
        let mut buf = String::new();
        src.read_line(&mut buf).unwrap();
        let before = src.position().unwrap();
        {
            let mut guard = PositionGuard::capture(&mut src).unwrap();
            let mut scratch = String::new();
            guard.read_line(&mut scratch).unwrap();
            guard.read_line(&mut scratch).unwrap();
            assert_eq!(scratch, "b\nc\n");
        }
        assert_eq!(src.position().unwrap(), before);
        buf.clear();
        src.read_line(&mut buf).unwrap();
        assert_eq!(buf, "b\n");
    }

    #[test]
    fn test_split_newline() {
        assert_eq!(split_newline("abc\n"), ("abc", true));
        assert_eq!(split_newline("abc"), ("abc", false));
        assert_eq!(split_newline("\n"), ("", true));
    }
}
