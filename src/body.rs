use std::fmt;
use std::io::{self, Cursor, Read};

/// 一度だけ読み取れるレスポンスボディ
///
/// トランスポート層から受け取ったバイトストリームを保持する。
/// [`Body::take`] でストリームを取り出すと消費済みになり、以降の取り出しは I/O エラーになる。
pub struct Body {
    reader: Option<Box<dyn Read + Send>>,
}

impl Body {
    /// 任意のリーダーからボディを作成
    pub fn new<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            reader: Some(Box::new(reader)),
        }
    }

    /// 空のボディを作成
    pub fn empty() -> Self {
        Self::new(io::empty())
    }

    /// 消費済みかどうか
    pub fn is_consumed(&self) -> bool {
        self.reader.is_none()
    }

    /// ボディのストリームを取り出す
    pub fn take(&mut self) -> io::Result<Box<dyn Read + Send>> {
        self.reader
            .take()
            .ok_or_else(|| io::Error::other("response body already consumed"))
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Cursor::new(bytes))
    }
}

impl From<&'static [u8]> for Body {
    fn from(bytes: &'static [u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}
