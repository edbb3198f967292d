//! デコード結果の出力先
//!
//! 出力先の形 (文字列スロット / ファイルシンク / 構造化値) によって、
//! どのデコーダーが適用可能かが決まる。

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::FormatError;

/// 構造化フォーマットからデコード可能な値
///
/// `serde::de::DeserializeOwned` を実装するすべての型で実装済み。
pub trait Structured {
    /// JSON ボディで値を置き換える
    fn decode_json(&mut self, body: &[u8]) -> Result<(), FormatError>;

    /// XML ボディで値を置き換える
    fn decode_xml(&mut self, body: &[u8]) -> Result<(), FormatError>;
}

impl<T> Structured for T
where
    T: DeserializeOwned,
{
    fn decode_json(&mut self, body: &[u8]) -> Result<(), FormatError> {
        *self = serde_json::from_slice(body).map_err(FormatError::Json)?;
        Ok(())
    }

    fn decode_xml(&mut self, body: &[u8]) -> Result<(), FormatError> {
        let text = std::str::from_utf8(body).map_err(FormatError::Utf8)?;
        *self = quick_xml::de::from_str(text).map_err(FormatError::Xml)?;
        Ok(())
    }
}

/// ファイル名を持つ書き込み先
///
/// ファイル名の拡張子から推定した MIME タイプがファイルデコーダーの適用判定に使われる。
pub trait Sink: Write {
    /// ファイル名 (パスを含んでもよい)
    fn file_name(&self) -> &str;
}

/// [`Sink`] の標準実装
#[derive(Debug)]
pub struct FileSink<W = File> {
    name: String,
    writer: W,
}

impl FileSink<File> {
    /// ファイルを作成してシンクにする
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Self {
            name: path.to_string_lossy().into_owned(),
            writer: file,
        })
    }
}

impl<W: Write> FileSink<W> {
    /// 任意の writer にファイル名を付けてシンクにする
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    /// writer への参照を取得
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// writer を取り出す
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for FileSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> Sink for FileSink<W> {
    fn file_name(&self) -> &str {
        &self.name
    }
}

/// デコード結果の出力先
pub enum Destination<'a> {
    /// 文字列スロット
    Text(&'a mut String),
    /// ファイル名付きの書き込み先
    Sink(&'a mut dyn Sink),
    /// 構造化値
    Structured(&'a mut dyn Structured),
}

impl<'a> Destination<'a> {
    /// 文字列スロットを出力先にする
    pub fn text(slot: &'a mut String) -> Self {
        Destination::Text(slot)
    }

    /// シンクを出力先にする
    pub fn sink<S: Sink>(sink: &'a mut S) -> Self {
        Destination::Sink(sink)
    }

    /// 構造化値を出力先にする
    pub fn structured<T: Structured>(value: &'a mut T) -> Self {
        Destination::Structured(value)
    }

    /// 出力先の種類 (ログ用)
    pub fn kind(&self) -> &'static str {
        match self {
            Destination::Text(_) => "text",
            Destination::Sink(_) => "sink",
            Destination::Structured(_) => "structured",
        }
    }

    /// 文字列スロットの場合のみ取得
    pub fn as_text(&mut self) -> Option<&mut String> {
        match self {
            Destination::Text(slot) => Some(&mut **slot),
            _ => None,
        }
    }

    /// シンクの場合のみ取得
    pub fn as_sink(&mut self) -> Option<&mut (dyn Sink + 'a)> {
        match self {
            Destination::Sink(sink) => Some(&mut **sink),
            _ => None,
        }
    }

    /// 構造化値として取得
    ///
    /// 文字列スロットも `String` という構造化値として扱う。
    pub fn as_structured(&mut self) -> Option<&mut (dyn Structured + 'a)> {
        match self {
            Destination::Structured(value) => Some(&mut **value),
            Destination::Text(slot) => Some(&mut **slot),
            Destination::Sink(_) => None,
        }
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Destination").field(&self.kind()).finish()
    }
}
