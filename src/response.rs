use std::io::{self, Read, Write};

use crate::body::Body;
use crate::error::{Error, Result};
use crate::limits::DecoderLimits;
use crate::media_type::{CONTENT_TYPE, contains_marker};

// Content-Length を信用して確保するバッファの上限
const MAX_INITIAL_CAPACITY: usize = 64 * 1024;

/// デコード対象の HTTP レスポンス
///
/// ヘッダーはトランスポート層から受け取った順序のまま保持し、同名ヘッダーの重複を許す。
/// デコーダーが参照するのはヘッダーとボディのみで、ステータス行の各フィールドは
/// 呼び出し側のための情報としてデコード後もそのまま残る。
#[derive(Debug)]
pub struct Response {
    /// HTTP バージョン (HTTP/1.1 等)
    pub version: String,
    /// ステータスコード (200, 404, etc.)
    pub status_code: u16,
    /// ステータスフレーズ (OK, Not Found, etc.)
    pub reason_phrase: String,
    /// ヘッダー
    pub headers: Vec<(String, String)>,
    /// ボディ (一度だけ読み取れる)
    pub body: Body,
}

impl Response {
    /// 新しいレスポンスを作成 (HTTP/1.1)
    pub fn new(status_code: u16, reason_phrase: &str) -> Self {
        Self {
            version: "HTTP/1.1".to_string(),
            status_code,
            reason_phrase: reason_phrase.to_string(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }

    /// ヘッダーを追加 (ビルダーパターン)
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// ボディを設定 (ビルダーパターン)
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// ヘッダーを追加
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// ヘッダーを取得 (大文字小文字を区別しない)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 指定した名前のヘッダーをすべて取得
    pub fn get_headers(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// ヘッダーが存在するか確認
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Content-Length ヘッダーの値を取得
    pub fn content_length(&self) -> Option<usize> {
        self.get_header("Content-Length")
            .and_then(|v| v.trim().parse().ok())
    }

    /// Content-Type ヘッダーの値をすべて取得
    pub fn content_types(&self) -> Vec<&str> {
        self.get_headers(CONTENT_TYPE)
    }

    /// Content-Type ヘッダーが存在するか確認
    pub fn has_content_type(&self) -> bool {
        self.has_header(CONTENT_TYPE)
    }

    /// いずれかの Content-Type 値がマーカーを含むか (大文字小文字を区別しない)
    pub fn content_type_contains(&self, marker: &str) -> bool {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(CONTENT_TYPE))
            .any(|(_, v)| contains_marker(v, marker))
    }

    /// ボディ全体をメモリに読み込む
    ///
    /// `limits.max_body_size` を超えた時点で [`Error::BodyTooLarge`] を返す。
    pub fn read_body(&mut self, limits: &DecoderLimits) -> Result<Vec<u8>> {
        let limit = limits.max_body_size;
        let reader = self.body.take()?;

        let capacity = self
            .content_length()
            .unwrap_or(0)
            .min(limit)
            .min(MAX_INITIAL_CAPACITY);
        let mut buf = Vec::with_capacity(capacity);

        // 上限 + 1 バイトまで読んで超過を検出する
        reader
            .take((limit as u64).saturating_add(1))
            .read_to_end(&mut buf)?;
        if buf.len() > limit {
            return Err(Error::BodyTooLarge {
                size: buf.len(),
                limit,
            });
        }
        Ok(buf)
    }

    /// ボディをバッファリングせずに writer へコピーする
    pub fn copy_body_to<W>(&mut self, writer: &mut W) -> Result<u64>
    where
        W: Write + ?Sized,
    {
        let mut reader = self.body.take()?;
        let written = io::copy(&mut reader, writer)?;
        writer.flush()?;
        Ok(written)
    }
}
