//! レスポンスボディデコーダーモジュール
//!
//! Content-Type に応じてデコーダーを順番に試す Chain of Responsibility を提供。
//!
//! 各デコーダーはレスポンスと出力先を調べ、適用できる場合はボディを消費して
//! [`Decision::Done`] を返し、適用できない場合はボディに触れずに
//! [`Decision::Delegate`] を返す。チェーンは委譲を受けて次のデコーダーへ進む。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_response_decoder::{DecoderGroup, Destination, Response};
//!
//! let group = DecoderGroup::standard();
//!
//! let mut response = Response::new(200, "OK")
//!     .header("Content-Type", "text/plain; charset=utf-8")
//!     .body("hello");
//! let mut text = String::new();
//! group.decode(&mut response, Destination::text(&mut text)).unwrap();
//! assert_eq!(text, "hello");
//! ```
//!
//! ## 独自デコーダー
//!
//! ```rust
//! use shiguredo_response_decoder::{
//!     Decision, DecodeContext, Decoder, DecoderGroup, Destination, Response,
//! };
//!
//! /// text/csv を 1 行目だけ取り出す
//! struct CsvHeaderDecoder;
//!
//! impl Decoder for CsvHeaderDecoder {
//!     fn name(&self) -> &'static str {
//!         "csv_header"
//!     }
//!
//!     fn decode(&self, context: &mut DecodeContext<'_>) -> Decision {
//!         let limits = context.limits().clone();
//!         let (response, destination) = context.parts_mut();
//!         let Some(slot) = destination.as_text() else {
//!             return Decision::Delegate;
//!         };
//!         if !response.content_type_contains("text/csv") {
//!             return Decision::Delegate;
//!         }
//!         let result = response.read_body(&limits).map(|body| {
//!             let text = String::from_utf8_lossy(&body);
//!             *slot = text.lines().next().unwrap_or_default().to_string();
//!         });
//!         Decision::Done(result)
//!     }
//! }
//!
//! let group = DecoderGroup::new().decoder(CsvHeaderDecoder);
//! let mut response = Response::new(200, "OK")
//!     .header("Content-Type", "text/csv")
//!     .body("a,b\n1,2\n");
//! let mut header = String::new();
//! group.decode(&mut response, Destination::text(&mut header)).unwrap();
//! assert_eq!(header, "a,b");
//! ```

mod chain;
mod file;
mod group;
mod json;
mod phase;
mod plain_text;
mod xml;

use crate::destination::{Destination, Structured};
use crate::error::{Error, FormatError, Result};
use crate::limits::DecoderLimits;
use crate::response::Response;

// 公開 API
pub use chain::DecoderChain;
pub use file::FileDecoder;
pub use group::DecoderGroup;
pub use json::JsonDecoder;
pub use phase::ChainPhase;
pub use plain_text::PlainTextDecoder;
pub use xml::XmlDecoder;

/// デコーダーの判定結果
#[derive(Debug)]
pub enum Decision {
    /// デコーダーがボディを引き受けた (成功または失敗で終端)
    Done(Result<()>),
    /// 次のデコーダーに委譲する
    Delegate,
}

impl Decision {
    /// 委譲かどうか
    pub fn is_delegate(&self) -> bool {
        matches!(self, Decision::Delegate)
    }
}

impl From<Result<()>> for Decision {
    fn from(result: Result<()>) -> Self {
        Decision::Done(result)
    }
}

/// Content-Type を判定してボディをデコードする戦略
///
/// デコーダーはリクエストごとの状態を持たず、複数のチェーンから同時に参照される。
pub trait Decoder: Send + Sync {
    /// デコーダー名 (ログ、エラー用)
    fn name(&self) -> &'static str;

    /// 適用可否を判定し、適用する場合はボディを消費して結果を返す
    ///
    /// 適用しない場合はボディに触れずに [`Decision::Delegate`] を返すこと。
    fn decode(&self, context: &mut DecodeContext<'_>) -> Decision;
}

/// 1 回のデコードにおけるレスポンスと出力先の組
#[derive(Debug)]
pub struct DecodeContext<'a> {
    response: &'a mut Response,
    destination: Destination<'a>,
    limits: DecoderLimits,
}

impl<'a> DecodeContext<'a> {
    /// デフォルトの制限で作成
    pub fn new(response: &'a mut Response, destination: Destination<'a>) -> Self {
        Self {
            response,
            destination,
            limits: DecoderLimits::default(),
        }
    }

    /// 制限を設定 (ビルダーパターン)
    pub fn with_limits(mut self, limits: DecoderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// レスポンスを取得
    pub fn response(&self) -> &Response {
        self.response
    }

    /// 出力先を取得
    pub fn destination(&self) -> &Destination<'a> {
        &self.destination
    }

    /// 出力先を可変で取得
    pub fn destination_mut(&mut self) -> &mut Destination<'a> {
        &mut self.destination
    }

    /// レスポンスと出力先を同時に可変で取得
    pub fn parts_mut(&mut self) -> (&mut Response, &mut Destination<'a>) {
        (&mut *self.response, &mut self.destination)
    }

    /// 制限を取得
    pub fn limits(&self) -> &DecoderLimits {
        &self.limits
    }
}

/// JSON / XML 共通の処理
///
/// 出力先が構造化値として扱えて Content-Type がマーカーを含む場合のみ、
/// ボディ全体を読み込んで `deserialize` に渡す。
fn decode_structured<F>(
    context: &mut DecodeContext<'_>,
    decoder: &'static str,
    marker: &str,
    deserialize: F,
) -> Decision
where
    F: FnOnce(&mut dyn Structured, &[u8]) -> std::result::Result<(), FormatError>,
{
    let limits = context.limits().clone();
    let (response, destination) = context.parts_mut();
    let Some(value) = destination.as_structured() else {
        return Decision::Delegate;
    };
    if !response.content_type_contains(marker) {
        return Decision::Delegate;
    }

    let value: &mut dyn Structured = value;
    let result = response.read_body(&limits).and_then(|body| {
        deserialize(value, &body).map_err(|source| Error::MalformedBody { decoder, source })
    });
    result.into()
}
