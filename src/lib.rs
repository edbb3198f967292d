//! # shiguredo_response_decoder
//!
//! Content-Type に基づいて HTTP レスポンスボディをデコードするライブラリ
//!
//! ## 特徴
//!
//! - **Chain of Responsibility**: 登録順にデコーダーを試し、最初に一致したものが処理する
//! - **拡張可能**: [`Decoder`] を実装すれば独自フォーマットを追加できる
//! - **トランスポート非依存**: レスポンスの受信は呼び出し側が行う
//!
//! ## 標準デコーダー
//!
//! | デコーダー | 出力先 | 適用条件 |
//! |---|---|---|
//! | [`JsonDecoder`] | 構造化値 / 文字列 | Content-Type が `json` を含む |
//! | [`XmlDecoder`] | 構造化値 / 文字列 | Content-Type が `xml` を含む |
//! | [`PlainTextDecoder`] | 文字列 | Content-Type がない、または `text/plain` を含む |
//! | [`FileDecoder`] | シンク | Content-Type がファイル名から推定した MIME タイプを含む |
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_response_decoder::{DecoderGroup, Destination, Error, Response};
//!
//! // クライアント設定時に一度だけ作成する
//! let group = DecoderGroup::standard();
//!
//! // Content-Type がないレスポンスは文字列スロットならプレーンテキストとして扱う
//! let mut response = Response::new(200, "OK").body("hello");
//! let mut text = String::new();
//! group.decode(&mut response, Destination::text(&mut text)).unwrap();
//! assert_eq!(text, "hello");
//!
//! // 一致するデコーダーがなければエラー
//! let mut response = Response::new(200, "OK")
//!     .header("Content-Type", "text/html")
//!     .body("<p>hello</p>");
//! let mut text = String::new();
//! let err = group
//!     .decode(&mut response, Destination::text(&mut text))
//!     .unwrap_err();
//! assert!(matches!(err, Error::NoMatchingDecoder { .. }));
//! ```

mod body;
mod decoder;
mod destination;
mod error;
mod limits;
pub mod media_type;
mod response;
pub mod response_ext;

pub use body::Body;
pub use decoder::{
    ChainPhase, Decision, DecodeContext, Decoder, DecoderChain, DecoderGroup, FileDecoder,
    JsonDecoder, PlainTextDecoder, XmlDecoder,
};
pub use destination::{Destination, FileSink, Sink, Structured};
pub use error::{Error, FormatError, Result};
pub use limits::DecoderLimits;
pub use response::Response;
pub use response_ext::ResponseExt;
