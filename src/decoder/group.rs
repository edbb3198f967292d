use std::fmt;
use std::sync::Arc;

use super::chain::DecoderChain;
use super::{DecodeContext, Decoder, FileDecoder, JsonDecoder, PlainTextDecoder, XmlDecoder};
use crate::destination::Destination;
use crate::error::Result;
use crate::limits::DecoderLimits;
use crate::response::Response;

/// クライアントのデコード方針を表す、順序付きのデコーダー集合
///
/// 設定時に一度だけ組み立て、以降は複数スレッドから同時に [`DecoderGroup::decode`] できる。
/// デコーダーの追加には `&mut self` が必要なため、デコード中に変更されることはない。
///
/// ```rust
/// use shiguredo_response_decoder::{DecoderGroup, Destination, Response};
///
/// #[derive(Default, serde::Deserialize)]
/// struct Record {
///     x: i64,
/// }
///
/// let group = DecoderGroup::standard();
/// let mut response = Response::new(200, "OK")
///     .header("Content-Type", "application/json; charset=utf-8")
///     .body(r#"{"x":1}"#);
/// let mut record = Record::default();
/// group.decode(&mut response, Destination::structured(&mut record)).unwrap();
/// assert_eq!(record.x, 1);
/// ```
#[derive(Clone, Default)]
pub struct DecoderGroup {
    decoders: Vec<Arc<dyn Decoder>>,
    limits: DecoderLimits,
}

impl DecoderGroup {
    /// 空のグループを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON, XML, プレーンテキスト, ファイルの順で試すグループを作成
    pub fn standard() -> Self {
        Self::new()
            .decoder(JsonDecoder)
            .decoder(XmlDecoder)
            .decoder(PlainTextDecoder)
            .decoder(FileDecoder)
    }

    /// 制限を設定 (ビルダーパターン)
    pub fn with_limits(mut self, limits: DecoderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// デコーダーを末尾に追加 (ビルダーパターン)
    pub fn decoder<D>(mut self, decoder: D) -> Self
    where
        D: Decoder + 'static,
    {
        self.add(decoder);
        self
    }

    /// デコーダーを末尾に追加
    pub fn add<D>(&mut self, decoder: D) -> &mut Self
    where
        D: Decoder + 'static,
    {
        self.decoders.push(Arc::new(decoder));
        self
    }

    /// 共有済みのデコーダー列を末尾に追加
    pub fn append<I>(&mut self, decoders: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Decoder>>,
    {
        self.decoders.extend(decoders);
        self
    }

    /// 制限を取得
    pub fn limits(&self) -> &DecoderLimits {
        &self.limits
    }

    /// デコーダー数
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// デコーダーが空かどうか
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// デコーダー名を優先順に取得
    pub fn names(&self) -> Vec<&'static str> {
        self.decoders.iter().map(|d| d.name()).collect()
    }

    /// 現在のデコーダー列のスナップショットでチェーンを作成 (実行はしない)
    pub fn chain<'a>(
        &self,
        response: &'a mut Response,
        destination: Destination<'a>,
    ) -> DecoderChain<'a> {
        let context = DecodeContext::new(response, destination).with_limits(self.limits.clone());
        DecoderChain::new(context, self.decoders.iter().cloned())
    }

    /// レスポンスボディを出力先にデコードする
    ///
    /// 新しいチェーンを作成し、いずれかのデコーダーが終端するか、
    /// すべてのデコーダーが委譲するまで進める。
    pub fn decode<'a>(
        &self,
        response: &'a mut Response,
        destination: Destination<'a>,
    ) -> Result<()> {
        tracing::debug!(
            decoders = self.decoders.len(),
            destination = destination.kind(),
            "decode response body"
        );
        self.chain(response, destination).run()
    }
}

impl fmt::Debug for DecoderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderGroup")
            .field("decoders", &self.names())
            .field("limits", &self.limits)
            .finish()
    }
}
