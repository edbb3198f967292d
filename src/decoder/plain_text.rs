use super::{Decision, DecodeContext, Decoder};
use crate::error::{Error, FormatError};
use crate::media_type::TEXT_PLAIN;

/// ボディをそのまま文字列スロットに格納する
///
/// 出力先が文字列スロットで、かつ以下のいずれかを満たす場合に適用する。
///
/// - Content-Type ヘッダーが 1 つもない
/// - いずれかの Content-Type 値が `text/plain` を含む
///
/// Content-Type が複数ある場合は、1 つでも `text/plain` を含めば適用する。
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecoder;

impl Decoder for PlainTextDecoder {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn decode(&self, context: &mut DecodeContext<'_>) -> Decision {
        let limits = context.limits().clone();
        let (response, destination) = context.parts_mut();
        let Some(slot) = destination.as_text() else {
            return Decision::Delegate;
        };
        if response.has_content_type() && !response.content_type_contains(TEXT_PLAIN) {
            return Decision::Delegate;
        }

        let result = response.read_body(&limits).and_then(|body| {
            String::from_utf8(body).map_err(|e| Error::MalformedBody {
                decoder: self.name(),
                source: FormatError::Utf8(e.utf8_error()),
            })
        });
        result.map(|text| *slot = text).into()
    }
}
