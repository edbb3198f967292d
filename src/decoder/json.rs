use super::{Decision, DecodeContext, Decoder, decode_structured};
use crate::media_type::JSON_MARKER;

/// JSON ボディを構造化値にデコードする
///
/// Content-Type のいずれかが `json` を含む場合に適用する
/// (`application/json`, `application/problem+json` 等)。
/// 出力先がシンクの場合は常に委譲する。
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn decode(&self, context: &mut DecodeContext<'_>) -> Decision {
        decode_structured(context, self.name(), JSON_MARKER, |value, body| {
            value.decode_json(body)
        })
    }
}
