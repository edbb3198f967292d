use super::{Decision, DecodeContext, Decoder, decode_structured};
use crate::media_type::XML_MARKER;

/// XML ボディを構造化値にデコードする
///
/// Content-Type のいずれかが `xml` を含む場合に適用する。
/// 出力先がシンクの場合は常に委譲する。
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl Decoder for XmlDecoder {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn decode(&self, context: &mut DecodeContext<'_>) -> Decision {
        decode_structured(context, self.name(), XML_MARKER, |value, body| {
            value.decode_xml(body)
        })
    }
}
