use super::{Decision, DecodeContext, Decoder};
use crate::media_type::mime_for_file_name;

/// ボディをシンクへストリームコピーする
///
/// 出力先がシンクで、かついずれかの Content-Type 値がシンクのファイル名から
/// 推定した MIME タイプを含む場合に適用する。推定できない拡張子は
/// `application/octet-stream` とみなす。
///
/// 大きなバイナリを想定し、ボディ全体をメモリに読み込まない。
/// そのため [`DecoderLimits`](crate::DecoderLimits) のボディサイズ上限は適用しない。
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl Decoder for FileDecoder {
    fn name(&self) -> &'static str {
        "file"
    }

    fn decode(&self, context: &mut DecodeContext<'_>) -> Decision {
        let (response, destination) = context.parts_mut();
        let Some(sink) = destination.as_sink() else {
            return Decision::Delegate;
        };
        let target_mime = mime_for_file_name(sink.file_name());
        if !response.content_type_contains(target_mime) {
            return Decision::Delegate;
        }

        let result = response.copy_body_to(sink).map(|written| {
            tracing::trace!(mime = target_mime, written, "body copied to sink");
        });
        result.into()
    }
}
