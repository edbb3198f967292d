use std::sync::Arc;

use super::phase::ChainPhase;
use super::{Decision, DecodeContext, Decoder};
use crate::error::{Error, Result};

/// 1 回のデコードでデコーダーを順番に試すチェーン
///
/// カーソルは前進のみで、一度試したデコーダーを再び試すことはない。
/// 終端に到達したチェーンは再利用できない。
pub struct DecoderChain<'a> {
    context: DecodeContext<'a>,
    decoders: Vec<Arc<dyn Decoder>>,
    cursor: usize,
    phase: ChainPhase,
}

impl<'a> DecoderChain<'a> {
    /// コンテキストとデコーダー列からチェーンを作成
    pub fn new<I>(context: DecodeContext<'a>, decoders: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Decoder>>,
    {
        Self {
            context,
            decoders: decoders.into_iter().collect(),
            cursor: 0,
            phase: ChainPhase::Ready,
        }
    }

    /// デコーダーを末尾に追加
    pub fn add<I>(&mut self, decoders: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Decoder>>,
    {
        self.decoders.extend(decoders);
        self
    }

    /// 次に試すデコーダーの位置
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 現在の状態
    pub fn phase(&self) -> ChainPhase {
        self.phase
    }

    /// デコーダー数
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// デコーダーが空かどうか
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// カーソル位置のデコーダーを 1 つ試す
    ///
    /// カーソルはデコーダー呼び出しの前に進める。
    /// すべてのデコーダーが委譲済みなら [`Error::NoMatchingDecoder`] で終端する。
    pub fn advance(&mut self) -> Decision {
        if self.phase == ChainPhase::Terminal {
            return Decision::Done(Err(Error::ChainFinished));
        }

        let index = self.cursor;
        if index >= self.decoders.len() {
            self.phase = ChainPhase::Terminal;
            tracing::trace!(decoders = self.decoders.len(), "decoder chain exhausted");
            return Decision::Done(Err(Error::NoMatchingDecoder {
                content_types: self
                    .context
                    .response()
                    .content_types()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }));
        }

        self.cursor += 1;
        self.phase = ChainPhase::Running;

        let decoder = &self.decoders[index];
        let decision = decoder.decode(&mut self.context);
        match &decision {
            Decision::Delegate => {
                tracing::trace!(decoder = decoder.name(), index, "decoder delegated");
            }
            Decision::Done(result) => {
                self.phase = ChainPhase::Terminal;
                tracing::debug!(
                    decoder = decoder.name(),
                    index,
                    success = result.is_ok(),
                    "decoder matched"
                );
            }
        }
        decision
    }

    /// 終端に到達するまでチェーンを進める
    pub fn run(mut self) -> Result<()> {
        loop {
            if let Decision::Done(result) = self.advance() {
                return result;
            }
        }
    }
}
