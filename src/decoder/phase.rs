//! チェーンの状態の定義

/// チェーンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPhase {
    /// 作成直後 (カーソル 0)
    Ready,
    /// デコーダーが委譲し、カーソルが進行中
    Running,
    /// 成功、デコーダーのエラー、またはデコーダー切れで終了
    Terminal,
}
