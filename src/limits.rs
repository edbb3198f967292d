/// デコーダーの制限設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderLimits {
    /// 最大ボディサイズ (デフォルト: 10MB)
    ///
    /// ボディ全体をメモリに読み込むデコーダー (JSON / XML / テキスト) にのみ適用する。
    /// ファイルへのストリームコピーには適用しない。
    pub max_body_size: usize,
}

impl Default for DecoderLimits {
    fn default() -> Self {
        Self {
            max_body_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl DecoderLimits {
    /// 制限なしの設定を作成
    pub fn unlimited() -> Self {
        Self {
            max_body_size: usize::MAX,
        }
    }
}
