//! PBT テスト共通ユーティリティ

use proptest::prelude::*;
use shiguredo_response_decoder::{Decision, DecodeContext, Decoder};

// ========================================
// Content-Type 生成
// ========================================

/// 大文字小文字を混ぜた文字列 (マーカー判定の大文字小文字非依存性の検証用)
pub fn mixed_case(s: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), s.len()).prop_map(move |upper| {
        s.chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// マーカー (json / xml / text/plain) を含まない Content-Type
pub fn unrelated_content_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("text/html".to_string()),
        Just("text/csv".to_string()),
        Just("image/png".to_string()),
        Just("application/pdf".to_string()),
        Just("multipart/form-data; boundary=abc".to_string()),
    ]
}

/// パラメーター付きの Content-Type サフィックス
pub fn content_type_params() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("; charset=utf-8".to_string()),
        Just("; charset=UTF-8".to_string()),
        "; q=[0-9]".prop_map(|s| s),
    ]
}

// ========================================
// テスト用デコーダー
// ========================================

/// Content-Type にマーカーを含むと自分の名前を文字列スロットに書き込むデコーダー
///
/// ボディには触れない。
pub struct Label {
    pub name: &'static str,
    pub marker: &'static str,
}

impl Decoder for Label {
    fn name(&self) -> &'static str {
        self.name
    }

    fn decode(&self, context: &mut DecodeContext<'_>) -> Decision {
        let (response, destination) = context.parts_mut();
        if !response.content_type_contains(self.marker) {
            return Decision::Delegate;
        }
        if let Some(slot) = destination.as_text() {
            *slot = self.name.to_string();
        }
        Decision::Done(Ok(()))
    }
}

/// ラベル名とマーカーの候補
pub const LABELS: &[(&str, &str)] = &[
    ("alpha", "a"),
    ("bravo", "b"),
    ("charlie", "c"),
    ("delta", "d"),
    ("echo", "e"),
];

/// ラベルデコーダーのインデックス列
pub fn label_indices() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0..LABELS.len(), 0..8)
}

/// インデックスからラベルデコーダーを作る
pub fn label(index: usize) -> Label {
    let (name, marker) = LABELS[index];
    Label { name, marker }
}
