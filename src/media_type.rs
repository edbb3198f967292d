//! Content-Type 判定のための定数とヘルパー
//!
//! デコーダーの適用判定は Content-Type 値の厳密なパースではなく、
//! 小文字化した値に対するマーカー文字列の部分一致で行う。
//!
//! ```rust
//! use shiguredo_response_decoder::media_type::{contains_marker, mime_for_file_name};
//!
//! assert!(contains_marker("Application/JSON; charset=utf-8", "json"));
//! assert_eq!(mime_for_file_name("report.json"), "application/json");
//! assert_eq!(mime_for_file_name("unknown"), "application/octet-stream");
//! ```

/// Content-Type ヘッダー名
pub const CONTENT_TYPE: &str = "Content-Type";

/// JSON 系フォーマットのマーカー (application/json, application/problem+json 等)
pub const JSON_MARKER: &str = "json";

/// XML 系フォーマットのマーカー (application/xml, text/xml, application/atom+xml 等)
pub const XML_MARKER: &str = "xml";

/// プレーンテキストのマーカー
pub const TEXT_PLAIN: &str = "text/plain";

/// 拡張子から MIME タイプを推定できなかった場合のフォールバック
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// Content-Type 値にマーカーが含まれるか (大文字小文字を区別しない)
pub fn contains_marker(value: &str, marker: &str) -> bool {
    value
        .to_ascii_lowercase()
        .contains(&marker.to_ascii_lowercase())
}

/// ファイル名の拡張子から MIME タイプを推定
///
/// 推定できない場合は `application/octet-stream` を返す。
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or(APPLICATION_OCTET_STREAM)
}
