use std::fmt;

/// 構造化フォーマットのデシリアライズエラー
#[derive(Debug)]
pub enum FormatError {
    /// UTF-8 デコードエラー
    Utf8(std::str::Utf8Error),
    /// JSON パースエラー
    Json(serde_json::Error),
    /// XML パースエラー
    Xml(quick_xml::DeError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Utf8(e) => write!(f, "UTF-8 decode error: {}", e),
            FormatError::Json(e) => write!(f, "JSON parse error: {}", e),
            FormatError::Xml(e) => write!(f, "XML parse error: {}", e),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Utf8(e) => Some(e),
            FormatError::Json(e) => Some(e),
            FormatError::Xml(e) => Some(e),
        }
    }
}

/// レスポンスデコードエラー
#[derive(Debug)]
pub enum Error {
    /// ボディの読み取り/コピー中の I/O エラー
    ///
    /// 消費済みのボディを再度読み取ろうとした場合もこのエラーになる。
    Io(std::io::Error),
    /// Content-Type が一致したデコーダーがボディを解釈できなかった
    MalformedBody {
        decoder: &'static str,
        source: FormatError,
    },
    /// ボディサイズ超過
    BodyTooLarge { size: usize, limit: usize },
    /// どのデコーダーも一致しなかった
    NoMatchingDecoder { content_types: Vec<String> },
    /// 終端に到達したチェーンを進めようとした
    ChainFinished,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::MalformedBody { decoder, source } => {
                write!(f, "malformed body ({} decoder): {}", decoder, source)
            }
            Error::BodyTooLarge { size, limit } => {
                write!(f, "body too large: {} > {}", size, limit)
            }
            Error::NoMatchingDecoder { content_types } => {
                if content_types.is_empty() {
                    write!(f, "no matching decoder (no Content-Type)")
                } else {
                    write!(
                        f,
                        "no matching decoder for Content-Type: {}",
                        content_types.join(", ")
                    )
                }
            }
            Error::ChainFinished => write!(f, "decoder chain already finished"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::MalformedBody { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
