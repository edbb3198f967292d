//! デコーダーグループの結合テスト
//!
//! レスポンスの Content-Type と出力先の形の組み合わせごとに、
//! どのデコーダーが選ばれ、どの結果で終端するかを確認する。

use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;
use shiguredo_response_decoder::{
    Body, Decision, DecodeContext, Decoder, DecoderGroup, Destination, Error, FileDecoder,
    FileSink, JsonDecoder, PlainTextDecoder, Response, XmlDecoder,
};

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Record {
    x: i64,
}

/// 一致したら自分の名前を文字列スロットに書き込むデコーダー
struct Label {
    name: &'static str,
    marker: &'static str,
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

/// 読み取るたびに失敗するボディ
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ))
    }
}

#[test]
fn no_content_type_text_destination_uses_plain_text() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK").body("hello");
    let mut text = String::new();

    group
        .decode(&mut response, Destination::text(&mut text))
        .unwrap();
    assert_eq!(text, "hello");
}

#[test]
fn json_with_charset_into_record() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/json; charset=utf-8")
        .body(r#"{"x":1}"#);
    let mut record = Record::default();

    group
        .decode(&mut response, Destination::structured(&mut record))
        .unwrap();
    assert_eq!(record, Record { x: 1 });
}

#[test]
fn text_plain_with_non_string_destination_has_no_matching_decoder() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "text/plain")
        .body("hello");
    let mut record = Record::default();

    let err = group
        .decode(&mut response, Destination::structured(&mut record))
        .unwrap_err();
    match err {
        Error::NoMatchingDecoder { content_types } => {
            assert_eq!(content_types, vec!["text/plain".to_string()]);
        }
        other => panic!("unexpected error: {}", other),
    }
    // 委譲したデコーダーはボディに触れない
    assert!(!response.body.is_consumed());
}

#[test]
fn second_decode_on_consumed_body_is_io_error() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK").body("hello");

    let mut first = String::new();
    group
        .decode(&mut response, Destination::text(&mut first))
        .unwrap();
    assert_eq!(first, "hello");

    let mut second = String::new();
    let err = group
        .decode(&mut response, Destination::text(&mut second))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(second.is_empty());
}

#[test]
fn empty_group_returns_no_matching_decoder() {
    let group = DecoderGroup::new();
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/json")
        .body("{}");
    let mut record = Record::default();

    let err = group
        .decode(&mut response, Destination::structured(&mut record))
        .unwrap_err();
    assert!(matches!(err, Error::NoMatchingDecoder { .. }));
}

#[test]
fn file_sink_receives_exact_bytes() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/json")
        .body(vec![1u8, 2, 3]);
    let mut sink = FileSink::new("report.json", Vec::new());

    group
        .decode(&mut response, Destination::sink(&mut sink))
        .unwrap();
    assert_eq!(sink.into_inner(), vec![1, 2, 3]);
}

#[test]
fn file_sink_on_disk() {
    let path = std::env::temp_dir().join(format!(
        "shiguredo-response-decoder-{}.bin",
        std::process::id()
    ));
    let group = DecoderGroup::new().decoder(FileDecoder);
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/octet-stream")
        .body(vec![0xde, 0xad, 0xbe, 0xef]);

    let mut sink = FileSink::create(&path).unwrap();
    group
        .decode(&mut response, Destination::sink(&mut sink))
        .unwrap();
    drop(sink);

    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, [0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn earlier_decoder_wins_on_overlapping_content_type() {
    let first = Label {
        name: "first",
        marker: "json",
    };
    let second = Label {
        name: "second",
        marker: "xml",
    };
    let group = DecoderGroup::new().decoder(first).decoder(second);

    let mut response = Response::new(200, "OK").header("Content-Type", "application/xml+json");
    let mut text = String::new();
    group
        .decode(&mut response, Destination::text(&mut text))
        .unwrap();
    assert_eq!(text, "first");

    let reversed = DecoderGroup::new()
        .decoder(Label {
            name: "second",
            marker: "xml",
        })
        .decoder(Label {
            name: "first",
            marker: "json",
        });
    let mut response = Response::new(200, "OK").header("Content-Type", "application/xml+json");
    let mut text = String::new();
    reversed
        .decode(&mut response, Destination::text(&mut text))
        .unwrap();
    assert_eq!(text, "second");
}

#[test]
fn malformed_body_does_not_fall_through() {
    // JSON と XML の両方に一致する Content-Type で JSON が失敗しても XML は試さない
    let group = DecoderGroup::new().decoder(JsonDecoder).decoder(XmlDecoder);
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/xml+json")
        .body("<record><x>1</x></record>");
    let mut record = Record::default();

    let err = group
        .decode(&mut response, Destination::structured(&mut record))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedBody {
            decoder: "json",
            ..
        }
    ));
    assert_eq!(record, Record::default());
}

#[test]
fn xml_into_record() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/xml")
        .body("<record><x>5</x></record>");
    let mut record = Record::default();

    group
        .decode(&mut response, Destination::structured(&mut record))
        .unwrap();
    assert_eq!(record.x, 5);
}

#[test]
fn read_failure_is_io_error() {
    let group = DecoderGroup::standard();
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/json")
        .body(Body::new(FailingReader));
    let mut record = Record::default();

    let err = group
        .decode(&mut response, Destination::structured(&mut record))
        .unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::ConnectionReset),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn plain_text_fallback_is_not_reached_when_json_declared() {
    let group = DecoderGroup::new().decoder(PlainTextDecoder);
    let mut response = Response::new(200, "OK")
        .header("Content-Type", "application/json")
        .body("{}");
    let mut text = String::new();

    let err = group
        .decode(&mut response, Destination::text(&mut text))
        .unwrap_err();
    assert!(matches!(err, Error::NoMatchingDecoder { .. }));
}

#[test]
fn shared_group_decodes_concurrently() {
    let group = Arc::new(DecoderGroup::standard());

    std::thread::scope(|scope| {
        for i in 0..8 {
            let group = Arc::clone(&group);
            scope.spawn(move || {
                let body = format!(r#"{{"x":{}}}"#, i);
                let mut response = Response::new(200, "OK")
                    .header("Content-Type", "application/json")
                    .body(body);
                let mut record = Record::default();
                group
                    .decode(&mut response, Destination::structured(&mut record))
                    .unwrap();
                assert_eq!(record.x, i);
            });
        }
    });
}
