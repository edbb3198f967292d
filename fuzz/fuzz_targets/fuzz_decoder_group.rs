#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_response_decoder::{
    DecoderGroup, DecoderLimits, Destination, Error, FileSink, Response,
};

#[derive(Arbitrary, Debug)]
enum FuzzDestination {
    Text,
    Value,
    Sink(String),
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    content_types: Vec<String>,
    destination: FuzzDestination,
    max_body_size: u16,
    body: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let group = DecoderGroup::standard().with_limits(DecoderLimits {
        max_body_size: input.max_body_size as usize,
    });

    let mut response = Response::new(200, "OK").body(input.body.clone());
    for content_type in &input.content_types {
        response.add_header("Content-Type", content_type);
    }

    let result = match &input.destination {
        FuzzDestination::Text => {
            let mut text = String::new();
            group.decode(&mut response, Destination::text(&mut text))
        }
        FuzzDestination::Value => {
            let mut value = serde_json::Value::Null;
            group.decode(&mut response, Destination::structured(&mut value))
        }
        FuzzDestination::Sink(name) => {
            let mut sink = FileSink::new(name.as_str(), Vec::new());
            let result = group.decode(&mut response, Destination::sink(&mut sink));
            // ファイルデコーダーは制限に関係なくボディ全体をコピーする
            if result.is_ok() {
                assert_eq!(sink.get_ref(), &input.body);
            }
            result
        }
    };

    match result {
        Ok(()) => assert!(response.body.is_consumed()),
        // 一致しなかった場合はボディに触れていない
        Err(Error::NoMatchingDecoder { .. }) => assert!(!response.body.is_consumed()),
        Err(Error::ChainFinished) => panic!("fresh chain reported finished"),
        Err(_) => {}
    }
});
