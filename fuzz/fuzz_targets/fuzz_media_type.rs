#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_response_decoder::media_type::{contains_marker, mime_for_file_name};

fuzz_target!(|data: (&str, &str)| {
    let (value, name) = data;

    // 大文字小文字を変えても判定結果は変わらない
    let marker = name.get(..name.len().min(8)).unwrap_or_default();
    assert_eq!(
        contains_marker(value, marker),
        contains_marker(&value.to_ascii_uppercase(), &marker.to_ascii_lowercase())
    );

    assert!(!mime_for_file_name(name).is_empty());
});
