//! DecoderGroup のプロパティテスト (decoder/group.rs, decoder/chain.rs)

use pbt::{LABELS, label, label_indices, unrelated_content_type};
use proptest::prelude::*;
use shiguredo_response_decoder::{DecoderGroup, Destination, Error, Response};

// ========================================
// 順序決定性
// ========================================

proptest! {
    // 一致するデコーダーのうち、最も前にあるものが必ず選ばれる
    #[test]
    fn first_matching_decoder_wins(
        indices in label_indices(),
        content_type in "[a-e]{1,5}"
    ) {
        let mut group = DecoderGroup::new();
        for &i in &indices {
            group.add(label(i));
        }

        let expected = indices
            .iter()
            .map(|&i| LABELS[i])
            .find(|(_, marker)| content_type.contains(marker))
            .map(|(name, _)| name);

        let mut response = Response::new(200, "OK").header("Content-Type", &content_type);
        let mut text = String::new();
        let result = group.decode(&mut response, Destination::text(&mut text));

        match expected {
            Some(name) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(text, name);
            }
            None => {
                let no_match = matches!(result, Err(Error::NoMatchingDecoder { .. }));
                prop_assert!(no_match, "unexpected result: {:?}", result);
                prop_assert!(text.is_empty());
            }
        }
    }

    // 同じグループで同じ入力なら何度デコードしても同じデコーダーが選ばれる
    #[test]
    fn decode_is_deterministic(
        indices in label_indices(),
        content_type in "[a-e]{1,5}"
    ) {
        let mut group = DecoderGroup::new();
        for &i in &indices {
            group.add(label(i));
        }

        let mut outcomes = Vec::new();
        for _ in 0..3 {
            let mut response = Response::new(200, "OK").header("Content-Type", &content_type);
            let mut text = String::new();
            let ok = group.decode(&mut response, Destination::text(&mut text)).is_ok();
            outcomes.push((ok, text));
        }
        prop_assert_eq!(&outcomes[0], &outcomes[1]);
        prop_assert_eq!(&outcomes[1], &outcomes[2]);
    }
}

// ========================================
// プレーンテキストのフォールバック
// ========================================

proptest! {
    // Content-Type がなければ任意の UTF-8 ボディがそのまま文字列になる
    #[test]
    fn plain_text_fallback_preserves_body(body in ".*") {
        let group = DecoderGroup::standard();
        let mut response = Response::new(200, "OK").body(body.clone());
        let mut text = String::new();

        group.decode(&mut response, Destination::text(&mut text)).unwrap();
        prop_assert_eq!(text, body);
        prop_assert!(response.body.is_consumed());
    }

    // 無関係な Content-Type なら標準グループは文字列スロットへのデコードを拒否し、ボディに触れない
    #[test]
    fn unrelated_content_type_is_rejected(
        content_type in unrelated_content_type(),
        body in ".*"
    ) {
        let group = DecoderGroup::standard();
        let mut response = Response::new(200, "OK")
            .header("Content-Type", &content_type)
            .body(body);
        let mut text = String::new();

        let err = group.decode(&mut response, Destination::text(&mut text)).unwrap_err();
        match err {
            Error::NoMatchingDecoder { content_types } => {
                prop_assert_eq!(content_types, vec![content_type]);
            }
            other => prop_assert!(false, "unexpected error: {}", other),
        }
        prop_assert!(!response.body.is_consumed());
    }

    // 空のグループは常に NoMatchingDecoder
    #[test]
    fn empty_group_never_matches(
        content_type in proptest::option::of("[a-z/+;= -]{0,30}"),
        body in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let group = DecoderGroup::new();
        let mut response = Response::new(200, "OK").body(body);
        if let Some(content_type) = &content_type {
            response.add_header("Content-Type", content_type);
        }
        let mut text = String::new();

        let result = group.decode(&mut response, Destination::text(&mut text));
        let no_match = matches!(result, Err(Error::NoMatchingDecoder { .. }));
        prop_assert!(no_match, "unexpected result: {:?}", result);
        prop_assert!(!response.body.is_consumed());
    }
}
