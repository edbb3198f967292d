//! ファイルをレスポンスボディとしてデコードする例
//!
//! 使い方:
//!   cargo run -p response_decode -- body.txt
//!   cargo run -p response_decode -- --content-type application/json --json body.json
//!   cargo run -p response_decode -- --content-type application/json --output out.json body.json

use std::fs::File;

use shiguredo_response_decoder::{Body, DecoderGroup, Destination, FileSink, Response};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "response_decode";

    // --help フラグ
    noargs::HELP_FLAG.take_help(&mut args);

    // --version フラグ
    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    // --debug フラグ
    let debug: bool = noargs::flag("debug")
        .doc("Print decoder chain trace logs to stderr")
        .take(&mut args)
        .is_present();

    // --json フラグ
    let json: bool = noargs::flag("json")
        .doc("Decode into a JSON value and pretty-print it")
        .take(&mut args)
        .is_present();

    // --content-type オプション
    let content_type: Option<String> = noargs::opt("content-type")
        .short('t')
        .doc("Content-Type header of the response (omit for none)")
        .take(&mut args)
        .present_and_then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // --output オプション
    let output: Option<String> = noargs::opt("output")
        .short('o')
        .doc("Write the body to this file (its extension must match the Content-Type)")
        .take(&mut args)
        .present_and_then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // 位置引数: ボディのファイル
    let body_path: String = noargs::arg("<BODY_FILE>")
        .doc("File used as the response body")
        .take(&mut args)
        .then(|a| Ok::<_, &str>(a.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        return Ok(());
    }

    if debug {
        tracing_subscriber::fmt()
            .with_env_filter("shiguredo_response_decoder=trace")
            .with_writer(std::io::stderr)
            .init();
    }

    let mut response = Response::new(200, "OK").body(Body::new(File::open(&body_path)?));
    if let Some(content_type) = &content_type {
        response.add_header("Content-Type", content_type);
    }

    let group = DecoderGroup::standard();

    if let Some(output) = output {
        let mut sink = FileSink::create(&output)?;
        group.decode(&mut response, Destination::sink(&mut sink))?;
        println!("Saved to {}", output);
    } else if json {
        let mut value = serde_json::Value::Null;
        group.decode(&mut response, Destination::structured(&mut value))?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let mut text = String::new();
        group.decode(&mut response, Destination::text(&mut text))?;
        print!("{}", text);
    }

    Ok(())
}
