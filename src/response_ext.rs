//! Response 拡張トレイト
//!
//! [`Response`] にデコーダーグループを使った便利なメソッドを追加する。

use serde::de::DeserializeOwned;

use crate::decoder::DecoderGroup;
use crate::destination::Destination;
use crate::error::Result;
use crate::response::Response;

/// Response 拡張トレイト
pub trait ResponseExt {
    /// グループを使ってボディを出力先にデコード
    fn decode_with<'a>(
        &'a mut self,
        group: &DecoderGroup,
        destination: Destination<'a>,
    ) -> Result<()>;

    /// グループを使ってボディを文字列スロットにデコード
    fn text_with(&mut self, group: &DecoderGroup) -> Result<String>;

    /// グループを使ってボディを構造化値にデコード
    fn value_with<T>(&mut self, group: &DecoderGroup) -> Result<T>
    where
        T: DeserializeOwned + Default;
}

impl ResponseExt for Response {
    fn decode_with<'a>(
        &'a mut self,
        group: &DecoderGroup,
        destination: Destination<'a>,
    ) -> Result<()> {
        group.decode(self, destination)
    }

    fn text_with(&mut self, group: &DecoderGroup) -> Result<String> {
        let mut text = String::new();
        group.decode(self, Destination::text(&mut text))?;
        Ok(text)
    }

    fn value_with<T>(&mut self, group: &DecoderGroup) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let mut value = T::default();
        group.decode(self, Destination::structured(&mut value))?;
        Ok(value)
    }
}
