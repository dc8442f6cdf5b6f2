#![cfg(feature = "pcsc")]

//! 共通: 実機テスト用ヘルパー
//!
//! `--features pcsc` でコンパイルされる実機テストで使う関数。
//! リーダーやタグが無い環境（CI 等）では `Ok(None)` を返す。

use ntagndef::transport::PcscTransport;
use ntagndef::{Error, Result};

/// 最初のリーダーに接続し、タグが載っていればトランスポートを返す。
///
/// - Ok(Some(transport)) : リーダーとタグが見つかった
/// - Ok(None) : リーダーまたはタグが無い（CI 等では許容）
/// - Err(e) : その他の致命的なエラー
pub fn connect_reader() -> Result<Option<PcscTransport>> {
    match PcscTransport::connect_first() {
        Ok(transport) => Ok(Some(transport)),
        Err(Error::ReaderNotFound) => Ok(None),
        Err(Error::Pcsc(pcsc::Error::NoSmartcard))
        | Err(Error::Pcsc(pcsc::Error::RemovedCard))
        | Err(Error::Pcsc(pcsc::Error::NoService)) => Ok(None),
        Err(e) => Err(e),
    }
}
