//! 医師データの取得
//!
//! 取得先は `<meta name="doctors-api-url" content="...">` で差し替え可能。
//! 指定がなければ同一オリジンの `doctors.json` を読む。

use doctor_finder_common::parse_payload;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const DEFAULT_DOCTORS_API_URL: &str = "doctors.json";
const API_URL_META: &str = "meta[name=\"doctors-api-url\"]";

/// 取得先URL
pub fn doctors_api_url() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(API_URL_META).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DOCTORS_API_URL.to_string())
}

/// 医師データを取得（本文が空なら null、不正なJSONはエラー）
///
/// 再試行はしない。失敗はメッセージ文字列で返す。
pub async fn fetch_doctors() -> Result<Value, String> {
    let url = doctors_api_url();
    fetch_json(&url).await.map_err(|e| {
        e.as_string()
            .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
            .unwrap_or_else(|| format!("{:?}", e))
    })
}

async fn fetch_json(url: &str) -> Result<Value, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| js_sys::Error::new("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "API error: {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let body = text.as_string().unwrap_or_default();
    parse_payload(&body).map_err(|e| JsValue::from_str(&e.to_string()))
}
