use super::*;
use js_sys::Promise;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function fail(message) {
  throw new Error(message);
}

function resolveInvoke() {
  const tauri = globalThis.__TAURI__;
  if (tauri && tauri.core && typeof tauri.core.invoke === 'function') {
    return tauri.core.invoke;
  }
  const internals = globalThis.__TAURI_INTERNALS__;
  if (internals && typeof internals.invoke === 'function') {
    return internals.invoke;
  }
  return null;
}

export async function jsTauriInvoke(command, args) {
  const invoke = resolveInvoke();
  if (!invoke) {
    fail('Tauri invoke bridge is unavailable in this browser context');
  }
  return await invoke(command, args);
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsTauriInvoke)]
    fn js_tauri_invoke(command: &str, args: JsValue) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn invoke_command(command: &str, args: &Value) -> Result<Value, String> {
    let args = args
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    let value = await_promise(js_tauri_invoke(command, args)).await?;
    if value.is_null() || value.is_undefined() {
        Ok(Value::Null)
    } else {
        from_value(value).map_err(|e| e.to_string())
    }
}

pub async fn fetch_text(url: &str) -> Result<FetchedResource, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let response: web_sys::Response = await_promise(window.fetch_with_str(url))
        .await?
        .dyn_into()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;
    let status = response.status();
    let body = await_promise(response.text().map_err(js_error_to_string)?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(FetchedResource { status, body })
}
