use super::*;

fn unsupported() -> String {
    "Browser transport APIs are only available when compiled for wasm32".to_string()
}

pub async fn invoke_command(_command: &str, _args: &Value) -> Result<Value, String> {
    Err(unsupported())
}

pub async fn fetch_text(_url: &str) -> Result<FetchedResource, String> {
    Err(unsupported())
}
