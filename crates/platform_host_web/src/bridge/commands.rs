use serde_json::Value;

pub(crate) async fn invoke_command(command: &str, args: &Value) -> Result<Value, String> {
    if command.is_empty() {
        return Err("command name must not be empty".to_string());
    }
    super::interop::invoke_command(command, args).await
}
