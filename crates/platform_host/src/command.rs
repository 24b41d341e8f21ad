//! Remote command contracts and in-memory adapters.
//!
//! A remote command is a named backend operation invoked with a JSON argument bundle. The
//! desktop host routes these to Tauri command handlers; tests use [`MemoryRemoteCommandClient`].

use std::{cell::RefCell, fmt, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Object-safe boxed future used by [`RemoteCommandClient`] async methods.
pub type CommandFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that invokes named backend operations.
pub trait RemoteCommandClient {
    /// Invokes `command` with a JSON object of named arguments and returns the JSON result.
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> CommandFuture<'a, Result<Value, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Command client for hosts without a command backend. Every invocation fails.
pub struct NoopRemoteCommandClient;

impl RemoteCommandClient for NoopRemoteCommandClient {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        _args: Value,
    ) -> CommandFuture<'a, Result<Value, String>> {
        Box::pin(async move {
            Err(format!(
                "remote command `{command}` is unavailable on this host"
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One invocation observed by [`MemoryRemoteCommandClient`].
pub struct RecordedCommand {
    /// Invoked command name.
    pub command: String,
    /// Argument bundle passed to the command.
    pub args: Value,
}

type CommandHandler = dyn Fn(&str, &Value) -> Result<Value, String>;

#[derive(Clone)]
/// In-memory command client that records invocations and answers through a handler closure.
pub struct MemoryRemoteCommandClient {
    calls: Rc<RefCell<Vec<RecordedCommand>>>,
    handler: Rc<CommandHandler>,
}

impl Default for MemoryRemoteCommandClient {
    fn default() -> Self {
        Self::with_handler(|_, _| Ok(Value::Null))
    }
}

impl fmt::Debug for MemoryRemoteCommandClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRemoteCommandClient")
            .field("calls", &self.calls.borrow().len())
            .finish_non_exhaustive()
    }
}

impl MemoryRemoteCommandClient {
    /// Creates a client whose responses are produced by `handler(command, args)`.
    pub fn with_handler(
        handler: impl Fn(&str, &Value) -> Result<Value, String> + 'static,
    ) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            handler: Rc::new(handler),
        }
    }

    /// Returns every invocation observed so far, in call order.
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.borrow().clone()
    }

    /// Returns the invocations of a single command, in call order.
    pub fn calls_to(&self, command: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.command == command)
            .map(|call| call.args.clone())
            .collect()
    }
}

impl RemoteCommandClient for MemoryRemoteCommandClient {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> CommandFuture<'a, Result<Value, String>> {
        Box::pin(async move {
            let result = (self.handler)(command, &args);
            self.calls.borrow_mut().push(RecordedCommand {
                command: command.to_string(),
                args,
            });
            result
        })
    }
}

/// Serializes `args`, invokes `command`, and deserializes the typed result.
///
/// # Errors
///
/// Returns an error when argument serialization, the command itself, or result
/// deserialization fails.
pub async fn invoke_command_with<C, A, R>(client: &C, command: &str, args: &A) -> Result<R, String>
where
    C: RemoteCommandClient + ?Sized,
    A: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let args = serde_json::to_value(args).map_err(|e| e.to_string())?;
    let value = client.invoke(command, args).await?;
    serde_json::from_value(value)
        .map_err(|e| format!("unexpected `{command}` result payload: {e}"))
}
