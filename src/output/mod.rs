//! JSON envelope shared by every subcommand. Agents key off `status`
//! and read the payload from `data`; `--human` output lives in [`human`].

pub mod human;

use serde_json::{Value, json};

fn envelope(status: &str, command: &str, data: Value, error: Value) -> Value {
    json!({
        "status": status,
        "command": command,
        "data": data,
        "error": error
    })
}

/// Wrap a command's payload in the success envelope.
pub fn success(command: &str, data: Value) -> Value {
    envelope("ok", command, data, Value::Null)
}

/// Error envelope with a machine-readable code and a human message.
pub fn error(command: &str, code: &str, message: &str) -> Value {
    envelope(
        "error",
        command,
        Value::Null,
        json!({ "code": code, "message": message }),
    )
}
