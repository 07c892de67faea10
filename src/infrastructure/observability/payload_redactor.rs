use serde_json::Value;

use super::sanitize_prompt;

pub const AUDIO_PLACEHOLDER: &str = "TRUNCATED";

/// Echo of an inbound body that is safe to log: the base64 audio is elided
/// and long text fields are shortened.
pub fn redact_request_body(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(mut fields)) => {
            if fields.contains_key("audioData") {
                fields.insert(
                    "audioData".to_string(),
                    Value::String(AUDIO_PLACEHOLDER.to_string()),
                );
            }
            for key in ["videoDescription", "question", "additionalContext"] {
                if let Some(Value::String(text)) = fields.get_mut(key) {
                    *text = sanitize_prompt(text);
                }
            }
            Value::Object(fields).to_string()
        }
        Ok(_) => "[NON-OBJECT BODY]".to_string(),
        Err(_) => format!("[UNPARSEABLE BODY: {} bytes]", body.len()),
    }
}
