use serde_json::{json, Map, Value};

/// Deprecated image block tag still emitted by older browser clients.
const DEPRECATED_IMAGE_KIND: &str = "input_image";
/// The one image block shape the chat-completions API accepts.
const CANONICAL_IMAGE_KIND: &str = "image_url";

/// Ordered fallback list for recovering a URL out of a deprecated image
/// block. The first field that is present wins.
const URL_FIELDS: [&str; 4] = ["image_url", "image", "url", "data"];

/// Rewrites non-canonical image content blocks in every message whose
/// content is a list of blocks. Messages with plain-string content pass
/// through untouched. Idempotent: every output shape is already canonical
/// and matches none of the rewrite conditions on a second pass.
pub fn sanitize_messages(messages: Vec<Value>) -> Vec<Value> {
    messages.into_iter().map(sanitize_message).collect()
}

fn sanitize_message(mut message: Value) -> Value {
    let Some(obj) = message.as_object_mut() else {
        return message;
    };
    if let Some(Value::Array(blocks)) = obj.get_mut("content") {
        let repaired = std::mem::take(blocks);
        *blocks = sanitize_content_blocks(repaired);
    }
    message
}

/// Repairs one message's content blocks. Malformed blocks degrade to an
/// empty image reference rather than aborting the request.
pub fn sanitize_content_blocks(blocks: Vec<Value>) -> Vec<Value> {
    blocks.into_iter().map(sanitize_block).collect()
}

fn sanitize_block(block: Value) -> Value {
    let Some(obj) = block.as_object() else {
        return block;
    };
    match obj.get("type").and_then(Value::as_str) {
        Some(DEPRECATED_IMAGE_KIND) => json!({
            "type": CANONICAL_IMAGE_KIND,
            "image_url": { "url": recover_url(obj) },
        }),
        Some(CANONICAL_IMAGE_KIND) => {
            // Legacy shape: the image_url value is a bare string instead
            // of a {url} object.
            match obj.get(CANONICAL_IMAGE_KIND).and_then(Value::as_str) {
                Some(url) => json!({
                    "type": CANONICAL_IMAGE_KIND,
                    "image_url": { "url": url },
                }),
                None => block,
            }
        }
        _ => block,
    }
}

fn recover_url(obj: &Map<String, Value>) -> String {
    for field in URL_FIELDS {
        let Some(value) = obj.get(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        return match value {
            Value::String(s) => s.clone(),
            Value::Object(nested) => nested
                .get("url")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };
    }
    String::new()
}
