const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Strips a leading ```` ```json ```` marker and one trailing ```` ``` ````
/// from model output. The marker must be the very first thing in the text;
/// anything else is returned unchanged for the JSON parser to judge.
pub fn strip_code_fence(text: &str) -> &str {
    let Some(body) = text.strip_prefix(JSON_FENCE) else {
        return text;
    };

    let body = body.trim_end();
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}
