//! Request and response bodies for `POST /edit_text`.

use serde::{Deserialize, Serialize};

/// The body posted to the revision server.
///
/// The instruction travels as `user_prompt`, which is the key the server
/// expects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub text: String,
    #[serde(rename = "user_prompt")]
    pub instruction: String,
}

impl EditRequest {
    pub fn new(text: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            instruction: instruction.into(),
        }
    }
}

/// One sentence of server feedback.
///
/// The server sends `null` for sentences that need no change, and older
/// builds omit the keys entirely. Both land as `None` / empty here.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceRevision {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub original_sentence: String,
    #[serde(default)]
    pub revised_sentence: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
