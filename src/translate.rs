//! String-leaf translation of extracted question JSON.
//!
//! Translation is injected behind the [`Translate`] trait so the JSON walk
//! and the memoization layer stay independent of the backing service. The
//! shipped implementation talks to an Ollama-compatible chat endpoint with
//! a fixed networking-terminology prompt.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Error, Result};

/// A text-to-text translation step.
pub trait Translate {
    fn translate(&mut self, text: &str) -> Result<String>;
}

/// Memoizing wrapper around a translator.
///
/// Caches by exact source string for the duration of one run; repeated
/// option phrases across questions only hit the backend once. Empty and
/// digit-only strings pass through untranslated.
pub struct Memoized<T> {
    inner: T,
    cache: HashMap<String, String>,
}

impl<T: Translate> Memoized<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    /// Number of distinct strings translated so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl<T: Translate> Translate for Memoized<T> {
    fn translate(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        if text.chars().all(|c| c.is_ascii_digit()) {
            return Ok(text.to_string());
        }
        if let Some(hit) = self.cache.get(text) {
            return Ok(hit.clone());
        }
        let translated = self.inner.translate(text)?;
        self.cache.insert(text.to_string(), translated.clone());
        Ok(translated)
    }
}

/// Rewrite every string leaf of a JSON tree through a translator.
///
/// Objects and arrays recurse; numbers, booleans and nulls pass through.
pub fn translate_value(value: &Value, translator: &mut dyn Translate) -> Result<Value> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| Ok((key.clone(), translate_value(val, translator)?)))
            .collect::<Result<serde_json::Map<String, Value>>>()
            .map(Value::Object),
        Value::Array(items) => items
            .iter()
            .map(|item| translate_value(item, translator))
            .collect::<Result<Vec<Value>>>()
            .map(Value::Array),
        Value::String(text) => Ok(Value::String(translator.translate(text)?)),
        other => Ok(other.clone()),
    }
}

/// Translator backed by an Ollama-style `/api/chat` endpoint.
pub struct OllamaTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
}

impl OllamaTranslator {
    /// `endpoint` is the server base URL, e.g. `http://localhost:11434`.
    pub fn new(endpoint: &str, model: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

impl Translate for OllamaTranslator {
    fn translate(&mut self, text: &str) -> Result<String> {
        tracing::debug!(len = text.len(), "translating string");
        let body = serde_json::json!({
            "model": self.model,
            "stream": false,
            "messages": [{ "role": "user", "content": build_prompt(text) }],
        });
        let reply: Value = self
            .client
            .post(format!("{}/api/chat", self.endpoint))
            .json(&body)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::Translate(e.to_string()))?
            .json()
            .map_err(|e| Error::Translate(e.to_string()))?;
        reply["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| Error::Translate("reply carried no message content".to_string()))
    }
}

/// Strict translation prompt for German output; keeps protocol names,
/// flags, acronyms and numbers untouched and pins the common transport- and
/// application-layer terms to their standard German equivalents.
fn build_prompt(text: &str) -> String {
    format!(
        "You are a professional translation engine specialized in Cisco CCNA, networking, \
         and transport-layer terminology.\n\
         Translate the input text to German using the following strict rules:\n\n\
         GENERAL RULES\n\
         - Return ONLY the translated text. No explanations, no comments, no labels, no quotes.\n\
         - Do NOT convert numbers into German words. Keep all numbers exactly as they appear.\n\
         - Preserve technical meaning precisely. Do NOT invent synonyms or reinterpret terms.\n\
         - Keep protocol names, flags, and acronyms unchanged (TCP, UDP, HTTP, ACK, SYN, FIN, SMB, DNS, etc.).\n\
         - Translate consistently and literally, not creatively.\n\n\
         NETWORKING TERMINOLOGY RULES\n\
         Use the correct German technical terms for networking concepts. Examples:\n\
         - \"Source Port\" -> \"Quellport\"\n\
         - \"Destination Port\" -> \"Zielport\"\n\
         - \"Checksum\" -> \"Pr\u{fc}fsumme\"\n\
         - \"Acknowledgment Number\" -> \"Best\u{e4}tigungsnummer\"\n\
         - \"Sequence Number\" -> \"Sequenznummer\"\n\
         - \"Window Size\" -> \"Fenstergr\u{f6}\u{df}e\"\n\
         - \"3-way handshake\" -> \"3-Wege-Handshake\"\n\
         - \"transport layer\" -> \"Transportschicht\"\n\
         - \"application layer\" -> \"Anwendungsschicht\"\n\
         - \"reliable delivery\" -> \"zuverl\u{e4}ssige Zustellung\"\n\n\
         STYLE RULES\n\
         - Keep the tone technical and concise.\n\
         - Do not add punctuation that was not present.\n\
         - Do not reorder or summarize content.\n\n\
         INPUT:\n{text}"
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    struct Upper {
        calls: usize,
    }

    impl Translate for Upper {
        fn translate(&mut self, text: &str) -> Result<String> {
            self.calls += 1;
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn memoized_translator_calls_backend_once_per_distinct_string() {
        let mut t = Memoized::new(Upper { calls: 0 });
        assert_eq!(t.translate("tcp").unwrap(), "TCP");
        assert_eq!(t.translate("tcp").unwrap(), "TCP");
        assert_eq!(t.translate("udp").unwrap(), "UDP");
        assert_eq!(t.inner.calls, 2);
        assert_eq!(t.cached(), 2);
    }

    #[test]
    fn empty_and_digit_strings_pass_through() {
        let mut t = Memoized::new(Upper { calls: 0 });
        assert_eq!(t.translate("").unwrap(), "");
        assert_eq!(t.translate("  ").unwrap(), "  ");
        assert_eq!(t.translate("42").unwrap(), "42");
        assert_eq!(t.inner.calls, 0);
    }

    #[test]
    fn translate_value_rewrites_only_string_leaves() {
        let tree = serde_json::json!([
            { "question": "what is tcp", "options": ["a", "b"], "count": 2, "done": true }
        ]);
        let mut t = Memoized::new(Upper { calls: 0 });
        let translated = translate_value(&tree, &mut t).unwrap();
        assert_eq!(
            translated,
            serde_json::json!([
                { "question": "WHAT IS TCP", "options": ["A", "B"], "count": 2, "done": true }
            ])
        );
    }
}
