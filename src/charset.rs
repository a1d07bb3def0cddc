//! Character encodings for text copy, write and read operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte emitted for characters a charset cannot represent.
const UNMAPPABLE: u8 = b'?';

/// Supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Charset {
    /// UTF-8 (default).
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16, big endian, no byte order mark.
    #[serde(rename = "utf-16be")]
    Utf16Be,
    /// UTF-16, little endian, no byte order mark.
    #[serde(rename = "utf-16le")]
    Utf16Le,
    /// ISO-8859-1.
    #[serde(rename = "iso-8859-1", alias = "latin1")]
    Latin1,
    /// US-ASCII.
    #[serde(rename = "us-ascii", alias = "ascii")]
    Ascii,
}

impl Charset {
    /// Encode text, replacing unrepresentable characters with `?`.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Charset::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(UNMAPPABLE))
                .collect(),
            Charset::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { UNMAPPABLE })
                .collect(),
        }
    }

    /// Decode bytes, replacing malformed input with U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Charset::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            Charset::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            Charset::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Charset::Ascii => bytes
                .iter()
                .map(|&b| {
                    if b.is_ascii() {
                        char::from(b)
                    } else {
                        char::REPLACEMENT_CHARACTER
                    }
                })
                .collect(),
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();

    let mut text: String = char::decode_utf16(chunks.map(|pair| unit([pair[0], pair[1]])))
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Utf8 => write!(f, "utf-8"),
            Charset::Utf16Be => write!(f, "utf-16be"),
            Charset::Utf16Le => write!(f, "utf-16le"),
            Charset::Latin1 => write!(f, "iso-8859-1"),
            Charset::Ascii => write!(f, "us-ascii"),
        }
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "utf-16be" => Ok(Charset::Utf16Be),
            "utf-16le" => Ok(Charset::Utf16Le),
            "iso-8859-1" | "latin1" => Ok(Charset::Latin1),
            "us-ascii" | "ascii" => Ok(Charset::Ascii),
            _ => Err(format!("Unknown charset: {}", s)),
        }
    }
}
