use serde::{Deserialize, Serialize};

/// Text encodings the transcript reader knows how to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "cp1252")]
    Windows1252,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
    #[serde(rename = "latin1")]
    Latin1,
}

/// Windows-1252 mapping for 0x80..=0x9F. `None` marks the five unassigned bytes.
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None,             Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,             Some('\u{017D}'), None,
    None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None,             Some('\u{017E}'), Some('\u{0178}'),
];

/// Default decode order for generated transcripts
pub const DEFAULT_ENCODINGS: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
    TextEncoding::Latin1,
];

impl TextEncoding {
    /// Canonical label, as used in configuration and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Iso8859_1 => "iso-8859-1",
            TextEncoding::Latin1 => "latin1",
        }
    }

    /// Look up an encoding by label. Case-insensitive, accepts common aliases.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Some(TextEncoding::Utf8),
            "cp1252" | "windows-1252" | "win-1252" => Some(TextEncoding::Windows1252),
            "iso-8859-1" | "iso8859-1" | "iso-8859" => Some(TextEncoding::Iso8859_1),
            "latin1" | "latin-1" | "l1" => Some(TextEncoding::Latin1),
            _ => None,
        }
    }

    /// Decode `bytes` strictly. Returns `None` if any byte sequence is invalid
    /// for this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Windows1252 => bytes.iter().map(|&b| decode_windows_1252(b)).collect(),
            TextEncoding::Iso8859_1 | TextEncoding::Latin1 => {
                Some(bytes.iter().map(|&b| char::from(b)).collect())
            }
        }
    }

    /// Whether every byte sequence decodes under this encoding
    pub fn is_total(&self) -> bool {
        matches!(self, TextEncoding::Iso8859_1 | TextEncoding::Latin1)
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextEncoding::from_label(s).ok_or_else(|| format!("unknown text encoding: {}", s))
    }
}

fn decode_windows_1252(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => WINDOWS_1252_HIGH[(byte - 0x80) as usize],
        _ => Some(char::from(byte)),
    }
}

/// Parse a comma-separated list of encoding labels, keeping the given order
pub fn parse_encoding_list(value: &str) -> Result<Vec<TextEncoding>, String> {
    let encodings = value
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<TextEncoding>, String>>()?;

    if encodings.is_empty() {
        return Err("encoding list cannot be empty".to_string());
    }

    Ok(encodings)
}
