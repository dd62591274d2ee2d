use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// How `read_file` should interpret file contents.
///
/// The numeric codes 0-3 are part of the service contract and preserved by
/// `from_code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadFormat {
    Text,
    DataUrl,
    BinaryString,
    ArrayBuffer,
}

impl Default for ReadFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl ReadFormat {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Text),
            1 => Some(Self::DataUrl),
            2 => Some(Self::BinaryString),
            3 => Some(Self::ArrayBuffer),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Text => 0,
            Self::DataUrl => 1,
            Self::BinaryString => 2,
            Self::ArrayBuffer => 3,
        }
    }
}

impl std::str::FromStr for ReadFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown read format code {code}"));
        }
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "text" => Ok(Self::Text),
            "dataurl" => Ok(Self::DataUrl),
            "binarystring" => Ok(Self::BinaryString),
            "arraybuffer" => Ok(Self::ArrayBuffer),
            _ => Err(format!("unknown read format {s:?}")),
        }
    }
}

/// File contents in the representation selected by a `ReadFormat`
#[derive(Clone, Debug, PartialEq)]
pub enum FileData {
    /// UTF-8 text, invalid sequences replaced
    Text(String),
    /// `data:<mime>;base64,<payload>`
    DataUrl(String),
    /// One char per byte, U+0000 through U+00FF
    Binary(String),
    /// Raw bytes
    Buffer(Bytes),
}

impl FileData {
    pub fn format(&self) -> ReadFormat {
        match self {
            Self::Text(_) => ReadFormat::Text,
            Self::DataUrl(_) => ReadFormat::DataUrl,
            Self::Binary(_) => ReadFormat::BinaryString,
            Self::Buffer(_) => ReadFormat::ArrayBuffer,
        }
    }

    /// String payload for the three string-shaped formats
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::DataUrl(s) | Self::Binary(s) => Some(s),
            Self::Buffer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_contract() {
        assert_eq!(ReadFormat::from_code(0), Some(ReadFormat::Text));
        assert_eq!(ReadFormat::from_code(1), Some(ReadFormat::DataUrl));
        assert_eq!(ReadFormat::from_code(2), Some(ReadFormat::BinaryString));
        assert_eq!(ReadFormat::from_code(3), Some(ReadFormat::ArrayBuffer));
        assert_eq!(ReadFormat::from_code(4), None);

        for code in 0..4 {
            assert_eq!(ReadFormat::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(ReadFormat::default(), ReadFormat::Text);
    }

    #[test]
    fn test_from_str_accepts_names_and_codes() {
        assert_eq!("text".parse::<ReadFormat>().unwrap(), ReadFormat::Text);
        assert_eq!("data-url".parse::<ReadFormat>().unwrap(), ReadFormat::DataUrl);
        assert_eq!(
            "binarystring".parse::<ReadFormat>().unwrap(),
            ReadFormat::BinaryString
        );
        assert_eq!("3".parse::<ReadFormat>().unwrap(), ReadFormat::ArrayBuffer);
        assert!("7".parse::<ReadFormat>().is_err());
        assert!("xml".parse::<ReadFormat>().is_err());
    }
}
