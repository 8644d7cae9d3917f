use std::path::Path;

use encoding_rs::Encoding;
use warodai_core::LoadError;

pub struct WarodaiLoader;

impl WarodaiLoader {
    /// Resolve a WHATWG encoding label such as `utf-16le`
    pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, LoadError> {
        Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| LoadError::UnknownEncoding(label.to_string()))
    }

    /// Decode the whole source; a BOM overrides `encoding`
    pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String, LoadError> {
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(LoadError::Malformed {
                encoding: used.name(),
            });
        }

        if used != encoding {
            tracing::debug!("Byte order mark selected {} over {}", used.name(), encoding.name());
        }

        Ok(text.into_owned())
    }

    /// Load the dictionary source text from file path
    pub fn load_from_file(path: &Path, encoding_label: &str) -> Result<String, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let encoding = Self::resolve_encoding(encoding_label)?;
        tracing::info!("Loading {} as {}", path.display(), encoding.name());

        let bytes = std::fs::read(path)?;
        let text = Self::decode_bytes(&bytes, encoding)?;
        tracing::info!("Decoded {} bytes into {} characters", bytes.len(), text.chars().count());

        Ok(text)
    }
}
