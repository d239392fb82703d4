use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::rc::Rc;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// The file the user picked, exactly as it will be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    name: String,
    media_type: String,
    bytes: Rc<[u8]>,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        let media_type = media_type.into();
        Self {
            name: name.into(),
            media_type: if is_valid_media_type(&media_type) {
                media_type
            } else {
                FALLBACK_MEDIA_TYPE.to_string()
            },
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Inline-renderable `data:` URL of a [`SelectedImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview(String);

impl Preview {
    pub fn encode(image: &SelectedImage) -> Self {
        Preview(format!(
            "data:{};base64,{}",
            image.media_type(),
            STANDARD.encode(image.bytes())
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tokens for in-flight file reads. Reads finish in any order; only the
/// one started last may replace the selection.
#[derive(Debug, Default)]
pub struct ReadSequence {
    latest: u64,
}

impl ReadSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// `type/subtype`, optionally followed by `;` parameters.
fn is_valid_media_type(raw: &str) -> bool {
    let is_token = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
    };
    let essence = raw.split(';').next().unwrap_or_default();
    match essence.split_once('/') {
        Some((kind, subtype)) => is_token(kind) && is_token(subtype),
        None => false,
    }
}

/// Best guess at an image media type from a file name's extension.
pub fn media_type_for(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => FALLBACK_MEDIA_TYPE,
    }
}
