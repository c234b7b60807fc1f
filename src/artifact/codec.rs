//! JSON encoding of [`Artifact`]s.
//!
//! ```json
//! {
//!     "translation-revision-date": 1700000000,
//!     "generator": "system",
//!     "domain": "messages",
//!     "locale_data": {
//!         "messages": {
//!             "": { "domain": "messages", "plural-forms": "nplurals=2; plural=n != 1;", "lang": "fr_FR" },
//!             "Hello": ["Bonjour"]
//!         }
//!     }
//! }
//! ```
//!
//! The metadata row shares the `messages` map with the translations and is told apart
//! only by its empty key. Decoding lifts it into [`CatalogMetadata`].

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
};
use thiserror::Error;

use super::{
    Artifact,
    CatalogMetadata,
    DEFAULT_PLURAL_FORMS,
};
use crate::types::{
    METADATA_KEY,
    TranslationTable,
    TranslationVariants,
};

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode artifact: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode artifact: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Artifact row '{0}' has the wrong shape")]
    MisplacedRow(String),
}

/// Encodes and decodes artifacts.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactCodec {
    /// Four-space indented output when set, compact otherwise.
    pretty: bool,
}

impl Default for ArtifactCodec {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ArtifactCodec {
    #[must_use]
    pub const fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes an artifact. Equal artifacts always produce equal bytes.
    pub fn encode(&self, artifact: &Artifact) -> Result<Vec<u8>, CodecError> {
        let metadata = &artifact.metadata;
        let document = DocumentOut {
            revision_time: metadata.revision_time,
            generator: &metadata.generator,
            domain: &metadata.domain,
            locale_data: LocaleDataOut {
                messages: MessagesOut {
                    header: MetadataRow {
                        domain: metadata.domain.clone(),
                        plural_forms: Some(metadata.plural_rule.clone()),
                        lang: metadata.locale.clone(),
                    },
                    table: &artifact.messages,
                },
            },
        };

        let mut out = Vec::new();
        if self.pretty {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            document.serialize(&mut serializer).map_err(CodecError::Encode)?;
        } else {
            serde_json::to_writer(&mut out, &document).map_err(CodecError::Encode)?;
        }
        Ok(out)
    }

    /// Parses an artifact, separating the metadata row from the translations.
    pub fn decode(&self, bytes: &[u8]) -> Result<Artifact, CodecError> {
        let document: DocumentIn = serde_json::from_slice(bytes).map_err(CodecError::Decode)?;

        let mut header = None;
        let mut messages = TranslationTable::new();
        for (key, row) in document.locale_data.messages {
            if key == METADATA_KEY {
                header = Some(Self::decode_metadata_row(row)?);
            } else {
                let variants = serde_json::from_value::<TranslationVariants>(row)
                    .map_err(|_| CodecError::MisplacedRow(key.clone()))?;
                messages.insert(key, variants);
            }
        }

        let header = header.unwrap_or_default();
        Ok(Artifact {
            metadata: CatalogMetadata {
                revision_time: document.revision_time,
                generator: document.generator,
                domain: document.domain,
                locale: header.lang,
                plural_rule: header.plural_forms.unwrap_or_else(|| DEFAULT_PLURAL_FORMS.to_string()),
            },
            messages,
        })
    }

    /// The `""` row must be an object; any other shape is misplaced.
    fn decode_metadata_row(row: serde_json::Value) -> Result<MetadataRow, CodecError> {
        let misplaced = || CodecError::MisplacedRow(METADATA_KEY.to_string());
        if !row.is_object() {
            return Err(misplaced());
        }
        serde_json::from_value(row).map_err(|_| misplaced())
    }
}

/// The `""` row of `locale_data.messages`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct MetadataRow {
    #[serde(default)]
    domain: String,
    #[serde(rename = "plural-forms", default)]
    plural_forms: Option<String>,
    #[serde(default)]
    lang: String,
}

#[derive(Debug, Deserialize)]
struct DocumentIn {
    #[serde(rename = "translation-revision-date")]
    revision_time: i64,
    #[serde(default)]
    generator: String,
    #[serde(default)]
    domain: String,
    locale_data: LocaleDataIn,
}

#[derive(Debug, Deserialize)]
struct LocaleDataIn {
    /// Rows are typed by key: `""` is the metadata row, every other key holds variants.
    messages: BTreeMap<String, serde_json::Value>,
}

/// Field order here is the on-disk key order.
#[derive(Serialize)]
struct DocumentOut<'a> {
    #[serde(rename = "translation-revision-date")]
    revision_time: i64,
    generator: &'a str,
    domain: &'a str,
    locale_data: LocaleDataOut<'a>,
}

#[derive(Serialize)]
struct LocaleDataOut<'a> {
    messages: MessagesOut<'a>,
}

/// Writes the metadata row first, then the table in key order.
struct MessagesOut<'a> {
    header: MetadataRow,
    table: &'a TranslationTable,
}

impl Serialize for MessagesOut<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.len() + 1))?;
        map.serialize_entry(METADATA_KEY, &self.header)?;
        for (key, variants) in self.table.iter() {
            map.serialize_entry(key, variants)?;
        }
        map.end()
    }
}
