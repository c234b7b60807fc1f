//! GNU `.mo` catalog decoding.
//!
//! Layout (all integers 32-bit, byte order given by the magic number):
//!
//! | offset | field                                  |
//! |--------|----------------------------------------|
//! | 0      | magic `0x950412de`                     |
//! | 4      | revision                               |
//! | 8      | number of strings `N`                  |
//! | 12     | offset of original string table        |
//! | 16     | offset of translated string table      |
//! | 20     | hash table size (unused here)          |
//! | 24     | hash table offset (unused here)        |
//!
//! Each string table holds `N` `(length, offset)` descriptors.

use super::{
    Catalog,
    CatalogError,
    CatalogReader,
};
use crate::types::contextual_key;

/// Magic number as read with the byte order the file was written in.
const MO_MAGIC: u32 = 0x9504_12de;

/// Header size in bytes.
const HEADER_SIZE: usize = 28;

/// Size of one `(length, offset)` string descriptor.
const DESCRIPTOR_SIZE: usize = 8;

/// Separates context from msgid.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// Separates singular from plural msgid, and translated plural forms.
const PLURAL_SEPARATOR: char = '\0';

/// Reads GNU gettext `.mo` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoCatalogReader;

impl CatalogReader for MoCatalogReader {
    fn read_catalog(&self, bytes: &[u8]) -> Result<Catalog, CatalogError> {
        let file = MoFile::parse(bytes)?;
        let mut catalog = Catalog::default();

        for index in 0..file.count {
            let msgid = file.string(file.originals, index)?;
            let msgstr = file.string(file.translations, index)?;

            if msgid.is_empty() {
                catalog.headers.extend(parse_headers(&msgstr));
                continue;
            }

            let key = entry_key(&msgid);
            let variants: Vec<String> = msgstr.split(PLURAL_SEPARATOR).map(str::to_string).collect();
            if variants.iter().all(String::is_empty) {
                tracing::debug!(key, "Skipping untranslated catalog entry");
                continue;
            }
            catalog.entries.insert(key, variants);
        }

        Ok(catalog)
    }
}

/// Builds the table key of a msgid.
///
/// `context\x04text` becomes `context ++ text`; `single\0plural` is keyed by `single`.
fn entry_key(msgid: &str) -> String {
    let singular = msgid.split(PLURAL_SEPARATOR).next().unwrap_or(msgid);
    match singular.split_once(CONTEXT_SEPARATOR) {
        Some((context, text)) => contextual_key(context, text),
        None => singular.to_string(),
    }
}

/// Parses `Name: value` header lines. Lines without a colon are ignored.
fn parse_headers(header: &str) -> impl Iterator<Item = (String, String)> + '_ {
    header.lines().filter_map(|line| {
        let (name, value) = line.split_once(':')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.trim().to_string()))
    })
}

/// Validated view of a `.mo` byte buffer.
struct MoFile<'a> {
    /// Whole file contents.
    data: &'a [u8],
    /// Whether integers are little-endian.
    little_endian: bool,
    /// Number of strings in each table.
    count: usize,
    /// Offset of the original string descriptors.
    originals: usize,
    /// Offset of the translated string descriptors.
    translations: usize,
}

impl<'a> MoFile<'a> {
    /// Reads the header and detects the byte order.
    fn parse(data: &'a [u8]) -> Result<Self, CatalogError> {
        if data.len() < HEADER_SIZE {
            return Err(CatalogError::TooSmall(data.len()));
        }

        let magic = read_u32(data, 0, true)?;
        let little_endian = if magic == MO_MAGIC {
            true
        } else if magic.swap_bytes() == MO_MAGIC {
            false
        } else {
            return Err(CatalogError::InvalidMagic(magic));
        };

        let revision = read_u32(data, 4, little_endian)?;
        // Only the major revision (upper half) changes the layout.
        if revision >> 16 != 0 {
            return Err(CatalogError::UnsupportedRevision(revision));
        }

        Ok(Self {
            data,
            little_endian,
            count: read_usize(data, 8, little_endian)?,
            originals: read_usize(data, 12, little_endian)?,
            translations: read_usize(data, 16, little_endian)?,
        })
    }

    /// Reads the `index`-th string of the table at `table`.
    fn string(&self, table: usize, index: usize) -> Result<String, CatalogError> {
        let descriptor = index
            .checked_mul(DESCRIPTOR_SIZE)
            .and_then(|offset| offset.checked_add(table))
            .ok_or(CatalogError::OutOfBounds("string descriptor"))?;

        let length = read_usize(self.data, descriptor, self.little_endian)?;
        let offset = read_usize(self.data, descriptor + 4, self.little_endian)?;

        let bytes = offset
            .checked_add(length)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(CatalogError::OutOfBounds("string data"))?;

        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Reads a `u32` at `offset`.
fn read_u32(data: &[u8], offset: usize, little_endian: bool) -> Result<u32, CatalogError> {
    let bytes: [u8; 4] = offset
        .checked_add(4)
        .and_then(|end| data.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(CatalogError::OutOfBounds("string descriptor"))?;

    Ok(if little_endian { u32::from_le_bytes(bytes) } else { u32::from_be_bytes(bytes) })
}

/// Reads a `u32` at `offset` as an offset or length.
fn read_usize(data: &[u8], offset: usize, little_endian: bool) -> Result<usize, CatalogError> {
    let value = read_u32(data, offset, little_endian)?;
    usize::try_from(value).map_err(|_| CatalogError::OutOfBounds("header value"))
}
