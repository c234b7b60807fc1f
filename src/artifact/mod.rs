//! Derived JSON artifact: data model, codec and file store.
mod codec;
mod store;
mod types;

pub use codec::{
    ArtifactCodec,
    CodecError,
};
pub use store::ArtifactStore;
pub use types::{
    Artifact,
    CatalogMetadata,
    DEFAULT_PLURAL_FORMS,
};
