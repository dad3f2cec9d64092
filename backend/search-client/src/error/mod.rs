pub mod archive;
pub mod codec;
pub mod search_api;

pub use archive::ArchiveError;
pub use codec::CodecError;
pub use search_api::SearchApiError;
