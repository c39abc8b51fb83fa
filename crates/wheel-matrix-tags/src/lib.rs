pub use abi_tag::{AbiTag, ParseAbiTagError};
pub use language_tag::LanguageTag;
pub use platform_tag::{PlatformInstance, PlatformTag};

mod abi_tag;
mod language_tag;
mod platform_tag;
