pub mod archive;
pub mod filter;
pub mod manifest;
pub mod walk;
