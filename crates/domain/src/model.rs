// crates/domain/src/model.rs
pub mod decoded_file;

pub use decoded_file::DecodedFile;
