//! Rust implementation of the NIfTI-1 header format.
//!
//! This crate decodes the fixed 348-byte header that precedes the
//! voxel data of a `.nii` file (or makes up the start of the `.hdr`
//! file in a `.hdr`/`.img` pair) from an in-memory byte buffer. The
//! byte order is supplied by the caller, since the header region does
//! not describe its own endianness.
//!
//! The voxel payload itself, the NIfTI-2 variant and writing headers
//! back to bytes are out of scope.
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

pub mod cursor;
pub mod error;
pub mod header;
pub mod typedef;

pub use crate::cursor::ByteCursor;
pub use crate::error::{NiftiError, Result};
pub use crate::header::{DataHistory, HeaderKey, ImageDimension, NiftiHeader};
pub use byteordered::Endianness;
