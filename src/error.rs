//! Error types for header decoding.

use quick_error::quick_error;

quick_error! {
    /// Error type for the whole crate.
    #[derive(Debug, Clone, PartialEq)]
    pub enum NiftiError {
        /// A typed read would pass the end of the header buffer.
        /// Carries the offset the read started at, the number of bytes
        /// requested, and the buffer's total length.
        Truncated(offset: usize, count: usize, len: usize) {
            display("truncated header: {} byte read at offset {} passes end of {} byte buffer",
                count, offset, len)
        }
        /// A code field holds a value with no meaning in NIfTI-1.
        /// Only produced by the validated accessors, never by decoding.
        InvalidCode(ident: &'static str, code: i16) {
            display("invalid {} code: {}", ident, code)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, NiftiError>;
