//! zstd error codes and the safe layer's construction errors.
//!
//! The raw adapter never converts anything: it hands back the library's
//! `size_t` codes and null handles untouched. These types exist for callers
//! (and for [`crate::workspace`]) that prefer a `Result`.

use core::fmt;

/// A `size_t` result from zstd: a byte count, or an error code recognised by
/// `ZSTD_isError`.
pub type ErrorCode = usize;

/// Returns `true` if `code` is a zstd error (equivalent to `ZSTD_isError`).
#[inline]
pub fn is_error(code: ErrorCode) -> bool {
    unsafe { zstd_sys::ZSTD_isError(code) != 0 }
}

/// Human-readable name for a zstd result code (`ZSTD_getErrorName`).
pub fn error_name(code: ErrorCode) -> &'static str {
    // SAFETY: zstd returns a pointer into its static error-string table.
    let name = unsafe { core::ffi::CStr::from_ptr(zstd_sys::ZSTD_getErrorName(code)) };
    name.to_str().unwrap_or("Unspecified error code")
}

/// Split a zstd result into `Ok(bytes)` or `Err(ZstdError)`.
#[inline]
pub fn parse_code(code: ErrorCode) -> Result<usize, ZstdError> {
    if is_error(code) {
        Err(ZstdError(code))
    } else {
        Ok(code)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ZstdError
// ─────────────────────────────────────────────────────────────────────────────

/// A library error code, kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZstdError(ErrorCode);

impl ZstdError {
    /// The raw `size_t` code as returned by zstd.
    pub fn code(&self) -> ErrorCode {
        self.0
    }

    /// Equivalent to `ZSTD_getErrorName` on the raw code.
    pub fn name(&self) -> &'static str {
        error_name(self.0)
    }
}

impl fmt::Display for ZstdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zstd error: {}", self.name())
    }
}

impl std::error::Error for ZstdError {}

// ─────────────────────────────────────────────────────────────────────────────
// InitError
// ─────────────────────────────────────────────────────────────────────────────

/// Why a static context or stream could not be built in a workspace.
///
/// The raw adapter reports all of these as a null handle; the safe layer
/// tells them apart after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The workspace was empty (null pointer at the C boundary).
    NullWorkspace,
    /// The workspace is smaller than the library's own estimate.
    WorkspaceTooSmall { needed: usize, provided: usize },
    /// The workspace is not aligned to [`crate::config::WORKSPACE_ALIGN`].
    Misaligned,
    /// zstd rejected the construction (e.g. invalid parameters).
    InitFailed,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NullWorkspace => f.write_str("workspace is null"),
            InitError::WorkspaceTooSmall { needed, provided } => write!(
                f,
                "workspace too small: {provided} bytes provided, {needed} bytes needed"
            ),
            InitError::Misaligned => f.write_str("workspace is not 8-byte aligned"),
            InitError::InitFailed => f.write_str("zstd failed to initialise the context"),
        }
    }
}

impl std::error::Error for InitError {}
