//! zstd-compat: the pre-1.4.6 zstd function surface on the current library.
//!
//! Callers written against the legacy static-workspace API
//! (`ZSTD_initCCtx`, `ZSTD_initCStream(params, pledgedSrcSize, wksp, size)`,
//! `ZSTD_getFrameParams`, `ZSTD_compressCCtx(..., params)`, the
//! `*WorkspaceBound` queries) keep compiling and behaving the same while the
//! vendored zstd moves on. Each legacy call forwards to the current API:
//!
//! - [`compat`]    : the translations, generic over [`api::ZstdApi`]
//! - [`legacy`]    : the translations under their legacy names
//! - [`abi`]       : `#[no_mangle]` C exports (feature `c-abi`)
//! - [`workspace`] : borrow-checked handles built on [`compat`]
//!
//! The layer only exists when the zstd headers are 1.4.6 or newer
//! (`cfg(zstd_compat)`, set by build.rs); older headers already provide the
//! legacy names.

pub mod api;
pub mod config;
pub mod error;

#[cfg(zstd_compat)]
pub mod compat;
#[cfg(zstd_compat)]
pub mod legacy;
#[cfg(zstd_compat)]
pub mod workspace;
#[cfg(all(zstd_compat, feature = "c-abi"))]
pub mod abi;

pub use config::{
    compat_layer_active, version_number, version_string, COMPAT_MIN_VERSION_NUMBER,
    ZSTD_CONTENTSIZE_UNKNOWN,
};
pub use error::{is_error, InitError, ZstdError};

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use api::{CompressionParameters, FrameHeader, FrameParams, Native, Parameters, ZstdApi};
#[cfg(zstd_compat)]
pub use compat::LegacyAdapter;
#[cfg(zstd_compat)]
pub use workspace::{StaticCCtx, StaticCStream, StaticDCtx, StaticDStream, StreamProgress, Workspace};
