//! Legacy zstd entry points re-expressed on the current API.
//!
//! zstd 1.4.6 renamed or restructured the static-workspace and streaming
//! entry points that older callers were written against. Each function here
//! keeps the legacy signature and forwards to the current library, so call
//! sites can be migrated one at a time.
//!
//! ## Function Map
//!
//! | Legacy C function              | Current API                              | Rust                         |
//! |--------------------------------|------------------------------------------|------------------------------|
//! | `ZSTD_CCtxWorkspaceBound`      | `ZSTD_estimateCCtxSize_usingCParams`     | [`cctx_workspace_bound`]     |
//! | `ZSTD_CStreamWorkspaceBound`   | `ZSTD_estimateCStreamSize_usingCParams`  | [`cstream_workspace_bound`]  |
//! | `ZSTD_DCtxWorkspaceBound`      | `ZSTD_estimateDCtxSize`                  | [`dctx_workspace_bound`]     |
//! | `ZSTD_DStreamWorkspaceBound`   | `ZSTD_estimateDStreamSize`               | [`dstream_workspace_bound`]  |
//! | `ZSTD_initCCtx`                | `ZSTD_initStaticCCtx`                    | [`init_cctx`]                |
//! | `ZSTD_initCStream`             | `ZSTD_initStaticCStream` + `ZSTD_initCStream_advanced` | [`init_cstream_compat`] |
//! | `ZSTD_initDCtx`                | `ZSTD_initStaticDCtx`                    | [`init_dctx`]                |
//! | `ZSTD_initDStream`             | `ZSTD_initStaticDStream`                 | [`init_dstream_compat`]      |
//! | `ZSTD_getFrameParams`          | `ZSTD_getFrameHeader`                    | [`get_frame_params`]         |
//! | `ZSTD_compressCCtx`            | `ZSTD_compress_advanced`                 | [`compress_cctx_compat`]     |
//!
//! Errors are the library's own: a null handle when a context cannot be
//! built, a `size_t` code recognised by `ZSTD_isError` otherwise. Nothing is
//! logged, wrapped or retried here.
//!
//! Every function is also a method on [`LegacyAdapter`], which is generic
//! over the [`ZstdApi`] it forwards to. The free functions use [`Native`].

use core::ptr;

use libc::c_void;

use crate::api::{
    CompressionParameters, FrameParams, Native, Parameters, ZstdApi, ZSTD_CCtx, ZSTD_CStream,
    ZSTD_DCtx, ZSTD_DStream,
};
use crate::config::{LEGACY_CONTENTSIZE_UNKNOWN, ZSTD_CONTENTSIZE_UNKNOWN};

/// Translate a legacy pledged source size to the current convention.
///
/// `0` meant "unknown" in the legacy API; the current API reads `0` as "the
/// source is empty" and reserves [`ZSTD_CONTENTSIZE_UNKNOWN`] for unknown.
#[inline]
pub const fn pledged_src_size_from_legacy(pledged_src_size: u64) -> u64 {
    if pledged_src_size == LEGACY_CONTENTSIZE_UNKNOWN {
        ZSTD_CONTENTSIZE_UNKNOWN
    } else {
        pledged_src_size
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LegacyAdapter
// ─────────────────────────────────────────────────────────────────────────────

/// The legacy surface, bound to one implementation of the current API.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyAdapter<A: ZstdApi = Native> {
    api: A,
}

impl LegacyAdapter<Native> {
    /// The adapter over the linked zstd library.
    pub const NATIVE: Self = LegacyAdapter { api: Native };
}

impl<A: ZstdApi> LegacyAdapter<A> {
    pub const fn new(api: A) -> Self {
        LegacyAdapter { api }
    }

    /// The wrapped implementation.
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cctx_workspace_bound(&self, cparams: CompressionParameters) -> usize {
        self.api.estimate_cctx_size_using_cparams(cparams)
    }

    pub fn cstream_workspace_bound(&self, cparams: CompressionParameters) -> usize {
        self.api.estimate_cstream_size_using_cparams(cparams)
    }

    pub fn dctx_workspace_bound(&self) -> usize {
        self.api.estimate_dctx_size()
    }

    /// `window_size` narrows to `size_t` exactly as the C call did.
    pub fn dstream_workspace_bound(&self, window_size: u64) -> usize {
        self.api.estimate_dstream_size(window_size as usize)
    }

    /// Build a compression context in `wksp`.
    ///
    /// # Safety
    /// `wksp` must be null or valid for reads and writes of `wksp_size`
    /// bytes for as long as the returned context is used.
    pub unsafe fn init_cctx(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_CCtx {
        if wksp.is_null() {
            return ptr::null_mut();
        }
        self.api.init_static_cctx(wksp, wksp_size)
    }

    /// Build a compression stream in `wksp` and start a frame with `params`.
    ///
    /// A `pledged_src_size` of `0` means "unknown", as in the legacy API.
    /// Returns null if the workspace is null, the stream cannot be built, or
    /// the library rejects the parameters.
    ///
    /// # Safety
    /// As [`LegacyAdapter::init_cctx`].
    pub unsafe fn init_cstream_compat(
        &self,
        params: Parameters,
        pledged_src_size: u64,
        wksp: *mut c_void,
        wksp_size: usize,
    ) -> *mut ZSTD_CStream {
        if wksp.is_null() {
            return ptr::null_mut();
        }

        let cstream = self.api.init_static_cstream(wksp, wksp_size);
        if cstream.is_null() {
            return ptr::null_mut();
        }

        let pledged_src_size = pledged_src_size_from_legacy(pledged_src_size);
        let ret = self
            .api
            .init_cstream_advanced(cstream, ptr::null(), 0, params, pledged_src_size);
        if self.api.is_error(ret) {
            return ptr::null_mut();
        }

        cstream
    }

    /// Build a decompression context in `wksp`.
    ///
    /// # Safety
    /// As [`LegacyAdapter::init_cctx`].
    pub unsafe fn init_dctx(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DCtx {
        if wksp.is_null() {
            return ptr::null_mut();
        }
        self.api.init_static_dctx(wksp, wksp_size)
    }

    /// Build a decompression stream in `wksp`.
    ///
    /// `window_size` is accepted for signature compatibility only; the
    /// current library reads the window size from each frame.
    ///
    /// # Safety
    /// As [`LegacyAdapter::init_cctx`].
    pub unsafe fn init_dstream_compat(
        &self,
        _window_size: u64,
        wksp: *mut c_void,
        wksp_size: usize,
    ) -> *mut ZSTD_DStream {
        if wksp.is_null() {
            return ptr::null_mut();
        }
        self.api.init_static_dstream(wksp, wksp_size)
    }

    /// Parse a frame header into `frame_params`. Returns `0` on success, the
    /// number of bytes still needed if `src` is too short, or an error code.
    ///
    /// # Safety
    /// `frame_params` must be writable; `src` must be valid for `src_size`
    /// bytes.
    pub unsafe fn get_frame_params(
        &self,
        frame_params: *mut FrameParams,
        src: *const c_void,
        src_size: usize,
    ) -> usize {
        self.api.get_frame_header(frame_params, src, src_size)
    }

    /// Compress `src` into `dst` as one frame, with no dictionary.
    ///
    /// # Safety
    /// `cctx` must be a live context; `dst` valid for `dst_capacity` bytes of
    /// writes; `src` valid for `src_size` bytes of reads.
    pub unsafe fn compress_cctx_compat(
        &self,
        cctx: *mut ZSTD_CCtx,
        dst: *mut c_void,
        dst_capacity: usize,
        src: *const c_void,
        src_size: usize,
        params: Parameters,
    ) -> usize {
        self.api
            .compress_advanced(cctx, dst, dst_capacity, src, src_size, ptr::null(), 0, params)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions over the linked library
// ─────────────────────────────────────────────────────────────────────────────

/// Workspace bytes needed by [`init_cctx`] for `cparams`.
#[inline]
pub fn cctx_workspace_bound(cparams: CompressionParameters) -> usize {
    LegacyAdapter::NATIVE.cctx_workspace_bound(cparams)
}

/// Workspace bytes needed by [`init_cstream_compat`] for `cparams`.
#[inline]
pub fn cstream_workspace_bound(cparams: CompressionParameters) -> usize {
    LegacyAdapter::NATIVE.cstream_workspace_bound(cparams)
}

/// Workspace bytes needed by [`init_dctx`].
#[inline]
pub fn dctx_workspace_bound() -> usize {
    LegacyAdapter::NATIVE.dctx_workspace_bound()
}

/// Workspace bytes needed by [`init_dstream_compat`] for frames whose window
/// is at most `window_size`.
#[inline]
pub fn dstream_workspace_bound(window_size: u64) -> usize {
    LegacyAdapter::NATIVE.dstream_workspace_bound(window_size)
}

/// See [`LegacyAdapter::init_cctx`].
///
/// # Safety
/// As [`LegacyAdapter::init_cctx`].
#[inline]
pub unsafe fn init_cctx(wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_CCtx {
    LegacyAdapter::NATIVE.init_cctx(wksp, wksp_size)
}

/// See [`LegacyAdapter::init_cstream_compat`].
///
/// # Safety
/// As [`LegacyAdapter::init_cctx`].
#[inline]
pub unsafe fn init_cstream_compat(
    params: Parameters,
    pledged_src_size: u64,
    wksp: *mut c_void,
    wksp_size: usize,
) -> *mut ZSTD_CStream {
    LegacyAdapter::NATIVE.init_cstream_compat(params, pledged_src_size, wksp, wksp_size)
}

/// See [`LegacyAdapter::init_dctx`].
///
/// # Safety
/// As [`LegacyAdapter::init_cctx`].
#[inline]
pub unsafe fn init_dctx(wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DCtx {
    LegacyAdapter::NATIVE.init_dctx(wksp, wksp_size)
}

/// See [`LegacyAdapter::init_dstream_compat`].
///
/// # Safety
/// As [`LegacyAdapter::init_cctx`].
#[inline]
pub unsafe fn init_dstream_compat(window_size: u64, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DStream {
    LegacyAdapter::NATIVE.init_dstream_compat(window_size, wksp, wksp_size)
}

/// See [`LegacyAdapter::get_frame_params`].
///
/// # Safety
/// As [`LegacyAdapter::get_frame_params`].
#[inline]
pub unsafe fn get_frame_params(frame_params: *mut FrameParams, src: *const c_void, src_size: usize) -> usize {
    LegacyAdapter::NATIVE.get_frame_params(frame_params, src, src_size)
}

/// See [`LegacyAdapter::compress_cctx_compat`].
///
/// # Safety
/// As [`LegacyAdapter::compress_cctx_compat`].
#[inline]
pub unsafe fn compress_cctx_compat(
    cctx: *mut ZSTD_CCtx,
    dst: *mut c_void,
    dst_capacity: usize,
    src: *const c_void,
    src_size: usize,
    params: Parameters,
) -> usize {
    LegacyAdapter::NATIVE.compress_cctx_compat(cctx, dst, dst_capacity, src, src_size, params)
}
