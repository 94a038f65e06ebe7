//! Outbound seam: the current-generation zstd entry points the legacy
//! adapter is expressed in.
//!
//! [`ZstdApi`] lists exactly the library calls the adapter makes. [`Native`]
//! forwards each of them to `zstd-sys`; tests substitute a recording
//! implementation to observe the arguments the adapter delivers.
//!
//! ## Function Map
//!
//! | C function                               | Rust                                            |
//! |------------------------------------------|-------------------------------------------------|
//! | `ZSTD_estimateCCtxSize_usingCParams`     | [`ZstdApi::estimate_cctx_size_using_cparams`]   |
//! | `ZSTD_estimateCStreamSize_usingCParams`  | [`ZstdApi::estimate_cstream_size_using_cparams`]|
//! | `ZSTD_estimateDCtxSize`                  | [`ZstdApi::estimate_dctx_size`]                 |
//! | `ZSTD_estimateDStreamSize`               | [`ZstdApi::estimate_dstream_size`]              |
//! | `ZSTD_initStaticCCtx`                    | [`ZstdApi::init_static_cctx`]                   |
//! | `ZSTD_initStaticCStream`                 | [`ZstdApi::init_static_cstream`]                |
//! | `ZSTD_initStaticDCtx`                    | [`ZstdApi::init_static_dctx`]                   |
//! | `ZSTD_initStaticDStream`                 | [`ZstdApi::init_static_dstream`]                |
//! | `ZSTD_initCStream_advanced`              | [`ZstdApi::init_cstream_advanced`]              |
//! | `ZSTD_getFrameHeader`                    | [`ZstdApi::get_frame_header`]                   |
//! | `ZSTD_compress_advanced`                 | [`ZstdApi::compress_advanced`]                  |
//! | `ZSTD_isError`                           | [`ZstdApi::is_error`]                           |

use core::mem;

use libc::c_void;

// ─────────────────────────────────────────────────────────────────────────────
// Relabelled library types
// ─────────────────────────────────────────────────────────────────────────────

pub use zstd_sys::{ZSTD_CCtx, ZSTD_CStream, ZSTD_DCtx, ZSTD_DStream};

/// `ZSTD_compressionParameters`.
pub type CompressionParameters = zstd_sys::ZSTD_compressionParameters;
/// `ZSTD_frameParameters`.
pub type FrameParameters = zstd_sys::ZSTD_frameParameters;
/// `ZSTD_parameters`: compression + frame parameters.
pub type Parameters = zstd_sys::ZSTD_parameters;
/// `ZSTD_strategy`.
pub type Strategy = zstd_sys::ZSTD_strategy;
/// The frame header filled by `ZSTD_getFrameHeader`.
///
/// Declared here with the C layout rather than re-exported: zstd 1.5.7
/// renamed the struct (`ZSTD_FrameHeader`) and kept the old spelling only as
/// a macro, so the generated binding name depends on the bundled version.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    /// Decompressed size, `ZSTD_CONTENTSIZE_UNKNOWN` if not recorded,
    /// `0` for skippable frames.
    pub frame_content_size: u64,
    /// Window size the decoder must provide; the content size of a
    /// skippable frame.
    pub window_size: u64,
    pub block_size_max: u32,
    /// `ZSTD_frame` (0) or `ZSTD_skippableFrame` (1).
    pub frame_type: u32,
    pub header_size: u32,
    pub dict_id: u32,
    pub checksum_flag: u32,
    _reserved1: u32,
    _reserved2: u32,
}

const _: () = assert!(mem::size_of::<FrameHeader>() == 48);

/// The legacy name for [`FrameHeader`]. Same type, same layout.
pub type FrameParams = FrameHeader;

/// `ZSTD_getCParams`: compression parameters for a level and size hint.
pub fn get_cparams(level: i32, estimated_src_size: u64, dict_size: usize) -> CompressionParameters {
    unsafe { zstd_sys::ZSTD_getCParams(level, estimated_src_size, dict_size) }
}

/// `ZSTD_getParams`: full parameters (frame parameters default to
/// content-size flag on, checksum off).
pub fn get_params(level: i32, estimated_src_size: u64, dict_size: usize) -> Parameters {
    unsafe { zstd_sys::ZSTD_getParams(level, estimated_src_size, dict_size) }
}

// ─────────────────────────────────────────────────────────────────────────────
// ZstdApi
// ─────────────────────────────────────────────────────────────────────────────

/// The current zstd API surface consumed by the legacy adapter.
///
/// Implementations must behave like the corresponding C functions; the
/// adapter relies on nothing beyond their documented contracts.
pub trait ZstdApi {
    fn estimate_cctx_size_using_cparams(&self, cparams: CompressionParameters) -> usize;
    fn estimate_cstream_size_using_cparams(&self, cparams: CompressionParameters) -> usize;
    fn estimate_dctx_size(&self) -> usize;
    fn estimate_dstream_size(&self, window_size: usize) -> usize;

    /// # Safety
    /// `wksp` must be valid for reads and writes of `wksp_size` bytes and
    /// outlive every use of the returned handle.
    unsafe fn init_static_cctx(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_CCtx;
    /// # Safety
    /// As [`ZstdApi::init_static_cctx`].
    unsafe fn init_static_cstream(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_CStream;
    /// # Safety
    /// As [`ZstdApi::init_static_cctx`].
    unsafe fn init_static_dctx(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DCtx;
    /// # Safety
    /// As [`ZstdApi::init_static_cctx`].
    unsafe fn init_static_dstream(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DStream;

    /// # Safety
    /// `zcs` must be a live stream; `dict` must be null or valid for
    /// `dict_size` bytes.
    unsafe fn init_cstream_advanced(
        &self,
        zcs: *mut ZSTD_CStream,
        dict: *const c_void,
        dict_size: usize,
        params: Parameters,
        pledged_src_size: u64,
    ) -> usize;

    /// # Safety
    /// `zfh` must be writable; `src` must be valid for `src_size` bytes.
    unsafe fn get_frame_header(&self, zfh: *mut FrameHeader, src: *const c_void, src_size: usize) -> usize;

    /// # Safety
    /// `cctx` must be a live context; `dst`/`src`/`dict` must be valid for
    /// their stated sizes (`dict` may be null with size 0).
    #[allow(clippy::too_many_arguments)]
    unsafe fn compress_advanced(
        &self,
        cctx: *mut ZSTD_CCtx,
        dst: *mut c_void,
        dst_capacity: usize,
        src: *const c_void,
        src_size: usize,
        dict: *const c_void,
        dict_size: usize,
        params: Parameters,
    ) -> usize;

    fn is_error(&self, code: usize) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Native: the linked zstd library
// ─────────────────────────────────────────────────────────────────────────────

/// Forwards every [`ZstdApi`] call to the zstd library linked through
/// `zstd-sys`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Native;

impl ZstdApi for Native {
    #[inline]
    fn estimate_cctx_size_using_cparams(&self, cparams: CompressionParameters) -> usize {
        unsafe { zstd_sys::ZSTD_estimateCCtxSize_usingCParams(cparams) }
    }

    #[inline]
    fn estimate_cstream_size_using_cparams(&self, cparams: CompressionParameters) -> usize {
        unsafe { zstd_sys::ZSTD_estimateCStreamSize_usingCParams(cparams) }
    }

    #[inline]
    fn estimate_dctx_size(&self) -> usize {
        unsafe { zstd_sys::ZSTD_estimateDCtxSize() }
    }

    #[inline]
    fn estimate_dstream_size(&self, window_size: usize) -> usize {
        unsafe { zstd_sys::ZSTD_estimateDStreamSize(window_size) }
    }

    #[inline]
    unsafe fn init_static_cctx(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_CCtx {
        zstd_sys::ZSTD_initStaticCCtx(wksp, wksp_size)
    }

    #[inline]
    unsafe fn init_static_cstream(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_CStream {
        zstd_sys::ZSTD_initStaticCStream(wksp, wksp_size)
    }

    #[inline]
    unsafe fn init_static_dctx(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DCtx {
        zstd_sys::ZSTD_initStaticDCtx(wksp, wksp_size)
    }

    #[inline]
    unsafe fn init_static_dstream(&self, wksp: *mut c_void, wksp_size: usize) -> *mut ZSTD_DStream {
        zstd_sys::ZSTD_initStaticDStream(wksp, wksp_size)
    }

    #[inline]
    #[allow(deprecated)]
    unsafe fn init_cstream_advanced(
        &self,
        zcs: *mut ZSTD_CStream,
        dict: *const c_void,
        dict_size: usize,
        params: Parameters,
        pledged_src_size: u64,
    ) -> usize {
        zstd_sys::ZSTD_initCStream_advanced(zcs, dict, dict_size, params, pledged_src_size)
    }

    #[inline]
    unsafe fn get_frame_header(&self, zfh: *mut FrameHeader, src: *const c_void, src_size: usize) -> usize {
        zstd_sys::ZSTD_getFrameHeader(zfh.cast(), src, src_size)
    }

    #[inline]
    #[allow(deprecated)]
    unsafe fn compress_advanced(
        &self,
        cctx: *mut ZSTD_CCtx,
        dst: *mut c_void,
        dst_capacity: usize,
        src: *const c_void,
        src_size: usize,
        dict: *const c_void,
        dict_size: usize,
        params: Parameters,
    ) -> usize {
        zstd_sys::ZSTD_compress_advanced(cctx, dst, dst_capacity, src, src_size, dict, dict_size, params)
    }

    #[inline]
    fn is_error(&self, code: usize) -> bool {
        unsafe { zstd_sys::ZSTD_isError(code) != 0 }
    }
}
