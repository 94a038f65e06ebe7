//! C-ABI exports of the legacy zstd names.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! The produced `target/release/libzstd_compat.a` is linked alongside the
//! zstd library. `ZSTD_initCStream`, `ZSTD_initDStream` and
//! `ZSTD_compressCCtx` are still live symbols of the current library with
//! different signatures, so they are exported only under their `_compat`
//! names; `include/zstd_compat.h` redirects the legacy spellings to them.

#![allow(non_snake_case)]

use libc::{c_uint, c_ulonglong, c_void, size_t};

use crate::api::{
    CompressionParameters, FrameParams, Parameters, ZSTD_CCtx, ZSTD_CStream, ZSTD_DCtx, ZSTD_DStream,
};
use crate::compat;

// ─────────────────────────────────────────────────────────────────────────────
// Workspace size queries
// ─────────────────────────────────────────────────────────────────────────────

// size_t ZSTD_CCtxWorkspaceBound(ZSTD_compressionParameters cParams);
#[no_mangle]
pub extern "C" fn ZSTD_CCtxWorkspaceBound(cparams: CompressionParameters) -> size_t {
    compat::cctx_workspace_bound(cparams)
}

// size_t ZSTD_CStreamWorkspaceBound(ZSTD_compressionParameters cParams);
#[no_mangle]
pub extern "C" fn ZSTD_CStreamWorkspaceBound(cparams: CompressionParameters) -> size_t {
    compat::cstream_workspace_bound(cparams)
}

// size_t ZSTD_DCtxWorkspaceBound(void);
#[no_mangle]
pub extern "C" fn ZSTD_DCtxWorkspaceBound() -> size_t {
    compat::dctx_workspace_bound()
}

// size_t ZSTD_DStreamWorkspaceBound(unsigned long long windowSize);
#[no_mangle]
pub extern "C" fn ZSTD_DStreamWorkspaceBound(window_size: c_ulonglong) -> size_t {
    compat::dstream_workspace_bound(window_size)
}

// ─────────────────────────────────────────────────────────────────────────────
// Static contexts and streams
// ─────────────────────────────────────────────────────────────────────────────

// ZSTD_CCtx *ZSTD_initCCtx(void *workspace, size_t workspaceSize);
#[no_mangle]
pub unsafe extern "C" fn ZSTD_initCCtx(wksp: *mut c_void, wksp_size: size_t) -> *mut ZSTD_CCtx {
    compat::init_cctx(wksp, wksp_size)
}

// ZSTD_CStream *ZSTD_initCStream(ZSTD_parameters params,
//                                unsigned long long pledgedSrcSize,
//                                void *workspace, size_t workspaceSize);
#[no_mangle]
pub unsafe extern "C" fn ZSTD_initCStream_compat(
    params: Parameters,
    pledged_src_size: c_ulonglong,
    wksp: *mut c_void,
    wksp_size: size_t,
) -> *mut ZSTD_CStream {
    compat::init_cstream_compat(params, pledged_src_size, wksp, wksp_size)
}

// ZSTD_DCtx *ZSTD_initDCtx(void *workspace, size_t workspaceSize);
#[no_mangle]
pub unsafe extern "C" fn ZSTD_initDCtx(wksp: *mut c_void, wksp_size: size_t) -> *mut ZSTD_DCtx {
    compat::init_dctx(wksp, wksp_size)
}

// ZSTD_DStream *ZSTD_initDStream(unsigned long long maxWindowSize,
//                                void *workspace, size_t workspaceSize);
#[no_mangle]
pub unsafe extern "C" fn ZSTD_initDStream_compat(
    window_size: c_ulonglong,
    wksp: *mut c_void,
    wksp_size: size_t,
) -> *mut ZSTD_DStream {
    compat::init_dstream_compat(window_size, wksp, wksp_size)
}

// ─────────────────────────────────────────────────────────────────────────────
// Frame parameters and one-shot compression
// ─────────────────────────────────────────────────────────────────────────────

// size_t ZSTD_getFrameParams(ZSTD_frameParams *fparamsPtr,
//                            const void *src, size_t srcSize);
#[no_mangle]
pub unsafe extern "C" fn ZSTD_getFrameParams(
    frame_params: *mut FrameParams,
    src: *const c_void,
    src_size: size_t,
) -> size_t {
    compat::get_frame_params(frame_params, src, src_size)
}

// size_t ZSTD_compressCCtx(ZSTD_CCtx *ctx, void *dst, size_t dstCapacity,
//                          const void *src, size_t srcSize,
//                          ZSTD_parameters params);
#[no_mangle]
pub unsafe extern "C" fn ZSTD_compressCCtx_compat(
    cctx: *mut ZSTD_CCtx,
    dst: *mut c_void,
    dst_capacity: size_t,
    src: *const c_void,
    src_size: size_t,
    params: Parameters,
) -> size_t {
    compat::compress_cctx_compat(cctx, dst, dst_capacity, src, src_size, params)
}

// unsigned ZSTD_compatLayerVersion(void);
//
// Version of the zstd.h the layer was built against, 0 when it was not
// detected. ZSTD_COMPAT_VERSION_NUMBER moves the gate, not this value.
#[no_mangle]
pub extern "C" fn ZSTD_compatLayerVersion() -> c_uint {
    crate::config::ZSTD_HEADER_VERSION_NUMBER.unwrap_or(0)
}
