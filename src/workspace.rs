//! Lifetime-checked handles over the legacy adapter.
//!
//! Each handle mutably borrows the workspace it was built in, so the borrow
//! checker enforces what the C contract only states: the workspace outlives
//! the context and is not shared while the context is in use. Handles are
//! `Send` (a context may move between threads) but not `Sync` (one context,
//! one user at a time).
//!
//! Construction goes through [`crate::compat`], so these types see exactly
//! the legacy semantics, including "pledged size 0 means unknown".

use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use libc::c_void;

use crate::api::{
    get_cparams, CompressionParameters, FrameParams, Parameters, ZSTD_CCtx, ZSTD_CStream,
    ZSTD_DCtx, ZSTD_DStream,
};
use crate::compat;
use crate::config::WORKSPACE_ALIGN;
use crate::error::{parse_code, InitError, ZstdError};

// ─────────────────────────────────────────────────────────────────────────────
// Workspace
// ─────────────────────────────────────────────────────────────────────────────

/// A zeroed, 8-byte aligned byte buffer for static contexts.
///
/// This is a caller-side convenience; the adapter itself never allocates and
/// accepts any `&mut [u8]`.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    words: Vec<u64>,
    len: usize,
}

impl Workspace {
    /// A workspace of exactly `size` bytes.
    pub fn new(size: usize) -> Self {
        Workspace {
            words: vec![0u64; size.div_ceil(WORKSPACE_ALIGN)],
            len: size,
        }
    }

    /// Sized by [`compat::cctx_workspace_bound`].
    pub fn for_cctx(cparams: CompressionParameters) -> Self {
        Self::new(compat::cctx_workspace_bound(cparams))
    }

    /// Sized by [`compat::cstream_workspace_bound`].
    pub fn for_cstream(cparams: CompressionParameters) -> Self {
        Self::new(compat::cstream_workspace_bound(cparams))
    }

    /// Sized by [`compat::dctx_workspace_bound`].
    pub fn for_dctx() -> Self {
        Self::new(compat::dctx_workspace_bound())
    }

    /// Sized by [`compat::dstream_workspace_bound`].
    pub fn for_dstream(window_size: u64) -> Self {
        Self::new(compat::dstream_workspace_bound(window_size))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.words.as_mut_ptr() as *mut c_void
    }
}

impl Deref for Workspace {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        // SAFETY: `words` holds at least `len` initialised bytes.
        unsafe { slice::from_raw_parts(self.words.as_ptr() as *const u8, self.len) }
    }
}

impl DerefMut for Workspace {
    fn deref_mut(&mut self) -> &mut [u8] {
        // SAFETY: as in `deref`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.words.as_mut_ptr() as *mut u8, self.len) }
    }
}

/// Empty slices cross the legacy boundary as the null workspace.
fn raw_workspace(wksp: &mut [u8]) -> *mut c_void {
    if wksp.is_empty() {
        ptr::null_mut()
    } else {
        wksp.as_mut_ptr() as *mut c_void
    }
}

/// Work out why the adapter returned null for `wksp`.
fn init_failure(what: &'static str, wksp: &[u8], needed: Option<usize>) -> InitError {
    let err = if wksp.is_empty() {
        InitError::NullWorkspace
    } else if (wksp.as_ptr() as usize) % WORKSPACE_ALIGN != 0 {
        InitError::Misaligned
    } else {
        match needed {
            Some(needed) if wksp.len() < needed => InitError::WorkspaceTooSmall {
                needed,
                provided: wksp.len(),
            },
            _ => InitError::InitFailed,
        }
    };
    tracing::debug!(context = what, provided = wksp.len(), error = %err, "static init failed");
    err
}

/// Workspace estimate for the smallest compression parameters (level 1,
/// one-byte source). A static CCtx carries no parameters at construction,
/// so this is the size below which it cannot be built for any frame.
fn cctx_floor() -> usize {
    compat::cctx_workspace_bound(get_cparams(1, 1, 0))
}

/// Progress of one streaming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamProgress {
    /// Bytes written to the output slice.
    pub written: usize,
    /// Bytes read from the input slice.
    pub consumed: usize,
    /// zstd's non-error return value: a preferred input size for
    /// compress/decompress, the bytes left to flush for flush/end (`0` once
    /// done), `0` at the end of a decompressed frame.
    pub hint: usize,
}

fn out_buffer(output: &mut [u8]) -> zstd_sys::ZSTD_outBuffer {
    zstd_sys::ZSTD_outBuffer {
        dst: output.as_mut_ptr() as *mut c_void,
        size: output.len(),
        pos: 0,
    }
}

fn in_buffer(input: &[u8]) -> zstd_sys::ZSTD_inBuffer {
    zstd_sys::ZSTD_inBuffer {
        src: input.as_ptr() as *const c_void,
        size: input.len(),
        pos: 0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StaticCCtx
// ─────────────────────────────────────────────────────────────────────────────

/// A compression context living in a borrowed workspace.
#[derive(Debug)]
pub struct StaticCCtx<'w> {
    ptr: NonNull<ZSTD_CCtx>,
    _wksp: PhantomData<&'w mut [u8]>,
}

// SAFETY: zstd contexts carry no thread affinity; `&mut self` on every
// operation prevents concurrent use.
unsafe impl Send for StaticCCtx<'_> {}

impl<'w> StaticCCtx<'w> {
    /// Legacy `ZSTD_initCCtx` over `wksp`.
    pub fn init(wksp: &'w mut [u8]) -> Result<Self, InitError> {
        let raw = unsafe { compat::init_cctx(raw_workspace(wksp), wksp.len()) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(StaticCCtx { ptr, _wksp: PhantomData }),
            None => Err(init_failure("cctx", wksp, Some(cctx_floor()))),
        }
    }

    /// Legacy `ZSTD_compressCCtx`: one frame from `src` into `dst`.
    pub fn compress(&mut self, dst: &mut [u8], src: &[u8], params: Parameters) -> Result<usize, ZstdError> {
        let code = unsafe {
            compat::compress_cctx_compat(
                self.ptr.as_ptr(),
                dst.as_mut_ptr() as *mut c_void,
                dst.len(),
                src.as_ptr() as *const c_void,
                src.len(),
                params,
            )
        };
        parse_code(code)
    }

    pub fn as_ptr(&self) -> *mut ZSTD_CCtx {
        self.ptr.as_ptr()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StaticCStream
// ─────────────────────────────────────────────────────────────────────────────

/// A compression stream living in a borrowed workspace, ready for its
/// first frame.
#[derive(Debug)]
pub struct StaticCStream<'w> {
    ptr: NonNull<ZSTD_CStream>,
    _wksp: PhantomData<&'w mut [u8]>,
}

// SAFETY: see StaticCCtx.
unsafe impl Send for StaticCStream<'_> {}

impl<'w> StaticCStream<'w> {
    /// Legacy `ZSTD_initCStream`. `pledged_src_size == 0` means unknown.
    pub fn init(params: Parameters, pledged_src_size: u64, wksp: &'w mut [u8]) -> Result<Self, InitError> {
        let raw = unsafe { compat::init_cstream_compat(params, pledged_src_size, raw_workspace(wksp), wksp.len()) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(StaticCStream { ptr, _wksp: PhantomData }),
            None => {
                let needed = compat::cstream_workspace_bound(params.cParams);
                Err(init_failure("cstream", wksp, Some(needed)))
            }
        }
    }

    /// `ZSTD_compressStream`.
    pub fn compress_stream(&mut self, output: &mut [u8], input: &[u8]) -> Result<StreamProgress, ZstdError> {
        let mut out = out_buffer(output);
        let mut inp = in_buffer(input);
        let hint = parse_code(unsafe { zstd_sys::ZSTD_compressStream(self.ptr.as_ptr(), &mut out, &mut inp) })?;
        Ok(StreamProgress { written: out.pos, consumed: inp.pos, hint })
    }

    /// `ZSTD_flushStream`.
    pub fn flush_stream(&mut self, output: &mut [u8]) -> Result<StreamProgress, ZstdError> {
        let mut out = out_buffer(output);
        let hint = parse_code(unsafe { zstd_sys::ZSTD_flushStream(self.ptr.as_ptr(), &mut out) })?;
        Ok(StreamProgress { written: out.pos, consumed: 0, hint })
    }

    /// `ZSTD_endStream`. Call again while `hint` is non-zero.
    pub fn end_stream(&mut self, output: &mut [u8]) -> Result<StreamProgress, ZstdError> {
        let mut out = out_buffer(output);
        let hint = parse_code(unsafe { zstd_sys::ZSTD_endStream(self.ptr.as_ptr(), &mut out) })?;
        Ok(StreamProgress { written: out.pos, consumed: 0, hint })
    }

    pub fn as_ptr(&self) -> *mut ZSTD_CStream {
        self.ptr.as_ptr()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StaticDCtx
// ─────────────────────────────────────────────────────────────────────────────

/// A decompression context living in a borrowed workspace.
#[derive(Debug)]
pub struct StaticDCtx<'w> {
    ptr: NonNull<ZSTD_DCtx>,
    _wksp: PhantomData<&'w mut [u8]>,
}

// SAFETY: see StaticCCtx.
unsafe impl Send for StaticDCtx<'_> {}

impl<'w> StaticDCtx<'w> {
    /// Legacy `ZSTD_initDCtx` over `wksp`.
    pub fn init(wksp: &'w mut [u8]) -> Result<Self, InitError> {
        let raw = unsafe { compat::init_dctx(raw_workspace(wksp), wksp.len()) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(StaticDCtx { ptr, _wksp: PhantomData }),
            None => Err(init_failure("dctx", wksp, Some(compat::dctx_workspace_bound()))),
        }
    }

    /// `ZSTD_decompressDCtx`: every frame in `src` into `dst`.
    pub fn decompress(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, ZstdError> {
        let code = unsafe {
            zstd_sys::ZSTD_decompressDCtx(
                self.ptr.as_ptr(),
                dst.as_mut_ptr() as *mut c_void,
                dst.len(),
                src.as_ptr() as *const c_void,
                src.len(),
            )
        };
        parse_code(code)
    }

    pub fn as_ptr(&self) -> *mut ZSTD_DCtx {
        self.ptr.as_ptr()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StaticDStream
// ─────────────────────────────────────────────────────────────────────────────

/// A decompression stream living in a borrowed workspace.
#[derive(Debug)]
pub struct StaticDStream<'w> {
    ptr: NonNull<ZSTD_DStream>,
    _wksp: PhantomData<&'w mut [u8]>,
}

// SAFETY: see StaticCCtx.
unsafe impl Send for StaticDStream<'_> {}

impl<'w> StaticDStream<'w> {
    /// Legacy `ZSTD_initDStream`. `window_size` is ignored; size the
    /// workspace with [`Workspace::for_dstream`] instead.
    pub fn init(window_size: u64, wksp: &'w mut [u8]) -> Result<Self, InitError> {
        let raw = unsafe { compat::init_dstream_compat(window_size, raw_workspace(wksp), wksp.len()) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(StaticDStream { ptr, _wksp: PhantomData }),
            None => Err(init_failure("dstream", wksp, Some(compat::dctx_workspace_bound()))),
        }
    }

    /// `ZSTD_decompressStream`. `hint == 0` marks the end of a frame.
    pub fn decompress_stream(&mut self, output: &mut [u8], input: &[u8]) -> Result<StreamProgress, ZstdError> {
        let mut out = out_buffer(output);
        let mut inp = in_buffer(input);
        let hint = parse_code(unsafe { zstd_sys::ZSTD_decompressStream(self.ptr.as_ptr(), &mut out, &mut inp) })?;
        Ok(StreamProgress { written: out.pos, consumed: inp.pos, hint })
    }

    pub fn as_ptr(&self) -> *mut ZSTD_DStream {
        self.ptr.as_ptr()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frame parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Legacy `ZSTD_getFrameParams` over a slice.
///
/// `Ok(None)` when `src` does not yet hold a complete frame header.
pub fn read_frame_params(src: &[u8]) -> Result<Option<FrameParams>, ZstdError> {
    let mut params = FrameParams::default();
    let status = unsafe { compat::get_frame_params(&mut params, src.as_ptr() as *const c_void, src.len()) };
    match parse_code(status)? {
        0 => Ok(Some(params)),
        _ => Ok(None),
    }
}
