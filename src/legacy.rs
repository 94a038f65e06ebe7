//! The legacy names, each bound to its current implementation.
//!
//! Code written against the old surface imports from here and keeps its
//! call sites unchanged:
//!
//! ```ignore
//! use zstd_compat::legacy::{init_cstream, cstream_workspace_bound};
//! ```
//!
//! `init_cstream`, `init_dstream` and `compress_cctx` resolve to the
//! `_compat` translations; the remaining names are defined directly in
//! [`crate::compat`].

pub use crate::api::FrameParams;
pub use crate::compat::{
    cctx_workspace_bound, compress_cctx_compat as compress_cctx, cstream_workspace_bound,
    dctx_workspace_bound, dstream_workspace_bound, get_frame_params, init_cctx,
    init_cstream_compat as init_cstream, init_dctx, init_dstream_compat as init_dstream,
};
