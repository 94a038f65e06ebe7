// config.rs: Compile-time configuration constants.
//
// The version gate itself lives in build.rs, which emits `cfg(zstd_compat)`
// and generates two constants:
//   ZSTD_HEADER_VERSION_NUMBER  parsed from the zstd.h zstd-sys compiled
//                               against (None if not found)
//   ZSTD_GATE_VERSION_NUMBER    the value the gate compared: the
//                               ZSTD_COMPAT_VERSION_NUMBER override when set,
//                               the header version otherwise

include!(concat!(env!("OUT_DIR"), "/zstd_version.rs"));

// First zstd release whose API renamed the legacy entry points.
// MAJOR*100*100 + MINOR*100 + RELEASE for 1.4.6.
pub const COMPAT_MIN_VERSION_NUMBER: u32 = 10406;

// Whether the translation layer is compiled into this build.
pub const COMPAT_LAYER: bool = cfg!(zstd_compat);

// "Content size unknown" in the current API (`0ULL - 1` in zstd.h).
pub const ZSTD_CONTENTSIZE_UNKNOWN: u64 = u64::MAX;

// "Content size unknown" in the legacy API. The current API reads the same
// value as "the source is exactly empty".
pub const LEGACY_CONTENTSIZE_UNKNOWN: u64 = 0;

// Static contexts must start on an 8-byte boundary; zstd returns NULL
// otherwise.
pub const WORKSPACE_ALIGN: usize = 8;

/// Version number of the zstd library linked at runtime
/// (equivalent to `ZSTD_versionNumber()`).
pub fn version_number() -> u32 {
    unsafe { zstd_sys::ZSTD_versionNumber() as u32 }
}

/// Version string of the zstd library linked at runtime
/// (equivalent to `ZSTD_versionString()`).
pub fn version_string() -> &'static str {
    // SAFETY: zstd returns a pointer to a static NUL-terminated ASCII literal.
    let text = unsafe { core::ffi::CStr::from_ptr(zstd_sys::ZSTD_versionString()) };
    text.to_str().unwrap_or("")
}

/// True when the legacy names are translated by this crate rather than
/// provided natively by the library.
pub fn compat_layer_active() -> bool {
    COMPAT_LAYER
}
