#![no_main]
use libfuzzer_sys::fuzz_target;

use zstd_compat::api::FrameHeader;
use zstd_compat::compat;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: the legacy wrapper must agree with ZSTD_getFrameHeader
    // on the status and on every header field.
    let mut wrapped = FrameHeader::default();
    let mut direct = FrameHeader::default();
    let ws = unsafe { compat::get_frame_params(&mut wrapped, data.as_ptr().cast(), data.len()) };
    let ds = unsafe { zstd_sys::ZSTD_getFrameHeader((&mut direct as *mut FrameHeader).cast(), data.as_ptr().cast(), data.len()) };
    assert_eq!(ws, ds);
    assert_eq!(wrapped, direct);
});
