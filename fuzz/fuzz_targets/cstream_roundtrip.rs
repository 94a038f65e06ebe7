#![no_main]
use libfuzzer_sys::fuzz_target;

use zstd_compat::api::get_params;
use zstd_compat::{StaticCStream, StaticDCtx, Workspace};

fuzz_target!(|data: &[u8]| {
    // First byte: compression level, and whether to pledge the exact size
    // (high bit) or the legacy 0 = unknown.
    let Some((&ctrl, input)) = data.split_first() else { return };
    let level = (ctrl % 9) as i32 + 1;
    let exact = ctrl & 0x80 != 0;
    if exact && input.is_empty() {
        // An exact pledge of 0 reads as "unknown" by definition.
        return;
    }
    let pledged = if exact { input.len() as u64 } else { 0 };

    let params = get_params(level, 0, 0);
    let mut cw = Workspace::for_cstream(params.cParams);
    let mut stream = StaticCStream::init(params, pledged, &mut cw).expect("sized workspace");

    let mut frame = Vec::new();
    let mut buf = vec![0u8; 4096];
    let mut pos = 0;
    while pos < input.len() {
        let p = stream.compress_stream(&mut buf, &input[pos..]).expect("compress");
        frame.extend_from_slice(&buf[..p.written]);
        pos += p.consumed;
    }
    loop {
        let p = stream.end_stream(&mut buf).expect("end");
        frame.extend_from_slice(&buf[..p.written]);
        if p.hint == 0 {
            break;
        }
    }

    let mut dw = Workspace::for_dctx();
    let mut dctx = StaticDCtx::init(&mut dw).expect("sized workspace");
    let mut out = vec![0u8; input.len()];
    let n = dctx.decompress(&mut out, &frame).expect("decompress");
    assert_eq!(&out[..n], input);
});
