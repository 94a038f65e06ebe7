// Against the linked zstd: every wrapper returns what the direct
// current-API call returns.

use libc::c_void;
use zstd_compat::api::{get_cparams, get_params, FrameHeader};
use zstd_compat::compat;
use zstd_compat::{Workspace, ZSTD_CONTENTSIZE_UNKNOWN};

fn sample(len: usize) -> Vec<u8> {
    b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
        .iter()
        .cycle()
        .take(len)
        .enumerate()
        .map(|(i, &b)| if i % 97 == 0 { (i % 251) as u8 } else { b })
        .collect()
}

#[test]
fn workspace_bounds_match_estimates() {
    for level in [1, 3, 9, 19] {
        let cparams = get_cparams(level, 0, 0);
        unsafe {
            assert_eq!(compat::cctx_workspace_bound(cparams), zstd_sys::ZSTD_estimateCCtxSize_usingCParams(cparams));
            assert_eq!(
                compat::cstream_workspace_bound(cparams),
                zstd_sys::ZSTD_estimateCStreamSize_usingCParams(cparams)
            );
        }
    }
    unsafe {
        assert_eq!(compat::dctx_workspace_bound(), zstd_sys::ZSTD_estimateDCtxSize());
        for window in [1u64 << 10, 1 << 17, 1 << 23] {
            assert_eq!(compat::dstream_workspace_bound(window), zstd_sys::ZSTD_estimateDStreamSize(window as usize));
        }
    }
}

#[test]
fn init_cctx_returns_the_direct_handle() {
    let mut wksp = Workspace::for_cctx(get_cparams(3, 0, 0));
    let len = wksp.len();
    let direct = unsafe { zstd_sys::ZSTD_initStaticCCtx(wksp.as_mut_ptr(), len) };
    let wrapped = unsafe { compat::init_cctx(wksp.as_mut_ptr(), len) };
    assert!(!direct.is_null());
    assert_eq!(wrapped, direct);
}

#[test]
fn init_dctx_returns_the_direct_handle() {
    let mut wksp = Workspace::for_dctx();
    let len = wksp.len();
    let direct = unsafe { zstd_sys::ZSTD_initStaticDCtx(wksp.as_mut_ptr(), len) };
    let wrapped = unsafe { compat::init_dctx(wksp.as_mut_ptr(), len) };
    assert!(!direct.is_null());
    assert_eq!(wrapped, direct);
}

#[test]
fn init_cstream_returns_the_direct_handle() {
    let params = get_params(3, 0, 0);
    let mut wksp = Workspace::for_cstream(params.cParams);
    let len = wksp.len();
    let direct = unsafe { zstd_sys::ZSTD_initStaticCStream(wksp.as_mut_ptr(), len) };
    let wrapped = unsafe { compat::init_cstream_compat(params, 0, wksp.as_mut_ptr(), len) };
    assert!(!direct.is_null());
    assert_eq!(wrapped, direct);
}

#[test]
fn undersized_workspaces_fail_like_the_direct_call() {
    let mut wksp = Workspace::new(256);
    let p: *mut c_void = wksp.as_mut_ptr();
    unsafe {
        assert!(zstd_sys::ZSTD_initStaticCCtx(p, 256).is_null());
        assert!(compat::init_cctx(p, 256).is_null());
        assert!(zstd_sys::ZSTD_initStaticDCtx(p, 256).is_null());
        assert!(compat::init_dctx(p, 256).is_null());
        assert!(zstd_sys::ZSTD_initStaticDStream(p, 256).is_null());
        assert!(compat::init_dstream_compat(0, p, 256).is_null());
        assert!(compat::init_cstream_compat(get_params(3, 0, 0), 0, p, 256).is_null());
    }
}

#[test]
fn init_cstream_rejects_invalid_parameters() {
    let mut params = get_params(3, 0, 0);
    let mut wksp = Workspace::for_cstream(params.cParams);
    let len = wksp.len();
    // Below ZSTD_WINDOWLOG_MIN.
    params.cParams.windowLog = 1;
    let handle = unsafe { compat::init_cstream_compat(params, 0, wksp.as_mut_ptr(), len) };
    assert!(handle.is_null());
}

#[test]
fn dstream_window_size_is_ignored() {
    let mut a = Workspace::for_dstream(1 << 20);
    let mut b = Workspace::for_dstream(1 << 20);
    let len = a.len();
    let ha = unsafe { compat::init_dstream_compat(0, a.as_mut_ptr(), len) };
    let hb = unsafe { compat::init_dstream_compat(1 << 27, b.as_mut_ptr(), len) };
    assert!(!ha.is_null() && !hb.is_null());
    assert_eq!(ha as usize - a.as_mut_ptr() as usize, hb as usize - b.as_mut_ptr() as usize);

    let direct = unsafe { zstd_sys::ZSTD_initStaticDStream(a.as_mut_ptr(), len) };
    assert_eq!(direct, ha);
}

#[test]
fn get_frame_params_matches_get_frame_header() {
    let data = sample(50_000);
    let frame = zstd::bulk::compress(&data, 5).unwrap();

    for len in [0usize, 3, 4, 5, 6, 18, frame.len()] {
        let src = &frame[..len.min(frame.len())];
        let mut wrapped = FrameHeader::default();
        let mut direct = FrameHeader::default();
        let ws = unsafe { compat::get_frame_params(&mut wrapped, src.as_ptr().cast(), src.len()) };
        let ds = unsafe { zstd_sys::ZSTD_getFrameHeader((&mut direct as *mut FrameHeader).cast(), src.as_ptr().cast(), src.len()) };
        assert_eq!(ws, ds, "status differs for {len} bytes");
        assert_eq!(wrapped, direct, "header differs for {len} bytes");
    }

    let mut fp = FrameHeader::default();
    let status = unsafe { compat::get_frame_params(&mut fp, frame.as_ptr().cast(), frame.len()) };
    assert_eq!(status, 0);
    assert_eq!(fp.frame_content_size, data.len() as u64);
}

#[test]
fn get_frame_params_on_garbage_is_an_error() {
    let mut fp = FrameHeader::default();
    let src = [0xAAu8; 32];
    let status = unsafe { compat::get_frame_params(&mut fp, src.as_ptr().cast(), src.len()) };
    assert!(zstd_compat::is_error(status));
}

#[test]
fn compress_cctx_matches_compress_advanced() {
    let data = sample(200_000);
    for level in [1, 3, 12] {
        let params = get_params(level, data.len() as u64, 0);
        let mut wa = Workspace::for_cctx(params.cParams);
        let mut wb = Workspace::for_cctx(params.cParams);
        let len = wa.len();
        let bound = unsafe { zstd_sys::ZSTD_compressBound(data.len()) };
        let mut out_a = vec![0u8; bound];
        let mut out_b = vec![0u8; bound];

        let (na, nb) = unsafe {
            let ca = compat::init_cctx(wa.as_mut_ptr(), len);
            let cb = zstd_sys::ZSTD_initStaticCCtx(wb.as_mut_ptr(), len);
            assert!(!ca.is_null() && !cb.is_null());
            let na = compat::compress_cctx_compat(
                ca,
                out_a.as_mut_ptr().cast(),
                bound,
                data.as_ptr().cast(),
                data.len(),
                params,
            );
            #[allow(deprecated)]
            let nb = zstd_sys::ZSTD_compress_advanced(
                cb,
                out_b.as_mut_ptr().cast(),
                bound,
                data.as_ptr().cast(),
                data.len(),
                std::ptr::null(),
                0,
                params,
            );
            (na, nb)
        };

        assert!(!zstd_compat::is_error(na));
        assert_eq!(na, nb);
        assert_eq!(out_a[..na], out_b[..nb]);
        assert_eq!(zstd::bulk::decompress(&out_a[..na], data.len()).unwrap(), data);
    }
}

#[test]
fn compress_cctx_error_matches_direct_error() {
    let data = sample(10_000);
    let params = get_params(3, data.len() as u64, 0);
    let mut wksp = Workspace::for_cctx(params.cParams);
    let len = wksp.len();
    let mut tiny = [0u8; 4];

    let (wrapped, direct) = unsafe {
        let cctx = compat::init_cctx(wksp.as_mut_ptr(), len);
        let wrapped =
            compat::compress_cctx_compat(cctx, tiny.as_mut_ptr().cast(), tiny.len(), data.as_ptr().cast(), data.len(), params);
        #[allow(deprecated)]
        let direct = zstd_sys::ZSTD_compress_advanced(
            cctx,
            tiny.as_mut_ptr().cast(),
            tiny.len(),
            data.as_ptr().cast(),
            data.len(),
            std::ptr::null(),
            0,
            params,
        );
        (wrapped, direct)
    };

    assert!(zstd_compat::is_error(wrapped));
    assert_eq!(wrapped, direct);
}

#[test]
fn unknown_pledge_leaves_content_size_out_of_the_frame() {
    // Streamed through the raw handle so the frame header is produced by the
    // library from exactly what the adapter pledged.
    let data = sample(30_000);
    let params = get_params(3, 0, 0);
    let mut wksp = Workspace::for_cstream(params.cParams);
    let len = wksp.len();
    let zcs = unsafe { compat::init_cstream_compat(params, 0, wksp.as_mut_ptr(), len) };
    assert!(!zcs.is_null());

    let mut out = vec![0u8; unsafe { zstd_sys::ZSTD_compressBound(data.len()) } + 64];
    let mut output = zstd_sys::ZSTD_outBuffer { dst: out.as_mut_ptr().cast(), size: out.len(), pos: 0 };
    let mut input = zstd_sys::ZSTD_inBuffer { src: data.as_ptr().cast(), size: data.len(), pos: 0 };
    unsafe {
        while input.pos < input.size {
            assert!(!zstd_compat::is_error(zstd_sys::ZSTD_compressStream(zcs, &mut output, &mut input)));
        }
        loop {
            let remaining = zstd_sys::ZSTD_endStream(zcs, &mut output);
            assert!(!zstd_compat::is_error(remaining));
            if remaining == 0 {
                break;
            }
        }
    }
    out.truncate(output.pos);

    let mut fp = FrameHeader::default();
    let status = unsafe { compat::get_frame_params(&mut fp, out.as_ptr().cast(), out.len()) };
    assert_eq!(status, 0);
    assert_eq!(fp.frame_content_size, ZSTD_CONTENTSIZE_UNKNOWN);
    assert_eq!(zstd::stream::decode_all(&out[..]).unwrap(), data);
}
