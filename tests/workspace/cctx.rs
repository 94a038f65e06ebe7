use zstd_compat::api::get_params;
use zstd_compat::workspace::read_frame_params;
use zstd_compat::{InitError, StaticCCtx, Workspace};

use super::common::sample;

#[test]
fn one_shot_compress_roundtrips() {
    let data = sample(100_000, 1);
    let params = get_params(6, data.len() as u64, 0);
    let mut wksp = Workspace::for_cctx(params.cParams);
    let mut cctx = StaticCCtx::init(&mut wksp).unwrap();

    let mut dst = vec![0u8; zstd::zstd_safe::compress_bound(data.len())];
    let n = cctx.compress(&mut dst, &data, params).unwrap();
    assert!(n < data.len());
    assert_eq!(zstd::bulk::decompress(&dst[..n], data.len()).unwrap(), data);
}

#[test]
fn context_is_reusable_across_frames() {
    let params = get_params(3, 20_000, 0);
    let mut wksp = Workspace::for_cctx(params.cParams);
    let mut cctx = StaticCCtx::init(&mut wksp).unwrap();
    let mut dst = vec![0u8; 32_768];

    for seed in 0..4u8 {
        let data = sample(20_000, seed);
        let n = cctx.compress(&mut dst, &data, params).unwrap();
        assert_eq!(zstd::bulk::decompress(&dst[..n], data.len()).unwrap(), data);
    }
}

#[test]
fn frame_records_content_size_from_params() {
    let data = sample(5_000, 9);
    let params = get_params(3, data.len() as u64, 0);
    let mut wksp = Workspace::for_cctx(params.cParams);
    let mut cctx = StaticCCtx::init(&mut wksp).unwrap();
    let mut dst = vec![0u8; 8_192];
    let n = cctx.compress(&mut dst, &data, params).unwrap();

    let fp = read_frame_params(&dst[..n]).unwrap().expect("complete header");
    assert_eq!(fp.frame_content_size, data.len() as u64);
}

#[test]
fn output_too_small_is_a_library_error() {
    let data = sample(5_000, 2);
    let params = get_params(3, data.len() as u64, 0);
    let mut wksp = Workspace::for_cctx(params.cParams);
    let mut cctx = StaticCCtx::init(&mut wksp).unwrap();
    let mut dst = [0u8; 8];

    let err = cctx.compress(&mut dst, &data, params).unwrap_err();
    assert!(zstd_compat::is_error(err.code()));
    assert!(!err.name().is_empty());
}

#[test]
fn undersized_workspace_reports_a_size_hint() {
    let mut wksp = Workspace::new(256);
    match StaticCCtx::init(&mut wksp) {
        Err(InitError::WorkspaceTooSmall { needed, provided }) => {
            assert_eq!(provided, 256);
            assert!(needed > provided);
            // A workspace of the hinted size builds the context.
            let mut sized = Workspace::new(needed);
            assert!(StaticCCtx::init(&mut sized).is_ok());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn empty_workspace_is_rejected() {
    let mut empty: [u8; 0] = [];
    assert_eq!(StaticCCtx::init(&mut empty).unwrap_err(), InitError::NullWorkspace);
}
