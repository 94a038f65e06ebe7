// build.rs: zstd version gate for the legacy compatibility layer.
//
// zstd-sys (`links = "zstd"`) exports the directory holding the zstd.h it
// compiled against as DEP_ZSTD_INCLUDE. The version macros in that header
// decide whether the legacy names need translating:
//
//   ZSTD_VERSION_NUMBER >= 10406  ->  emit `cargo:rustc-cfg=zstd_compat`
//
// Below the threshold the legacy names are the library's own and the
// translation modules are compiled out.
//
// ZSTD_COMPAT_VERSION_NUMBER overrides the detected value for the gate
// (e.g. "10301"). The detected header version is kept separately.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const COMPAT_MIN_VERSION_NUMBER: u32 = 10406;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(zstd_compat)");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ZSTD_COMPAT_VERSION_NUMBER");
    println!("cargo:rerun-if-env-changed=DEP_ZSTD_INCLUDE");

    let header = env::var_os("DEP_ZSTD_INCLUDE").and_then(|dir| header_version(Path::new(&dir)));
    let version = env::var("ZSTD_COMPAT_VERSION_NUMBER")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .or(header);

    // No header means a pkg-config/system build that did not export its
    // include dir. Every zstd-sys 2.x release requires zstd >= 1.5.
    let enabled = version.map_or(true, |v| v >= COMPAT_MIN_VERSION_NUMBER);
    if enabled {
        println!("cargo:rustc-cfg=zstd_compat");
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let generated = format!(
        "pub const ZSTD_HEADER_VERSION_NUMBER: Option<u32> = {};\n\
         pub const ZSTD_GATE_VERSION_NUMBER: Option<u32> = {};\n",
        option_literal(header),
        option_literal(version),
    );
    fs::write(out_dir.join("zstd_version.rs"), generated).expect("write zstd_version.rs");
}

fn option_literal(v: Option<u32>) -> String {
    match v {
        Some(v) => format!("Some({v})"),
        None => "None".to_string(),
    }
}

/// Parse MAJOR*100*100 + MINOR*100 + RELEASE out of `<dir>/zstd.h`.
fn header_version(dir: &Path) -> Option<u32> {
    let header = dir.join("zstd.h");
    println!("cargo:rerun-if-changed={}", header.display());
    let text = fs::read_to_string(header).ok()?;

    let define = |name: &str| -> Option<u32> {
        text.lines().find_map(|line| {
            let mut words = line.split_whitespace();
            if words.next()? != "#define" || words.next()? != name {
                return None;
            }
            words.next()?.parse().ok()
        })
    };

    let major = define("ZSTD_VERSION_MAJOR")?;
    let minor = define("ZSTD_VERSION_MINOR")?;
    let release = define("ZSTD_VERSION_RELEASE")?;
    Some(major * 100 * 100 + minor * 100 + release)
}
