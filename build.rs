//! Build script compiling the C reference strategies.
//!
//! Every `src/**/*.c` file is compiled into one static library. When no
//! usable C compiler is found the `c_implementation_active` cfg stays unset
//! and the C variants are left out of the registry.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let build = cc::Build::new();
    let compiler = match build.try_get_compiler() {
        Ok(compiler) => compiler,
        Err(err) => {
            println!("cargo:warning=No C compiler found ({err}). C strategies disabled.");
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C strategies disabled.");
        return;
    };

    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(err) => {
            println!("cargo:warning=Bad glob pattern for C sources: {err}");
            return;
        }
    };
    if c_files.is_empty() {
        return;
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native =
        rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native");

    let mut build = cc::Build::new();
    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // No -ffast-math: the strategies rely on IEEE comparisons and infinities.
    build.opt_level(3);
    if is_rust_native {
        build.flag_if_supported("-march=native");
    }

    if let Err(err) = build.try_compile("sort_rank_c") {
        println!("cargo:warning=Failed to compile C strategies ({err}). C strategies disabled.");
        return;
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
