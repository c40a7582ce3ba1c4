use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // an explicitly requested digit size wins
    if env::var_os("CARGO_FEATURE_U32").is_some() || env::var_os("CARGO_FEATURE_U64").is_some() {
        return;
    }

    // otherwise follow the target (not the host running this script)
    match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok("64") => println!("cargo:rustc-cfg=feature=\"u64\""),
        _ => println!("cargo:rustc-cfg=feature=\"u32\""),
    }
}
