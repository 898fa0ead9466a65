use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // askama compiles templates in; a template-only edit must still rebuild.
    println!("cargo:rerun-if-changed=templates");

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITIES_BOARD_BUILD_ID={}", build_id);
}
