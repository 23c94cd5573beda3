fn main() {
    // Shown in the page footer
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
    // content is embedded, so a content edit is a new build
    println!("cargo:rerun-if-changed=content");
}
