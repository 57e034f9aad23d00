use chrono::Datelike;

fn main() {
    // Stamp the build year so the server and the hydrated client render the same footer
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
