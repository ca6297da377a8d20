use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    let css = bundle_css(Path::new(CSS_ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {}: {}", CSS_ENTRY, e));

    fs::create_dir_all(CSS_OUT_DIR).expect("Failed to create assets/dist directory");
    fs::write(Path::new(CSS_OUT_DIR).join("bundle.css"), css)
        .expect("Failed to write bundle.css");
}

/// Resolve `@import`s from the entry sheet, minify, and print one stylesheet.
fn bundle_css(entry: &Path) -> Result<String, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler.bundle(entry).map_err(|e| e.to_string())?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| e.to_string())?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;
    Ok(output.code)
}
