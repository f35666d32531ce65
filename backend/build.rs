use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!DOCTYPE html>\n<html lang=\"pt\"><head><meta charset=\"utf-8\"><title>Saber</title></head>\n<body><p>Frontend not built. Run <code>trunk build</code> in <code>frontend/</code>.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    }

    // include_dir! needs the directory even before the first frontend build.
    let embedded = out_dir.join("dist");
    fs::create_dir_all(&embedded).unwrap();
    let index = embedded.join("index.html");
    if !index.exists() {
        fs::write(index, PLACEHOLDER).unwrap();
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
