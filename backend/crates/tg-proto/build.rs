use std::env;
use std::path::PathBuf;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let proto_root = PathBuf::from(&manifest_dir)
        .parent() // -> backend/crates
        .unwrap()
        .parent() // -> backend
        .unwrap()
        .parent() // -> repo root
        .unwrap()
        .join("proto");

    let proto_file = proto_root.join("validation.proto");

    let out_dir = PathBuf::from(&manifest_dir).join("src/generated");
    std::fs::create_dir_all(&out_dir).expect("Failed to create src/generated");

    prost_build::Config::new()
        .out_dir(&out_dir)
        .compile_protos(&[&proto_file], &[&proto_root])
        .expect("Failed to compile protobuf definitions");

    println!("cargo:rerun-if-changed={}", proto_file.display());
}
