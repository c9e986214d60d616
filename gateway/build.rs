fn main() {
    // The gateway acts as gRPC CLIENT to call backend services.
    // We only need client code, not server implementations.

    // Ensure a protoc binary is available even when the system does not
    // provide one, by falling back to the vendored compiler.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    println!("cargo:rerun-if-changed=proto/inventory.proto");
    println!("cargo:rerun-if-changed=proto/products.proto");
    println!("cargo:rerun-if-changed=proto/orders.proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile(
            &[
                "proto/inventory.proto",
                "proto/products.proto",
                "proto/orders.proto",
            ],
            &["proto/"],
        )
        .expect("Failed to compile proto files for the gateway");
}
