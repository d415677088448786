fn main() {
    // The napi feature links the generated cdylib against the Node runtime.
    if std::env::var("CARGO_FEATURE_NAPI_BINDINGS").is_ok() {
        napi_build::setup();
    }
}
