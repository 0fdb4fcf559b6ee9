fn main() {
    // Emit the ESP-IDF build environment only for device builds; host-target
    // test builds have no ESP-IDF toolchain available.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
