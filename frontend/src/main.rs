//! Entry point for the WASM application

pub fn main() {
    donation_frontend::mount();
}
