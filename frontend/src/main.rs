//! Entry point for the WASM application

pub fn main() {
    portfolio_site::start();
}
