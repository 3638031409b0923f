//! CLI smoke entry point.
//!
//! Performs no record keeping; it only verifies `boutique_core` linkage.

fn main() {
    println!("boutique_core ping={}", boutique_core::ping());
    println!("boutique_core version={}", boutique_core::core_version());
}
