//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `khitta_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("khitta_core ping={}", khitta_core::ping());
    println!("khitta_core version={}", khitta_core::core_version());
    println!(
        "khitta_core weekday(2024-03-03)={}",
        khitta_core::derive_weekday("2024-03-03")
            .map(|day| day.label())
            .unwrap_or("?")
    );
}
