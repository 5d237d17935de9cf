//! # Ironwood Engine Core
//!
//! Core crate for Ironwood Engine: math aliases, bounding volumes and the
//! static indexed triangle mesh consumed by collision back-ends.

pub mod math;
pub mod mesh;
pub mod profiling;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version once at startup.
pub fn init() {
    log::info!("Ironwood Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    static_assertions::assert_impl_all!(mesh::IndexedTriangleMesh: Send, Sync, Clone);
    static_assertions::assert_impl_all!(mesh::Aabb: Send, Sync, Copy);
}
