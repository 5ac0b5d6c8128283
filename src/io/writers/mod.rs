pub mod png;
pub use png::write_rgba_png;
