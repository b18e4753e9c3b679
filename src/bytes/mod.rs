pub const MB: &str = "MB";

pub const BYTES_PER_MB: u64 = 1024 * 1024;

pub fn to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}
