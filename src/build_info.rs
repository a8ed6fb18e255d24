//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_present() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
        assert_eq!(BUILD_DATE.len(), 10); // YYYY-MM-DD
    }
}
