/// File extension of generated documents
pub const OUTPUT_EXTENSION: &str = "sv";

/// OutputNaming - picks a file name that does not collide with existing files
///
/// Tries `<base>.sv`, then `<base>_1.sv`, `<base>_2.sv`, ... until `exists`
/// returns false for the candidate.
pub struct OutputNaming;

impl OutputNaming {
    pub fn free_name<F>(base: &str, exists: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let mut candidate = format!("{}.{}", base, OUTPUT_EXTENSION);
        let mut counter: u64 = 1;
        while exists(&candidate) {
            candidate = format!("{}_{}.{}", base, counter, OUTPUT_EXTENSION);
            counter += 1;
        }
        candidate
    }
}
