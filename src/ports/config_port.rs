//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
    /// All keys of a section, for sections used as maps (commission tiers).
    fn get_keys(&self, section: &str) -> Vec<String>;
}
