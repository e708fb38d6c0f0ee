use std::path::PathBuf;

pub(crate) const OUTPUT_BUCKET: &str = "meu-bucket-saida";
pub(crate) const OUTPUT_PREFIX: &str = "processed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProcessorConfig {
    pub output_bucket: String,
    pub output_prefix: String,
    pub scratch_dir: PathBuf,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            output_bucket: OUTPUT_BUCKET.to_string(),
            output_prefix: OUTPUT_PREFIX.to_string(),
            scratch_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_fixed_output_location() {
        let config = ProcessorConfig::default();
        assert_eq!(config.output_bucket, "meu-bucket-saida");
        assert_eq!(config.output_prefix, "processed");
        assert_eq!(config.scratch_dir, std::env::temp_dir());
    }
}
