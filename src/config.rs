/// Printer settings for [`crate::codegen::CodeGenerator`]
#[derive(Debug, Clone)]
pub struct Config {
    /// Spaces per block nesting level
    pub indent_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}
