#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OutputConfig {
    format: OutputFormat,
    verbose: bool,
}

impl OutputConfig {
    #[must_use]
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
