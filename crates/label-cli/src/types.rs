use std::path::PathBuf;

use label_core::PipelineOutput;

#[derive(Debug)]
pub struct ParseResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output_dir: Option<PathBuf>,
    pub written: Vec<PathBuf>,
    pub output: PipelineOutput,
    pub top: usize,
}
