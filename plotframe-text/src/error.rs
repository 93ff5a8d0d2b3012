use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotframeTextError {
    #[error("Font directory not found: `{0}`")]
    FontDirectoryError(String),
}
