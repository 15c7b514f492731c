use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartTextError {
    #[error("Invalid font shorthand: `{0}`")]
    InvalidFont(String),

    #[error("Invalid font size `{size}` in font shorthand `{font}`")]
    InvalidFontSize { font: String, size: String },
}
