#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartScaleError {
    #[error("Tick count must be at least 2, got {0}")]
    TooFewTicks(usize),

    #[error("Tick domain maximum must be finite, got {0}")]
    NonFiniteDomain(f32),
}
