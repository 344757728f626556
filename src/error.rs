use thiserror::Error;

pub type TbResult<T> = Result<T, TbError>;

#[derive(Debug, Error)]
pub enum TbError {
    #[error("no signal named '{0}' in scope")]
    NoSuchSignal(String),
    #[error("signal '{0}' is an output and can not be driven")]
    NotWritable(String),
    #[error("value {value:#x} does not fit signal '{signal}' ({width} bit)")]
    ValueTooWide {
        signal: String,
        value: u64,
        width: u32,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not write report: {0}")]
    Report(String),
}
