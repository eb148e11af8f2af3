use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("Invalid id range: start ({start}) > end ({end})")]
    InvalidRange { start: i64, end: i64 },
    #[error("Invalid batch size: {0}, it must be > 0")]
    InvalidBatchSize(usize),
    #[error(
        "Token for id {id} needs {required} characters but tokens are {width} characters wide"
    )]
    TokenOverflow {
        id: i64,
        required: usize,
        width: usize,
    },
    #[error("Unit symbol must not be empty")]
    EmptyUnit,
    #[error("Description prefix must not be empty")]
    EmptyDescription,
}
