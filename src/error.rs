
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidArgument(String),
    DivideByZero(String)
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::DivideByZero(msg) => write!(f, "division by zero: {}", msg)
        }
    }
}

impl std::error::Error for Error {}
