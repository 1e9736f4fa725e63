#[derive(Debug)]
pub enum RateParseError {
    Empty,
    InvalidNumber(String),
    InvalidUnit(String),
}

#[derive(Debug)]
pub enum SenderError {
    AlreadyStarted,
    Transport(std::io::Error),
}

impl From<std::io::Error> for SenderError {
    fn from(e: std::io::Error) -> Self {
        SenderError::Transport(e)
    }
}

impl std::fmt::Display for RateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RateParseError::Empty => write!(f, "Empty rate string"),
            RateParseError::InvalidNumber(s) => write!(f, "Invalid rate value: {}", s),
            RateParseError::InvalidUnit(s) => write!(f, "Invalid rate unit: {}", s),
        }
    }
}

impl std::fmt::Display for SenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SenderError::AlreadyStarted => write!(f, "Already started"),
            SenderError::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl std::error::Error for RateParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::error::Error for SenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SenderError::AlreadyStarted => None,
            SenderError::Transport(e) => Some(e),
        }
    }
}
