#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A bounded draw was asked for with a bound of zero.
    ZeroBound,
    /// Restored state has an even increment, which seeding never produces.
    EvenIncrement,
    /// Restored dual-stream state has both halves on the same stream.
    SharedStream,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroBound => write!(f, "bound must be greater than zero"),
            Error::EvenIncrement => write!(f, "stream increment must be odd"),
            Error::SharedStream => {
                write!(f, "both halves of a dual-stream generator share one stream")
            }
        }
    }
}

impl std::error::Error for Error {}
