use std::fmt::{Display, Formatter};

pub type Res<T = ()> = Result<T, Error>;
pub type ResContext<T = ()> = Result<T, Context<Error>>;

#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    CSV(csv::Error),

    /// A record that parsed but does not describe a valid rental.
    /// `record` is 1-based and does not count the header.
    InvalidRental { record: usize, reason: String },

    /// A manager needs at least one rental to know its day bounds.
    NoRentals,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(io) => Display::fmt(io, f),
            Self::CSV(csv) => Display::fmt(csv, f),
            Self::InvalidRental { record, reason } => {
                write!(f, "invalid rental in record {record}: {reason}")
            }
            Self::NoRentals => f.write_str("there are no rentals in the input data"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IO(io) => Some(io),
            Self::CSV(csv) => Some(csv),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::CSV(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IO(err)
    }
}

#[derive(Debug)]
pub struct Context<T> {
    inner: T,
    context: String,
}

impl<T> Context<T> {
    pub const fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Display> Display for Context<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Error {} : {}", self.context, self.inner))
    }
}

impl<T: std::error::Error + 'static> std::error::Error for Context<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

pub trait HasContext<T, E> {
    fn context(self, f: impl Fn() -> String) -> Result<T, Context<E>>;

    fn context_str(self, s: &str) -> Result<T, Context<E>>
    where
        Self: Sized,
    {
        self.context(|| s.to_string())
    }
}

impl<T, E: Into<Error>> HasContext<T, Error> for Result<T, E> {
    fn context(self, f: impl Fn() -> String) -> Result<T, Context<Error>> {
        match self {
            Ok(res) => Ok(res),
            Err(inner) => {
                let inner = inner.into();
                let context = f();
                Err(Context { inner, context })
            }
        }
    }
}
