use std::{fmt, io};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What failed. Every error the library reports carries exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A source directory, content file, or output file was unreadable
    /// or unwritable.
    Io,
    /// A metadata header was present but its content is not the
    /// key/value structure the catalog expects.
    MetadataParse,
    /// Extracted metadata lacks a key the catalog cannot do without.
    MissingField,
    /// A consumer's configuration file is malformed.
    Config,
}

/// An error with key/value context parameters and a chain of the errors
/// that led to it. The chain renders indented, outermost first.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    params: Vec<(String, String)>,
    prev: Option<Box<Error>>,
}

impl Error {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Error { kind, message: message.into(), params: vec![], prev: None }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Chains `self` behind `other`: `other` becomes the reported error
    /// and `self` the deepest link behind it.
    pub fn chain(self, mut other: Error) -> Error {
        fn append(error: Error, behind: &mut Error) {
            match behind.prev.as_mut() {
                Some(prev) => append(error, prev),
                None => behind.prev = Some(Box::new(error)),
            }
        }

        append(self, &mut other);
        other
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render(error: &Error, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let pad = "    ".repeat(depth);
            writeln!(f, "{pad}{}", error.message)?;
            for (key, value) in &error.params {
                writeln!(f, "{pad}    {key}: {value}")?;
            }

            match &error.prev {
                Some(prev) => render(prev, depth + 1, f),
                None => Ok(()),
            }
        }

        render(self, 0, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.prev.as_deref().map(|prev| prev as _)
    }
}

macro_rules! impl_from_error {
    ($T:ty => $kind:ident) => {
        impl From<$T> for Error {
            fn from(error: $T) -> Self {
                Error::new(Kind::$kind, error.to_string())
            }
        }
    };
}

impl_from_error!(io::Error => Io);
impl_from_error!(serde_yaml::Error => MetadataParse);
impl_from_error!(chrono::format::ParseError => MetadataParse);
impl_from_error!(toml::de::Error => Config);
impl_from_error!(serde_json::Error => Io);

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($kind:ident : $msg:expr $(, $key:expr => $value:expr)* $(,)?) => (
        $crate::error::Error::new($crate::error::Kind::$kind, $msg)
            $(.param($key, $value))*
    );
}

#[doc(hidden)]
#[macro_export]
macro_rules! err {
    ($($token:tt)*) => (Err($crate::error!($($token)*)));
}

pub trait Chainable<T> {
    /// Wraps the error behind `other`; `other`'s kind is the one
    /// callers observe.
    fn chain(self, other: Error) -> Result<T>;

    /// Annotates the error with one more context parameter, keeping its
    /// kind.
    fn context(self, key: &str, value: impl fmt::Display) -> Result<T>;
}

impl<T, E: Into<Error>> Chainable<T> for Result<T, E> {
    fn chain(self, other: Error) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().chain(other)),
        }
    }

    fn context(self, key: &str, value: impl fmt::Display) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().param(key, value)),
        }
    }
}
