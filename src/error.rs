pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

/// Which side of the load pipeline an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Network, I/O or non-success HTTP status
    Fetch,
    /// Malformed JSON or a payload that does not fit the schema
    Decode,
    Other,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    pub fn failure(&self) -> Failure {
        match *self.inner {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(_) => Failure::Fetch,
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(_) => Failure::Fetch,
            ErrorKind::StdIoError(_) | ErrorKind::HttpStatus(_) => Failure::Fetch,
            ErrorKind::SerdeJsonError(_) | ErrorKind::DecodeError(_) => Failure::Decode,
            ErrorKind::RegexError(_) | ErrorKind::ParseError(_) | ErrorKind::DomError(_) => {
                Failure::Other
            }
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(e: wasm_bindgen::JsValue) -> Error {
        Error::new(ErrorKind::DomError(format!("{e:?}")))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::new(ErrorKind::RegexError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StdIoError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    StdIoError(std::io::Error),
    RegexError(regex::Error),
    HttpStatus(u16),
    DecodeError(String),
    ParseError(String),
    DomError(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e:?}"),
            ErrorKind::RegexError(ref e) => write!(f, "RegexError: {e:?}"),
            ErrorKind::HttpStatus(status) => write!(f, "HttpStatus: {status}"),
            ErrorKind::DecodeError(ref e) => write!(f, "DecodeError: {e:?}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
            ErrorKind::DomError(ref e) => write!(f, "DomError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "request failed: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "request failed: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "invalid JSON: {e}"),
            ErrorKind::StdIoError(ref e) => write!(f, "I/O error: {e}"),
            ErrorKind::RegexError(ref e) => write!(f, "invalid pattern: {e}"),
            ErrorKind::HttpStatus(status) => write!(f, "HTTP error! status: {status}"),
            ErrorKind::DecodeError(ref e) => write!(f, "decode error: {e}"),
            ErrorKind::ParseError(ref e) => write!(f, "parse error: {e}"),
            ErrorKind::DomError(ref e) => write!(f, "DOM error: {e}"),
        }
    }
}
