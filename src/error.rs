// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Error types

use std::error::Error as StdError;
use std::fmt;
use std::io;

use num_bigint::BigInt;

use crate::parsers;


/// Error type for constant generation
#[derive(Debug)]
pub enum Error {
    /// A parameter the derivation can't work with
    InvalidParameter{name: &'static str, value: u32, reason: &'static str},
    /// A generated literal which does not fit its declared width
    OutOfRange{name: String, value: BigInt, width: u32},
    /// Malformed input, e.g. a command line argument
    Parse(String),
    IO(io::Error),
}

impl From<io::ErrorKind> for Error {
    fn from(err: io::ErrorKind) -> Self {
        Self::IO(err.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::Parse(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::IO(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter{name, value, reason} => write!(f, "invalid {} {}: {}", name, value, reason),
            Self::OutOfRange{name, value, width}        => write!(
                f,
                "{} = {} does not fit into {} bits",
                name,
                value,
                width,
            ),
            Self::Parse(err)                            => fmt::Display::fmt(err, f),
            Self::IO(_)                                 => fmt::Display::fmt("IO error", f),
        }
    }
}


/// Convert a `nom::Err` into an `Error`
pub(crate) fn convert_error(input: &str, err: nom::Err<parsers::Error>) -> Error {
    use nom::error::convert_error;

    match err {
        nom::Err::Incomplete(_) => io::ErrorKind::UnexpectedEof.into(),
        nom::Err::Error(e) | nom::Err::Failure(e) => convert_error(input, e).into(),
    }
}
