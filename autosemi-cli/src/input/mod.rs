//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_inputs;

use autosemi_core::Input;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Where a document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Path of a file source
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => Some(path),
        }
    }

    /// Convert into a core input, opening stdin lazily
    pub fn into_input(self) -> Input {
        match self {
            InputSource::Stdin => Input::from_reader(io::stdin()),
            InputSource::File(path) => Input::from_file(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
