// src/cli.rs

//! Argument handling and result formatting for the `ansi-palette` binary.
//!
//! The binary takes either a single palette index and prints its colour, or
//! a colour (three channel values, or one `#rrggbb` argument) and prints the
//! palette entry approximating it.

use std::ffi::OsStr;
use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};

use crate::config::OutputFormat;
use crate::convert::{ansi256_from_rgb, rgb_of};
use crate::rgb::Rgb;

/// What the user asked to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Index(u8),
    Rgb(Rgb),
}

/// Rejected command line. Every variant is reported on stderr and ends the
/// process with exit status 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    Usage { prog: String },
    InvalidNumber { prog: String, arg: String },
    InvalidColor { prog: String, arg: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage { prog } => {
                write!(f, "usage: {} ( <index> | <r> <g> <b> | #rrggbb )", prog)
            }
            CliError::InvalidNumber { prog, arg } => {
                write!(f, "{}: expected 8-bit unsigned integer: '{}'", prog, arg)
            }
            CliError::InvalidColor { prog, arg } => {
                write!(f, "{}: expected colour in #rrggbb form: '{}'", prog, arg)
            }
        }
    }
}

impl std::error::Error for CliError {}

fn parse_u8(prog: &str, arg: &str) -> Result<u8, CliError> {
    arg.parse().map_err(|_| CliError::InvalidNumber {
        prog: prog.to_string(),
        arg: arg.to_string(),
    })
}

/// Parses the arguments following the program name.
pub fn parse_args<S: AsRef<str>>(prog: &str, args: &[S]) -> Result<Request, CliError> {
    match args {
        [colour] if colour.as_ref().starts_with('#') => {
            let arg = colour.as_ref();
            arg.parse::<Rgb>()
                .map(Request::Rgb)
                .map_err(|e| {
                    debug!("{:#}", e);
                    CliError::InvalidColor {
                        prog: prog.to_string(),
                        arg: arg.to_string(),
                    }
                })
        }
        [index] => parse_u8(prog, index.as_ref()).map(Request::Index),
        [r, g, b] => Ok(Request::Rgb(Rgb::new(
            parse_u8(prog, r.as_ref())?,
            parse_u8(prog, g.as_ref())?,
            parse_u8(prog, b.as_ref())?,
        ))),
        _ => Err(CliError::Usage {
            prog: prog.to_string(),
        }),
    }
}

/// Like [`parse_args`], for arguments as the OS hands them over. An argument
/// that is not valid UTF-8 cannot be a number and is reported as such.
pub fn parse_os_args<S: AsRef<OsStr>>(prog: &str, args: &[S]) -> Result<Request, CliError> {
    if !matches!(args.len(), 1 | 3) {
        return Err(CliError::Usage {
            prog: prog.to_string(),
        });
    }
    let args = args
        .iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.to_str().ok_or_else(|| CliError::InvalidNumber {
                prog: prog.to_string(),
                arg: arg.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    parse_args(prog, &args)
}

fn hex<S: Serializer>(rgb: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(rgb)
}

/// Result of a conversion, ready to be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Conversion {
    /// Palette index to colour.
    ToRgb {
        index: u8,
        #[serde(serialize_with = "hex")]
        rgb: Rgb,
    },
    /// Colour to palette index, along with the colour of that entry.
    ToIndex {
        #[serde(serialize_with = "hex")]
        rgb: Rgb,
        index: u8,
        #[serde(serialize_with = "hex")]
        approx: Rgb,
    },
}

impl Conversion {
    pub fn run(request: Request) -> Self {
        match request {
            Request::Index(index) => Conversion::ToRgb {
                index,
                rgb: rgb_of(index),
            },
            Request::Rgb(rgb) => {
                let index = ansi256_from_rgb(rgb);
                Conversion::ToIndex {
                    rgb,
                    index,
                    approx: rgb_of(index),
                }
            }
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Json => serde_json::to_string(self)?,
        })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::ToRgb { index, rgb } => write!(f, "{:3}: {}", index, rgb),
            Conversion::ToIndex { rgb, index, approx } => {
                write!(f, "{} ~ {:3} {}", rgb, index, approx)
            }
        }
    }
}
