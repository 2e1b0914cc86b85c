//! Command-line argument parsing.
//!
//! Two flags are required, `--serial=<serial>` and `--senha=<senha>`, in any
//! order. Anything else on the command line is ignored, but every argument
//! must be valid UTF-8.

use std::ffi::OsString;

use rhid_core::{Error, UnlockRequest};

const SERIAL_FLAG: &str = "--serial=";
const SENHA_FLAG: &str = "--senha=";

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Unlock(UnlockRequest),
}

/// Parse arguments (without the program name).
pub fn parse<I>(args: I) -> Result<Invocation, Error>
where
    I: IntoIterator<Item = OsString>,
{
    let args = args
        .into_iter()
        .map(|a| {
            a.into_string()
                .map_err(|_| Error::Configuration("an argument is not valid UTF-8".to_string()))
        })
        .collect::<Result<Vec<String>, Error>>()?;

    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(Invocation::Help);
    }

    let serial = flag_value(&args, SERIAL_FLAG)
        .ok_or_else(|| Error::Configuration("missing --serial=<serial>".to_string()))?;
    let senha = flag_value(&args, SENHA_FLAG)
        .ok_or_else(|| Error::Configuration("missing --senha=<senha>".to_string()))?;

    Ok(Invocation::Unlock(UnlockRequest::new(serial, senha)))
}

/// Value of the first argument starting with `prefix`, if non-empty.
fn flag_value<'a>(args: &'a [String], prefix: &str) -> Option<&'a str> {
    args.iter()
        .find_map(|a| a.strip_prefix(prefix))
        .filter(|v| !v.is_empty())
}
