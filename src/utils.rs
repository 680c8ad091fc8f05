use std::error::Error;
use std::fmt::Formatter;

/// Multi-line `Debug` representation of an error and all of its sources, for
/// logs. Used by the `Debug` impls of our error enums.
pub fn error_chain_fmt(
    e: &impl Error,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}

/// Single-line description of an error and its sources, joined by `: `.
///
/// `reqwest::Error` only displays its outermost layer ("error sending request
/// for url (...)"); the interesting part (connection refused, dns, timeout) is
/// further down the chain, and this is what the caller gets to see.
pub fn describe_error(e: &dyn Error) -> String {
    let mut description = e.to_string();
    let mut current = e.source();
    while let Some(cause) = current {
        let message = cause.to_string();
        // hyper and friends sometimes repeat the inner message verbatim
        if !description.ends_with(&message) {
            description.push_str(": ");
            description.push_str(&message);
        }
        current = cause.source();
    }
    description
}
