use crate::{convert_with, input, InputError, Options, StyleOptions};

/// One parsed command-line request: what to convert and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The positional argument, either a path or literal HTML.
    pub raw_argument: String,
    pub options: StyleOptions,
}

impl Invocation {
    pub fn new(raw_argument: impl Into<String>, options: StyleOptions) -> Self {
        Self {
            raw_argument: raw_argument.into(),
            options,
        }
    }
}

/// Resolve the input and convert it, returning the Markdown to print.
///
/// # Examples
///
/// ```
/// use markdownify::{run, Invocation, StyleOptions};
///
/// let invocation = Invocation::new("<p>This is a paragraph.</p>", StyleOptions::default());
/// assert_eq!(run(&invocation).unwrap(), "This is a paragraph.");
/// ```
pub fn run(invocation: &Invocation) -> Result<String, InputError> {
    let html = input::resolve(&invocation.raw_argument)?;
    let options = Options::from(invocation.options);
    Ok(convert_with(&html, &options))
}
