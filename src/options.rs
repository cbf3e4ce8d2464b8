// Style option choices.
//
// Every formatting knob exposed on the command line is a closed set of
// literal markers or keywords. Each set is an enum generated by `choice!`,
// which gives it `as_str`, `Display`, `FromStr`, and (with the `cli`
// feature) a `clap::ValueEnum` impl whose possible values are the literals.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseChoiceError;

macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $option:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every choice, in the order shown in `--help`.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The literal written on the command line for this choice.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str() == s)
                    .ok_or_else(|| ParseChoiceError {
                        option: $option,
                        allowed: Self::ALL
                            .iter()
                            .map(|choice| choice.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                        value: s.to_string(),
                    })
            }
        }

        #[cfg(feature = "cli")]
        impl clap::ValueEnum for $name {
            fn value_variants<'a>() -> &'a [Self] {
                Self::ALL
            }

            fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
                Some(clap::builder::PossibleValue::new(self.as_str()))
            }
        }
    };
}

choice! {
    /// Heading style.
    #[derive(Default)]
    pub enum HeadingStyle as "heading-style" {
        /// Underlined with `=` or `-` (default). Only for h1/h2; deeper
        /// headings always use ATX.
        #[default]
        Setext => "setext",
        /// `# Heading`.
        Atx => "atx",
    }
}

choice! {
    /// Thematic break marker.
    ///
    /// The engine's own default is `* * *`, which is not one of the choices.
    pub enum ThematicBreak as "hr" {
        Asterisks => "***",
        Dashes => "---",
        Underscores => "___",
    }
}

choice! {
    /// Unordered list marker.
    #[derive(Default)]
    pub enum BulletListMarker as "bullet-list-marker" {
        Dash => "-",
        Plus => "+",
        #[default]
        Asterisk => "*",
    }
}

choice! {
    /// How `<pre>` blocks are written.
    #[derive(Default)]
    pub enum CodeBlockStyle as "code-block-style" {
        /// Four-space indentation (default).
        #[default]
        Indented => "indented",
        /// Fenced with [`Fence`], carrying the language when known.
        Fenced => "fenced",
    }
}

choice! {
    /// Emphasis delimiter.
    #[derive(Default)]
    pub enum EmDelimiter as "em-delimiter" {
        #[default]
        Underscore => "_",
        Asterisk => "*",
    }
}

choice! {
    /// Fenced code block delimiter.
    #[derive(Default)]
    pub enum Fence as "fence" {
        #[default]
        Backticks => "```",
        Tildes => "~~~",
    }
}

impl Fence {
    /// The character the fence is made of.
    pub fn marker(self) -> char {
        match self {
            Fence::Backticks => '`',
            Fence::Tildes => '~',
        }
    }
}

choice! {
    /// Strong emphasis delimiter.
    #[derive(Default)]
    pub enum StrongDelimiter as "strong-delimiter" {
        Underscores => "__",
        #[default]
        Asterisks => "**",
    }
}

choice! {
    /// How links are written.
    #[derive(Default)]
    pub enum LinkStyle as "link-style" {
        /// `[text](url)` (default).
        #[default]
        Inlined => "inlined",
        /// `[text][id]` with definitions appended after the document.
        Referenced => "referenced",
    }
}

choice! {
    /// Reference form used when [`LinkStyle::Referenced`] is selected.
    #[derive(Default)]
    pub enum LinkReferenceStyle as "link-reference-style" {
        /// `[text][1]` (default).
        #[default]
        Full => "full",
        /// `[text][]`.
        Collapsed => "collapsed",
        /// `[text]`.
        Shortcut => "shortcut",
    }
}

/// Style overrides requested for one invocation.
///
/// Every key is optional; an absent key keeps the engine default. Turned
/// into engine [`Options`](crate::Options) with `Options::from`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct StyleOptions {
    /// Heading style
    #[cfg_attr(feature = "cli", arg(long))]
    pub heading_style: Option<HeadingStyle>,

    /// Thematic break marker
    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub hr: Option<ThematicBreak>,

    /// Bullet list marker
    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub bullet_list_marker: Option<BulletListMarker>,

    /// Code block style
    #[cfg_attr(feature = "cli", arg(long))]
    pub code_block_style: Option<CodeBlockStyle>,

    /// Emphasis delimiter
    #[cfg_attr(feature = "cli", arg(long))]
    pub em_delimiter: Option<EmDelimiter>,

    /// Fenced code block delimiter
    #[cfg_attr(feature = "cli", arg(long))]
    pub fence: Option<Fence>,

    /// Strong delimiter
    #[cfg_attr(feature = "cli", arg(long))]
    pub strong_delimiter: Option<StrongDelimiter>,

    /// Link style
    #[cfg_attr(feature = "cli", arg(long))]
    pub link_style: Option<LinkStyle>,

    /// Reference link style
    #[cfg_attr(feature = "cli", arg(long))]
    pub link_reference_style: Option<LinkReferenceStyle>,
}
