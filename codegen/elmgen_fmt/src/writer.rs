//! Writer combinators: composable fragments of deferred rendering.
//!
//! A [`Writer`] is a tree of output fragments. Invoking [`Writer::write`]
//! renders the whole tree to text; rendering is pure and idempotent, so
//! writing the same tree twice yields byte-identical output.
//!
//! Indentation is absolute, not cumulative: [`Writer::indent`] prefixes
//! its child's first line with `columns` spaces and propagates `columns`
//! as the ambient indent that multi-line [`Writer::sep_by`] blocks prefix
//! their separator lines with. Range columns assigned by the positioning
//! pass are absolute columns, so nesting an indent inside another does not
//! stack.

/// A deferred-rendering fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Writer {
    /// Raw text.
    Str(String),
    /// Text rendered wrapped in double quotes.
    Literal(String),
    /// Children joined with single spaces.
    Spaced(Vec<Writer>),
    /// Children concatenated with no separator (dotted qualified names).
    Joined(Vec<Writer>),
    /// Child wrapped in parentheses.
    Paren(Box<Writer>),
    /// General list-join; implements every comma/pipe-delimited construct
    /// by varying the separators and the newline flag.
    SepBy {
        pre: String,
        sep: String,
        post: String,
        newline: bool,
        items: Vec<Writer>,
    },
    /// First line prefixed with `columns` spaces; `columns` becomes the
    /// ambient indent for nested blocks.
    Indent { columns: usize, inner: Box<Writer> },
    /// Children joined with hard newlines; adds no indentation of its own.
    Breaked(Vec<Writer>),
}

impl Writer {
    /// A raw text leaf.
    pub fn string(text: impl Into<String>) -> Self {
        Writer::Str(text.into())
    }

    /// A quoted string leaf.
    pub fn literal(text: impl Into<String>) -> Self {
        Writer::Literal(text.into())
    }

    /// Join children with single spaces.
    pub fn spaced(items: Vec<Writer>) -> Self {
        Writer::Spaced(items)
    }

    /// Concatenate children with no separator.
    pub fn join(items: Vec<Writer>) -> Self {
        Writer::Joined(items)
    }

    /// Wrap a child in parentheses.
    pub fn paren(inner: Writer) -> Self {
        Writer::Paren(Box::new(inner))
    }

    /// List-join with `(pre, sep, post)` separators.
    ///
    /// Inline (`newline == false`): `pre + items.join(sep) + post` on one
    /// line. Multi-line: the first item follows `pre` on the same line,
    /// every further item sits on its own line prefixed by the ambient
    /// indent and `sep`, and a non-empty `post` gets its own
    /// indent-prefixed line.
    pub fn sep_by(separators: (&str, &str, &str), newline: bool, items: Vec<Writer>) -> Self {
        let (pre, sep, post) = separators;
        Writer::SepBy {
            pre: pre.to_owned(),
            sep: sep.to_owned(),
            post: post.to_owned(),
            newline,
            items,
        }
    }

    /// Indent a child to an absolute column.
    pub fn indent(columns: usize, inner: Writer) -> Self {
        Writer::Indent {
            columns,
            inner: Box::new(inner),
        }
    }

    /// Join children with hard newlines.
    pub fn breaked(items: Vec<Writer>) -> Self {
        Writer::Breaked(items)
    }

    /// Render to text at column zero.
    pub fn write(&self) -> String {
        self.write_at(0)
    }

    /// Render to text with `indent` as the ambient indent.
    pub fn write_at(&self, indent: usize) -> String {
        match self {
            Writer::Str(text) => text.clone(),
            Writer::Literal(text) => format!("\"{text}\""),
            Writer::Spaced(items) => Self::write_all(items, indent).join(" "),
            Writer::Joined(items) => Self::write_all(items, indent).concat(),
            Writer::Paren(inner) => format!("({})", inner.write_at(indent)),
            Writer::SepBy {
                pre,
                sep,
                post,
                newline: false,
                items,
            } => format!("{pre}{}{post}", Self::write_all(items, indent).join(sep)),
            Writer::SepBy {
                pre,
                sep,
                post,
                newline: true,
                items,
            } => {
                let pad = " ".repeat(indent);
                let mut out = pre.clone();
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        out.push('\n');
                        out.push_str(&pad);
                        out.push_str(sep);
                    }
                    out.push_str(&item.write_at(indent));
                }
                if !post.is_empty() {
                    out.push('\n');
                    out.push_str(&pad);
                    out.push_str(post);
                }
                out
            }
            Writer::Indent { columns, inner } => {
                format!("{}{}", " ".repeat(*columns), inner.write_at(*columns))
            }
            Writer::Breaked(items) => Self::write_all(items, indent).join("\n"),
        }
    }

    fn write_all(items: &[Writer], indent: usize) -> Vec<String> {
        items.iter().map(|item| item.write_at(indent)).collect()
    }
}
