//! Conditional class-string composition.
//!
//! Plain names are always emitted verbatim; conditional groups contribute only
//! the names whose flag is set, in the order they were listed.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// One argument to [`class_names`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassName<'a> {
    /// Always included.
    Always(&'a str),
    /// Each name is included iff its flag is `true`.
    When(Vec<(&'a str, bool)>),
}

impl<'a> From<&'a str> for ClassName<'a> {
    fn from(name: &'a str) -> Self {
        Self::Always(name)
    }
}

impl<'a> From<&'a String> for ClassName<'a> {
    fn from(name: &'a String) -> Self {
        Self::Always(name.as_str())
    }
}

impl<'a, const N: usize> From<[(&'a str, bool); N]> for ClassName<'a> {
    fn from(flags: [(&'a str, bool); N]) -> Self {
        Self::When(flags.to_vec())
    }
}

impl<'a> From<&[(&'a str, bool)]> for ClassName<'a> {
    fn from(flags: &[(&'a str, bool)]) -> Self {
        Self::When(flags.to_vec())
    }
}

impl<'a> ClassName<'a> {
    fn enabled(&self) -> Vec<&'a str> {
        match self {
            Self::Always(name) => vec![*name],
            Self::When(flags) => flags
                .iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(name, _)| *name)
                .collect(),
        }
    }
}

/// Join every selected class name with a single space.
///
/// ```
/// use drag_assignment::util::class_names::{ClassName, class_names};
///
/// let class = class_names([ClassName::from("a"), [("b", true), ("c", false)].into(), "d".into()]);
/// assert_eq!(class, "a b d");
/// ```
pub fn class_names<'a, I>(args: I) -> String
where
    I: IntoIterator<Item = ClassName<'a>>,
{
    args.into_iter()
        .flat_map(|arg| arg.enabled())
        .collect::<Vec<_>>()
        .join(" ")
}
