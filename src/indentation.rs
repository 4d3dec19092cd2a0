//! Indentation utilities


use std::fmt;

/// Print with indentation
pub trait DisplayIndented {
    /// Print the instance with the given indentation
    fn fmt<W: fmt::Write>(&self, indentation: &mut Indentation, f: &mut W) -> fmt::Result;
}

impl<T> DisplayIndented for T
    where T: fmt::Display
{
    fn fmt<W: fmt::Write>(&self, indentation: &mut Indentation, f: &mut W) -> fmt::Result {
        writeln!(f, "{}{}", indentation.lock(), self)
    }
}


/// Adapter for displaying a `DisplayIndented` without any indentation
pub struct Indented<'a, T: DisplayIndented>(pub &'a T);

impl<T: DisplayIndented> fmt::Display for Indented<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayIndented::fmt(self.0, &mut Indentation::root(), f)
    }
}


/// Indentation
///
/// Instances of this type represent either a lower bound or an exact length of
/// a sequences of space characters. Usually, a new `Indentation` will represent
/// a lower bound. After an instance has been locked, it will always refer to
/// the same exact length.
#[derive(Clone, Debug, PartialEq)]
pub enum Indentation {
    MoreThan(usize),
    Exact(usize),
}

impl Indentation {
    /// Create a new `Indentation` with a lower (i.e. nested) level
    ///
    /// This function locks the `Indentation`.
    pub fn sub(&mut self) -> Self {
        self.lock().sub()
    }

    /// Lock the indentation to a concrete value
    ///
    /// If the `Indentation` represents only a lower bound, this function will
    /// set an exact value which will be `INDENTATION_STEP` above the parent
    /// indentation level. If the `Indentation` is already locked, this function
    /// doesn't have any effect.
    pub fn lock(&mut self) -> LockedIndentation {
        match self {
            Self::MoreThan(i) => {
                let i = *i + INDENTATION_STEP;
                *self = Self::Exact(i);
                LockedIndentation(i)
            },
            Self::Exact(i) => LockedIndentation(*i),
        }
    }

    /// Create a new, locked "root"
    ///
    /// The `Indentation` returned will be locked to a length of `0`, i.e. no
    /// indentation at all.
    pub fn root() -> Self {
        Self::Exact(0)
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::root()
    }
}


#[derive(Copy, Clone, Debug)]
pub struct LockedIndentation(usize);

impl LockedIndentation {
    /// Create a new indentation with a lower (i.e. nested) level
    pub fn sub(&self) -> Indentation {
        Indentation::MoreThan(self.into())
    }
}

impl From<&LockedIndentation> for usize {
    fn from(i: &LockedIndentation) -> Self {
        i.0
    }
}

impl fmt::Display for LockedIndentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write;

        (0..self.0).try_for_each(|_| f.write_char(' '))
    }
}


/// Default number of spaces for one indentation step
const INDENTATION_STEP: usize = 4;
