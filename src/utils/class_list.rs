use std::{borrow::Cow, fmt};

use indexmap::IndexSet;

/// An ordered set of CSS class tokens.
///
/// Insertion order is preserved and duplicate tokens collapse onto their
/// first occurrence, so appending never reorders classes that were added
/// earlier. Pushed strings may contain whitespace; they are split into
/// individual tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassList {
    classes: IndexSet<Cow<'static, str>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class. Multi-token strings are split on whitespace and
    /// empty strings are ignored.
    pub fn push(&mut self, class: impl Into<Cow<'static, str>>) {
        let class = class.into();
        if class.chars().any(char::is_whitespace) {
            self.extend_split(&class);
        } else if !class.is_empty() {
            self.classes.insert(class);
        }
    }

    /// Splits `classes` on whitespace and appends each token.
    pub fn extend_split(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            if !self.classes.contains(token) {
                self.classes.insert(Cow::Owned(token.to_owned()));
            }
        }
    }

    /// Removes a token, keeping the order of the remaining ones.
    pub fn remove(&mut self, class: &str) -> bool {
        self.classes.shift_remove(class)
    }

    /// Inserts the token if absent, removes it if present. Returns whether
    /// the token is present afterwards.
    pub fn toggle(&mut self, class: impl Into<Cow<'static, str>>) -> bool {
        let class = class.into();
        if self.classes.contains(class.as_ref()) {
            self.classes.shift_remove(class.as_ref());
            false
        } else {
            self.classes.insert(class);
            true
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(Cow::as_ref)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, class) in self.classes.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_split(classes);
        list
    }
}

/// Builds a [`ClassList`] from a list of class expressions.
#[macro_export]
macro_rules! class_list {
    ( $( $class:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut list = $crate::ClassList::new();
        $( list.push($class); )*
        list
    }};
}
