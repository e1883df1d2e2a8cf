use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    sync::Arc,
};

/// An input variable of a truth table.
///
/// Variables are identified by their ordinal position in the declaration order;
/// the name is only used for display purposes.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: Arc<str>,
    pub id: usize,
}

impl Variable {
    pub fn new(name: &str, id: usize) -> Self {
        Self {
            name: Arc::from(name),
            id,
        }
    }

    /// Generates the default names `x0 .. x{n-1}`.
    pub fn default_names(count: usize) -> Vec<Self> {
        (0..count).map(|i| Self::new(&format!("x{i}"), i)).collect()
    }

    /// Assigns ordinals to a list of names in declaration order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Self::new(name.as_ref(), i))
            .collect()
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.id
    }
}
