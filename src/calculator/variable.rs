use crate::variant::Variant;

/// Compares two identifiers the way the calculator does: ignoring case.
#[must_use]
pub fn same_name(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// A named value that expressions can refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name:      String,
    pub value: Variant,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Variant>) -> Self {
        Self { name:  name.into(),
               value: value.into(), }
    }

    /// Creates a variable holding `Null`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Null)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> &Variant {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Variant>) {
        self.value = value.into();
    }
}

/// An ordered set of variables with case-insensitive names.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::variable::{Variable, VariableCollection},
///     variant::Variant,
/// };
///
/// let mut variables = VariableCollection::new();
/// variables.add(Variable::new("A", 1));
/// variables.add(Variable::new("a", 2));
///
/// assert_eq!(variables.len(), 1);
/// assert_eq!(variables.find_by_name("A").map(Variable::value), Some(&Variant::Integer(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableCollection {
    variables: Vec<Variable>,
}

impl VariableCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, or replaces the value of the variable with the same
    /// name.
    pub fn add(&mut self, variable: Variable) {
        match self.find_by_name_mut(&variable.name) {
            Some(existing) => existing.value = variable.value,
            None => self.variables.push(variable),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Variable> {
        self.variables.get(index)
    }

    #[must_use]
    pub fn get_all(&self) -> &[Variable] {
        &self.variables
    }

    #[must_use]
    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.variables
            .iter()
            .position(|variable| same_name(&variable.name, name))
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|variable| same_name(&variable.name, name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables
            .iter_mut()
            .find(|variable| same_name(&variable.name, name))
    }

    /// Returns the variable called `name`, creating it with a `Null` value if
    /// it does not exist.
    pub fn locate(&mut self, name: &str) -> &mut Variable {
        let index = self.find_index_by_name(name).unwrap_or_else(|| {
                                                      self.variables.push(Variable::named(name));
                                                      self.variables.len() - 1
                                                  });
        &mut self.variables[index]
    }

    /// Removes and returns the variable at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Variable> {
        (index < self.variables.len()).then(|| self.variables.remove(index))
    }

    /// Removes and returns the variable called `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Variable> {
        self.find_index_by_name(name).and_then(|index| self.remove(index))
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Resets every value to `Null`, keeping the names.
    pub fn clear_values(&mut self) {
        for variable in &mut self.variables {
            variable.value = Variant::Null;
        }
    }
}

impl FromIterator<Variable> for VariableCollection {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut collection = Self::new();
        for variable in iter {
            collection.add(variable);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ignore_case() {
        assert!(!same_name("ab", "abc"));
        assert!(same_name("Äbc", "äBC"));
    }

    #[test]
    fn locate_creates_missing_variables() {
        let mut variables = VariableCollection::new();
        variables.locate("x").set_value(5);
        variables.locate("X").set_value(6);

        assert_eq!(variables.len(), 1);
        assert_eq!(variables.get(0).map(Variable::value), Some(&Variant::Integer(6)));
    }

    #[test]
    fn clear_values_keeps_names() {
        let mut variables: VariableCollection = [Variable::new("a", 1), Variable::new("b", "x")].into_iter()
                                                                                                   .collect();
        variables.clear_values();

        assert_eq!(variables.len(), 2);
        assert!(variables.get_all().iter().all(|variable| variable.value.is_null()));
        assert!(variables.remove_by_name("B").is_some());
        assert!(variables.find_by_name("b").is_none());
    }
}
