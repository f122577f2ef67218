use crate::config::DEFAULT_BUCKETS;

/// A name-to-value association stored in the [`SymbolTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The variable name.
    pub name:  String,
    /// The current value.
    pub value: i64,
}

/// Stores every visible variable of a running program.
///
/// The table uses open hashing: names are hashed into a fixed number of
/// buckets and colliding bindings are chained inside their bucket, most
/// recently inserted first. There is never more than one binding per name;
/// defining an existing name overwrites its value in place.
///
/// Scoping is not handled here. The table is flat, and the
/// [`ScopeStack`](crate::interpreter::scope::ScopeStack) removes the bindings
/// a scope introduced when that scope closes.
///
/// ## Example
/// ```
/// use borg::interpreter::symbol_table::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// table.define("BORAMIR", 25);
/// table.define("BORAMIR", 26);
///
/// assert_eq!(table.lookup("BORAMIR"), Some(26));
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.lookup("GANDALF"), None);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    // Each chain keeps its newest binding at the end.
    buckets: Vec<Vec<Binding>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates an empty table with [`DEFAULT_BUCKETS`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Creates an empty table with the given number of buckets.
    ///
    /// A bucket count of zero is raised to one, which turns the table into a
    /// single chain.
    #[must_use]
    pub fn with_buckets(buckets: usize) -> Self {
        Self { buckets: vec![Vec::new(); buckets.max(1)], }
    }

    /// Returns the number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Hashes a name to its bucket index.
    ///
    /// The hash is the sum of each character's code weighted by its one-based
    /// position, reduced modulo the bucket count.
    ///
    /// ## Example
    /// ```
    /// use borg::interpreter::symbol_table::SymbolTable;
    ///
    /// let table = SymbolTable::with_buckets(10);
    /// // 'A' * 1 + 'B' * 2 = 65 + 132 = 197
    /// assert_eq!(table.hash("AB"), 7);
    /// ```
    #[must_use]
    pub fn hash(&self, name: &str) -> usize {
        let sum = name.chars()
                      .zip(1usize..)
                      .fold(0usize, |acc, (c, position)| {
                          acc.wrapping_add((c as usize).wrapping_mul(position))
                      });
        sum % self.buckets.len()
    }

    fn chain(&self, name: &str) -> &Vec<Binding> {
        &self.buckets[self.hash(name)]
    }

    fn chain_mut(&mut self, name: &str) -> &mut Vec<Binding> {
        let index = self.hash(name);
        &mut self.buckets[index]
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.chain_mut(name)
            .iter_mut()
            .rev()
            .find(|binding| binding.name == name)
    }

    /// Inserts a binding, or overwrites the value if `name` is already bound.
    pub fn define(&mut self, name: &str, value: i64) {
        if let Some(binding) = self.find_mut(name) {
            binding.value = value;
            return;
        }
        log::trace!("binding {name} in bucket {}", self.hash(name));
        self.chain_mut(name).push(Binding { name: name.to_string(),
                                            value });
    }

    /// Updates the value of an existing binding.
    ///
    /// Does nothing if `name` is not bound; the return value tells whether a
    /// binding was updated.
    ///
    /// ## Example
    /// ```
    /// use borg::interpreter::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// assert!(!table.assign("LEGOLAS", 1000));
    /// assert_eq!(table.lookup("LEGOLAS"), None);
    ///
    /// table.define("LEGOLAS", 101);
    /// assert!(table.assign("LEGOLAS", 1000));
    /// assert_eq!(table.lookup("LEGOLAS"), Some(1000));
    /// ```
    pub fn assign(&mut self, name: &str, value: i64) -> bool {
        self.find_mut(name)
            .map(|binding| binding.value = value)
            .is_some()
    }

    /// Returns the current value of `name`, or `None` if it is not bound.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.chain(name)
            .iter()
            .rev()
            .find(|binding| binding.name == name)
            .map(|binding| binding.value)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Deletes the binding for `name`, returning its last value.
    ///
    /// Removing an unbound name is a no-op and returns `None`.
    pub fn remove(&mut self, name: &str) -> Option<i64> {
        let chain = self.chain_mut(name);
        let position = chain.iter().rposition(|binding| binding.name == name)?;
        Some(chain.remove(position).value)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterates over all bindings, bucket by bucket, newest first within each
    /// bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colliding_names_share_a_chain() {
        let mut table = SymbolTable::with_buckets(1);
        table.define("APPLE", 33);
        table.define("PEN", 32);
        table.define("PINEAPPLE", 45);

        assert_eq!(table.buckets[0].len(), 3);
        assert_eq!(table.lookup("APPLE"), Some(33));
        assert_eq!(table.lookup("PEN"), Some(32));
        assert_eq!(table.lookup("PINEAPPLE"), Some(45));
    }

    #[test]
    fn chain_iterates_newest_first() {
        let mut table = SymbolTable::with_buckets(1);
        table.define("A", 1);
        table.define("B", 2);
        table.define("C", 3);

        let names: Vec<_> = table.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn removing_from_the_middle_of_a_chain_keeps_neighbours() {
        let mut table = SymbolTable::with_buckets(1);
        table.define("A", 1);
        table.define("B", 2);
        table.define("C", 3);

        assert_eq!(table.remove("B"), Some(2));
        assert_eq!(table.remove("B"), None);
        assert_eq!(table.lookup("A"), Some(1));
        assert_eq!(table.lookup("C"), Some(3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn redefinition_does_not_grow_the_chain() {
        let mut table = SymbolTable::with_buckets(1);
        table.define("X", 1);
        table.define("X", 2);
        table.define("X", 3);

        assert_eq!(table.buckets[0].len(), 1);
        assert_eq!(table.lookup("X"), Some(3));
    }

    #[test]
    fn negative_values_are_not_mistaken_for_absence() {
        let mut table = SymbolTable::new();
        table.define("NEG", -1);
        table.define("MIN", i64::MIN);

        assert_eq!(table.lookup("NEG"), Some(-1));
        assert_eq!(table.lookup("MIN"), Some(i64::MIN));
    }

    #[test]
    fn zero_buckets_is_clamped() {
        let mut table = SymbolTable::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);

        table.define("X", 5);
        assert_eq!(table.lookup("X"), Some(5));
    }
}
