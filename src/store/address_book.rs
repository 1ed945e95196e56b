//! The address book: an ordered, duplicate-free collection of persons.

use crate::error::{StoreError, StoreResult};
use crate::models::Person;

/// In-memory ordered collection of [`Person`] records.
///
/// Order is insertion order until [`AddressBook::sort`] is called. No two
/// stored persons are equal. Every mutation either completes fully or leaves
/// the book untouched.
///
/// The book carries no locking. Callers that share it across threads must
/// serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an address book from existing records, rejecting duplicates.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> StoreResult<Self> {
        let mut book = Self::new();
        book.replace_all(persons)?;
        Ok(book)
    }

    /// Append a person.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicatePerson` if an equal person is already stored.
    pub fn add(&mut self, person: Person) -> StoreResult<()> {
        if self.contains(&person) {
            return Err(StoreError::DuplicatePerson);
        }
        tracing::debug!(name = %person.name(), "Adding person");
        self.persons.push(person);
        Ok(())
    }

    /// Remove the stored person equal to `person` and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PersonNotFound` if no equal person is stored.
    pub fn remove(&mut self, person: &Person) -> StoreResult<Person> {
        let position = self
            .persons
            .iter()
            .position(|p| p == person)
            .ok_or(StoreError::PersonNotFound)?;
        let removed = self.persons.remove(position);
        tracing::debug!(name = %removed.name(), position, "Removed person");
        Ok(removed)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p == person)
    }

    /// The person at a zero-based position, if any.
    pub fn get(&self, position: usize) -> Option<&Person> {
        self.persons.get(position)
    }

    /// All persons in their current order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Sort in place by name, ascending.
    ///
    /// Names compare as plain strings, so the order is case-sensitive
    /// (`"Bob" < "Charlie" < "alice"`). The sort is stable: persons with equal
    /// names keep their relative order.
    pub fn sort(&mut self) {
        self.persons
            .sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        tracing::debug!(count = self.persons.len(), "Sorted address book");
    }

    /// Remove every person.
    pub fn clear(&mut self) {
        self.persons.clear();
    }

    /// Replace the whole content, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicatePerson` if the input holds two equal
    /// persons; the book is left unchanged in that case.
    pub fn replace_all(&mut self, persons: impl IntoIterator<Item = Person>) -> StoreResult<()> {
        let mut replacement: Vec<Person> = Vec::new();
        for person in persons {
            if replacement.contains(&person) {
                return Err(StoreError::DuplicatePerson);
            }
            replacement.push(person);
        }
        self.persons = replacement;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, Name, Phone, Tag};

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::new(name, false).unwrap(),
            Phone::new(phone, false).unwrap(),
            Email::new("someone@example.com", false).unwrap(),
            Address::new("1 Example Road", false).unwrap(),
            Vec::<Tag>::new(),
        )
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|p| p.name().as_str()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut book = AddressBook::new();
        book.add(person("Zed", "1")).unwrap();
        book.add(person("Amy", "2")).unwrap();
        assert_eq!(names(&book), vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut book = AddressBook::new();
        book.add(person("Amy", "1")).unwrap();
        let result = book.add(person("Amy", "1"));
        assert_eq!(result, Err(StoreError::DuplicatePerson));
        assert_eq!(book.len(), 1);

        // same name, different phone is not a duplicate
        book.add(person("Amy", "2")).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut book = AddressBook::new();
        book.add(person("Amy", "1")).unwrap();
        book.add(person("Ben", "2")).unwrap();

        let removed = book.remove(&person("Amy", "1")).unwrap();
        assert_eq!(removed.name().as_str(), "Amy");
        assert_eq!(names(&book), vec!["Ben"]);

        assert_eq!(
            book.remove(&person("Amy", "1")),
            Err(StoreError::PersonNotFound)
        );
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let mut book = AddressBook::new();
        book.add(person("Bob", "1")).unwrap();
        book.add(person("alice", "2")).unwrap();
        book.add(person("Charlie", "3")).unwrap();

        book.sort();
        assert_eq!(names(&book), vec!["Bob", "Charlie", "alice"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut book = AddressBook::new();
        book.add(person("Dan", "3")).unwrap();
        book.add(person("Amy", "1")).unwrap();
        book.add(person("Dan", "1")).unwrap();
        book.add(person("Dan", "2")).unwrap();

        book.sort();
        let order: Vec<(&str, &str)> = book
            .iter()
            .map(|p| (p.name().as_str(), p.phone().as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("Amy", "1"), ("Dan", "3"), ("Dan", "1"), ("Dan", "2")]
        );
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut book = AddressBook::new();
        book.sort();
        assert!(book.is_empty());

        book.add(person("Solo", "1")).unwrap();
        book.sort();
        assert_eq!(names(&book), vec!["Solo"]);
    }

    #[test]
    fn test_replace_all_rejects_duplicates_atomically() {
        let mut book = AddressBook::new();
        book.add(person("Keep", "1")).unwrap();

        let result = book.replace_all(vec![person("A", "1"), person("A", "1")]);
        assert_eq!(result, Err(StoreError::DuplicatePerson));
        assert_eq!(names(&book), vec!["Keep"]);

        book.replace_all(vec![person("B", "1"), person("A", "1")])
            .unwrap();
        assert_eq!(names(&book), vec!["B", "A"]);
    }

    #[test]
    fn test_clear() {
        let mut book = AddressBook::from_persons(vec![person("A", "1")]).unwrap();
        book.clear();
        assert!(book.is_empty());
    }
}
