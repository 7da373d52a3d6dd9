use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::RegistryError;

pub type Id = String;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: Id,
    pub name: String,
    pub dept: String,
}

impl Student {
    pub fn new(id: &str, name: &str, dept: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            dept: dept.to_owned(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.name, self.dept)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: Id,
    pub department: String,
}

impl Employee {
    pub fn new(id: &str, department: &str) -> Self {
        Self {
            id: id.to_owned(),
            department: department.to_owned(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.id, self.department)
    }
}

pub trait Registry {
    type Record;

    /// Inserts or overwrites, returning whatever was stored under `id` before.
    fn set(&mut self, id: &str, record: Self::Record) -> Result<Option<Self::Record>, RegistryError>;

    fn get(&self, id: &str) -> Option<&Self::Record>;

    fn remove(&mut self, id: &str) -> Result<Self::Record, RegistryError>;

    fn entries(&self) -> Vec<(&str, &Self::Record)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_id(id: &str) -> Result<(), RegistryError> {
    if id.trim().is_empty() {
        return Err(RegistryError::InvalidKey);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortedRegistry<R> {
    data: BTreeMap<Id, R>,
}

impl<R> SortedRegistry<R> {
    pub fn new() -> Self {
        Self { data: BTreeMap::new() }
    }
}

impl<R> Default for SortedRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Registry for SortedRegistry<R> {
    type Record = R;

    fn set(&mut self, id: &str, record: R) -> Result<Option<R>, RegistryError> {
        validate_id(id)?;
        Ok(self.data.insert(id.to_owned(), record))
    }

    fn get(&self, id: &str) -> Option<&R> {
        self.data.get(id)
    }

    fn remove(&mut self, id: &str) -> Result<R, RegistryError> {
        self.data.remove(id).ok_or(RegistryError::KeyNotFound)
    }

    fn entries(&self) -> Vec<(&str, &R)> {
        self.data.iter().map(|(id, r)| (id.as_str(), r)).collect()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashedRegistry<R> {
    data: HashMap<Id, R>,
}

impl<R> HashedRegistry<R> {
    pub fn new() -> Self {
        Self { data: HashMap::new() }
    }
}

impl<R> Default for HashedRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Registry for HashedRegistry<R> {
    type Record = R;

    fn set(&mut self, id: &str, record: R) -> Result<Option<R>, RegistryError> {
        validate_id(id)?;
        Ok(self.data.insert(id.to_owned(), record))
    }

    fn get(&self, id: &str) -> Option<&R> {
        self.data.get(id)
    }

    fn remove(&mut self, id: &str) -> Result<R, RegistryError> {
        self.data.remove(id).ok_or(RegistryError::KeyNotFound)
    }

    fn entries(&self) -> Vec<(&str, &R)> {
        self.data.iter().map(|(id, r)| (id.as_str(), r)).collect()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[instrument(level = "debug")]
pub fn student_registry() -> Result<SortedRegistry<Student>, RegistryError> {
    let mut students = SortedRegistry::new();
    for student in [
        Student::new("IT23001", "Alice", "CSE"),
        Student::new("IT23005", "Bob", "ECE"),
        Student::new("IT23003", "Carol", "IT"),
    ] {
        let id = student.id.clone();
        students.set(&id, student)?;
    }

    debug!(count = students.len(), "seeded students");
    Ok(students)
}

#[instrument(level = "debug")]
pub fn employee_directory() -> Result<HashedRegistry<Employee>, RegistryError> {
    let mut employees = HashedRegistry::new();
    for (id, department) in [
        ("EMP001", "Software Development"),
        ("EMP002", "Quality Assurance"),
        ("EMP003", "Database Admin"),
        ("EMP004", "Network Security"),
    ] {
        employees.set(id, Employee::new(id, department))?;
    }

    debug!(count = employees.len(), "seeded employees");
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_registry_is_sorted() {
        let students = student_registry().unwrap();

        let ids: Vec<&str> = students.entries().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["IT23001", "IT23003", "IT23005"]);

        let rendered: Vec<String> = students.entries().into_iter().map(|(_, s)| s.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["IT23001: Alice (CSE)", "IT23003: Carol (IT)", "IT23005: Bob (ECE)"]
        );
    }

    #[test]
    fn test_employee_directory() {
        let employees = employee_directory().unwrap();

        assert_eq!(employees.len(), 4);
        assert_eq!(
            employees.get("EMP003").map(|e| e.to_string()),
            Some("EMP003 -> Database Admin".to_owned())
        );
        assert_eq!(employees.get("EMP999"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut registry = SortedRegistry::new();

        assert_eq!(registry.set("a", 1), Ok(None));
        assert_eq!(registry.set("a", 2), Ok(Some(1)));
        assert_eq!(registry.get("a"), Some(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut sorted: SortedRegistry<i32> = SortedRegistry::new();
        let mut hashed: HashedRegistry<i32> = HashedRegistry::new();

        assert_eq!(sorted.set("", 1), Err(RegistryError::InvalidKey));
        assert_eq!(hashed.set("   ", 1), Err(RegistryError::InvalidKey));
        assert!(sorted.is_empty());
        assert!(hashed.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut registry = HashedRegistry::new();
        registry.set("key1", "value1").unwrap();

        assert_eq!(registry.remove("key1"), Ok("value1"));
        assert_eq!(registry.remove("key1"), Err(RegistryError::KeyNotFound));
        assert_eq!(registry.remove("non_existent_key"), Err(RegistryError::KeyNotFound));
    }
}
