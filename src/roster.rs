//! Ordered employee roster.
//!
//! The roster decides the grid's row order and supplies each row's
//! contract. The grid only reads it; edits happen here and are pushed to
//! the grid with [`ScheduleGrid::sync_roster`](crate::grid::ScheduleGrid::sync_roster).

use serde::{Deserialize, Serialize};

use crate::models::{ContractType, Employee};

/// Name given to employees added from the roster editor.
pub const DEFAULT_EMPLOYEE_NAME: &str = "Nouvel Employé";
/// E-mail placeholder for new employees.
pub const DEFAULT_EMPLOYEE_EMAIL: &str = "nouveau@mail.com";

/// Employees in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Employees in order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Employee at a row.
    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    /// Names in order.
    pub fn names(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.name.as_str()).collect()
    }

    /// Exact name lookup.
    pub fn find(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Trimmed, case-insensitive name lookup, as used when loading saved plannings.
    pub fn find_loose(&self, name: &str) -> Option<(usize, &Employee)> {
        let wanted = name.trim().to_lowercase();
        self.employees
            .iter()
            .enumerate()
            .find(|(_, e)| e.name.trim().to_lowercase() == wanted)
    }

    /// Contract of the employee with this name, if both exist.
    pub fn contract_of(&self, name: &str) -> Option<ContractType> {
        self.find(name.trim()).and_then(|e| e.contract)
    }

    /// Appends an employee.
    pub fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Appends a placeholder employee, returning its index.
    pub fn add_default(&mut self) -> usize {
        self.employees
            .push(Employee::new(DEFAULT_EMPLOYEE_NAME).with_email(DEFAULT_EMPLOYEE_EMAIL));
        self.employees.len() - 1
    }

    /// Removes the employee at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Employee> {
        (index < self.employees.len()).then(|| self.employees.remove(index))
    }

    /// Renames the employee at `index`. Returns `false` if out of range.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        self.update(index, |e| e.name = name.into())
    }

    /// Changes the e-mail of the employee at `index`.
    pub fn set_email(&mut self, index: usize, email: impl Into<String>) -> bool {
        self.update(index, |e| e.email = email.into())
    }

    /// Changes the contract of the employee at `index`.
    pub fn set_contract(&mut self, index: usize, contract: Option<ContractType>) -> bool {
        self.update(index, |e| e.contract = contract)
    }

    /// Moves an employee to another position, shifting the others.
    pub fn move_employee(&mut self, from: usize, to: usize) -> bool {
        if from >= self.employees.len() || to >= self.employees.len() {
            return false;
        }
        let employee = self.employees.remove(from);
        self.employees.insert(to, employee);
        true
    }

    /// E-mail addresses of the selected employees (all when `selected` is
    /// `None`), skipping blank addresses.
    pub fn mail_recipients(&self, selected: Option<&[&str]>) -> Vec<String> {
        self.employees
            .iter()
            .filter(|e| selected.map_or(true, |names| names.contains(&e.name.as_str())))
            .map(|e| e.email.trim())
            .filter(|email| !email.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn update(&mut self, index: usize, f: impl FnOnce(&mut Employee)) -> bool {
        match self.employees.get_mut(index) {
            Some(employee) => {
                f(employee);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<Employee>> for Roster {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::from(vec![
            Employee::new("Alice")
                .with_email("alice@example.com")
                .with_contract(ContractType::Hours35),
            Employee::new("Bob").with_contract(ContractType::Student),
            Employee::new("Chloé").with_email(" chloe@example.com "),
        ])
    }

    #[test]
    fn test_lookups() {
        let r = sample();
        assert_eq!(r.len(), 3);
        assert_eq!(r.names(), vec!["Alice", "Bob", "Chloé"]);
        assert_eq!(r.contract_of("Alice"), Some(ContractType::Hours35));
        assert_eq!(r.contract_of(" Alice "), Some(ContractType::Hours35));
        assert_eq!(r.contract_of("Chloé"), None);
        assert_eq!(r.contract_of("Nobody"), None);
        assert!(r.find("alice").is_none());
        assert_eq!(r.find_loose(" ALICE ").map(|(i, _)| i), Some(0));
        assert_eq!(r.find_loose("chloé").map(|(i, _)| i), Some(2));
    }

    #[test]
    fn test_edits() {
        let mut r = sample();
        let idx = r.add_default();
        assert_eq!(idx, 3);
        assert_eq!(r.get(3).unwrap().name, DEFAULT_EMPLOYEE_NAME);

        assert!(r.rename(3, "Dan"));
        assert!(r.set_contract(3, Some(ContractType::Hours39)));
        assert!(r.set_email(3, "dan@example.com"));
        assert_eq!(r.contract_of("Dan"), Some(ContractType::Hours39));
        assert!(!r.rename(10, "Nobody"));

        assert_eq!(r.remove(1).map(|e| e.name), Some("Bob".to_string()));
        assert!(r.remove(10).is_none());
        assert_eq!(r.names(), vec!["Alice", "Chloé", "Dan"]);
    }

    #[test]
    fn test_move_employee() {
        let mut r = sample();
        assert!(r.move_employee(0, 2));
        assert_eq!(r.names(), vec!["Bob", "Chloé", "Alice"]);
        assert!(!r.move_employee(0, 5));
    }

    #[test]
    fn test_mail_recipients() {
        let r = sample();
        assert_eq!(
            r.mail_recipients(None),
            vec!["alice@example.com".to_string(), "chloe@example.com".to_string()]
        );
        assert_eq!(
            r.mail_recipients(Some(&["Bob", "Chloé"])),
            vec!["chloe@example.com".to_string()]
        );
    }

    #[test]
    fn test_json_is_a_plain_list() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.starts_with('['));
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
