//! Customer directory.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use autopos_core::{CustomerId, Email, EmailError, OrderId};

use crate::db::{self, KeyValueStore, StorageError, keys};
use crate::models::Customer;

/// Errors from registering a customer.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("customer name is required")]
    MissingName,

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("a customer with email {0} already exists")]
    DuplicateEmail(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Details for a new customer.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Customers backed by the `customers` document.
pub struct CustomerDirectory {
    storage: Arc<dyn KeyValueStore>,
    customers: Vec<Customer>,
}

impl fmt::Debug for CustomerDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerDirectory")
            .field("customers", &self.customers.len())
            .finish_non_exhaustive()
    }
}

impl CustomerDirectory {
    /// Load the directory. Missing or malformed data yields no customers.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let customers = db::read_json(storage.as_ref(), keys::CUSTOMERS).unwrap_or_default();
        Self { storage, customers }
    }

    #[must_use]
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    #[must_use]
    pub fn find(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == *id)
    }

    /// Customers whose name, email or phone match `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.matches(query)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Append `order_id` to the customer's purchase history and save.
    ///
    /// Returns `false` without saving if the customer is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory could not be saved.
    pub fn record_purchase(&mut self, id: &CustomerId, order_id: OrderId) -> Result<bool, StorageError> {
        let Some(customer) = self.customers.iter_mut().find(|c| c.id == *id) else {
            warn!(customer_id = %id, order_id = %order_id, "Purchase for unknown customer not recorded");
            return Ok(false);
        };
        customer.purchase_history.push(order_id);
        self.persist()?;
        Ok(true)
    }

    /// Add a customer with the next free `CU-<n>` id.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, a malformed email or an
    /// email already on file, or a storage error if the directory could not
    /// be saved.
    pub fn register(&mut self, new: NewCustomer) -> Result<Customer, CustomerError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(CustomerError::MissingName);
        }
        let email = Email::parse(&new.email)?;
        if self
            .customers
            .iter()
            .any(|c| c.email.as_str().eq_ignore_ascii_case(email.as_str()))
        {
            return Err(CustomerError::DuplicateEmail(email.to_string()));
        }

        let customer = Customer {
            id: self.next_id(),
            name: name.to_string(),
            email,
            phone: new.phone.trim().to_string(),
            address: new.address.trim().to_string(),
            purchase_history: Vec::new(),
        };
        self.customers.push(customer.clone());
        self.persist()?;

        info!(customer_id = %customer.id, "Customer registered");
        Ok(customer)
    }

    /// Replace the whole directory and save it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory could not be saved.
    pub fn replace_all(&mut self, customers: Vec<Customer>) -> Result<(), StorageError> {
        self.customers = customers;
        self.persist()
    }

    fn next_id(&self) -> CustomerId {
        let highest = self
            .customers
            .iter()
            .filter_map(|c| c.id.as_str().strip_prefix("CU-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        CustomerId::new(format!("CU-{}", highest + 1))
    }

    fn persist(&self) -> Result<(), StorageError> {
        db::write_json(self.storage.as_ref(), keys::CUSTOMERS, &self.customers)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::fixtures;

    fn directory() -> (Arc<MemoryStore>, CustomerDirectory) {
        let storage = Arc::new(MemoryStore::new());
        let mut directory = CustomerDirectory::hydrate(storage.clone());
        directory
            .replace_all(vec![
                fixtures::customer("CU-1", "Jane Doe"),
                fixtures::customer("CU-2", "John Smith"),
            ])
            .unwrap();
        (storage, directory)
    }

    #[test]
    fn test_record_purchase_appends_in_order() {
        let (storage, mut directory) = directory();
        let id = CustomerId::new("CU-1");
        assert!(directory.record_purchase(&id, OrderId::new("INV-1")).unwrap());
        assert!(directory.record_purchase(&id, OrderId::new("INV-2")).unwrap());

        let reloaded = CustomerDirectory::hydrate(storage);
        let history: Vec<&str> = reloaded
            .find(&id)
            .unwrap()
            .purchase_history
            .iter()
            .map(OrderId::as_str)
            .collect();
        assert_eq!(history, ["INV-1", "INV-2"]);
    }

    #[test]
    fn test_record_purchase_unknown_customer() {
        let (_, mut directory) = directory();
        let recorded = directory
            .record_purchase(&CustomerId::new("CU-404"), OrderId::new("INV-1"))
            .unwrap();
        assert!(!recorded);
    }

    #[test]
    fn test_search() {
        let (_, directory) = directory();
        assert_eq!(directory.search("smith").len(), 1);
        assert_eq!(directory.search("").len(), 2);
    }

    #[test]
    fn test_register_assigns_next_id() {
        let (_, mut directory) = directory();
        let customer = directory
            .register(NewCustomer {
                name: "  Ann Lee ".to_string(),
                email: "ann@example.com".to_string(),
                ..NewCustomer::default()
            })
            .unwrap();
        assert_eq!(customer.id.as_str(), "CU-3");
        assert_eq!(customer.name, "Ann Lee");
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let (_, mut directory) = directory();
        let blank = directory.register(NewCustomer {
            email: "x@example.com".to_string(),
            ..NewCustomer::default()
        });
        assert!(matches!(blank, Err(CustomerError::MissingName)));

        let malformed = directory.register(NewCustomer {
            name: "X".to_string(),
            email: "not-an-email".to_string(),
            ..NewCustomer::default()
        });
        assert!(matches!(malformed, Err(CustomerError::InvalidEmail(_))));

        let duplicate = directory.register(NewCustomer {
            name: "X".to_string(),
            email: "CU-1@example.com".to_string(),
            ..NewCustomer::default()
        });
        assert!(matches!(duplicate, Err(CustomerError::DuplicateEmail(_))));
        assert_eq!(directory.len(), 2);
    }
}
