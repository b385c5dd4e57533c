use serde::{Deserialize, Serialize};

/// A fixed payee record. Suppliers are reference data: never created or
/// edited at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    /// Destination identifier. Opaque; its format is not validated.
    pub address: String,
    pub location: String,
}

impl Supplier {
    fn new(id: u32, name: &str, address: &str, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            address: address.to_string(),
            location: location.to_string(),
        }
    }

    /// Text of the supplier's entry in the selection list.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.name, self.location)
    }
}

/// The immutable set of suppliers a payment can be addressed to.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
}

impl SupplierDirectory {
    pub fn new() -> Self {
        Self {
            suppliers: vec![
                Supplier::new(
                    1,
                    "Rajesh Textiles Ltd",
                    "rSupp1RajeshText123456789Delhi",
                    "Mumbai, India",
                ),
                Supplier::new(
                    2,
                    "Krishna Fabrics International",
                    "rSupp2KrishnaFab123456789Chen",
                    "Chennai, India",
                ),
                Supplier::new(
                    3,
                    "Patel Cotton Exports",
                    "rSupp3PatelCott123456789Ahme",
                    "Ahmedabad, India",
                ),
            ],
        }
    }

    pub fn all(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn find_by_address(&self, address: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.address == address)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }
}

impl Default for SupplierDirectory {
    fn default() -> Self {
        Self::new()
    }
}
