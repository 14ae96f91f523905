use serde::{Deserialize, Serialize};

use agrostock_core::{DomainError, DomainResult, Entity, SupplierId, ValueObject, validate};

/// Contact information for a supplier.
///
/// Both fields are free text; an empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactInfo {
    pub fn new(phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl ValueObject for ContactInfo {}

/// Entity: Supplier (identity + contact record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SupplierRecord", try_from = "SupplierRecord")]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: ContactInfo,
}

impl Supplier {
    /// Create a supplier with no contact details.
    pub fn new(id: impl Into<SupplierId>, name: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();
        if id.is_blank() {
            return Err(DomainError::validation("supplier id cannot be empty"));
        }
        validate::non_blank("supplier name", &name)?;
        Ok(Self {
            id,
            name,
            contact: ContactInfo::default(),
        })
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    pub fn id(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn phone(&self) -> &str {
        &self.contact.phone
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    /// Replace the name. Blank names are rejected and leave the supplier untouched.
    pub fn rename(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        validate::non_blank("supplier name", &new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.contact.phone = phone.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.contact.email = email.into();
    }

    pub fn to_record(&self) -> SupplierRecord {
        SupplierRecord::from(self.clone())
    }

    pub fn from_record(record: SupplierRecord) -> DomainResult<Self> {
        Self::try_from(record)
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

/// Stored shape of a supplier: `{id, name, phone, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl From<Supplier> for SupplierRecord {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            phone: value.contact.phone,
            email: value.contact.email,
        }
    }
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = DomainError;

    fn try_from(record: SupplierRecord) -> Result<Self, Self::Error> {
        Ok(Supplier::new(record.id, record.name)?
            .with_contact(ContactInfo::new(record.phone, record.email)))
    }
}
