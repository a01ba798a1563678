//! Per-tenant invoicing header and payment details.

use uuid::Uuid;

use super::{normalize_optional, require_non_empty, TenantId};
use crate::error::{Error, Result};

/// How the tenant gets paid. Exactly one variant is ever set, so selecting
/// bank transfer structurally clears any PayID and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    BankTransfer { bsb: String, account_number: String },
    PayId(String),
}

impl PaymentDetails {
    /// Builds payment details from the wire shape: a method discriminator
    /// plus whichever optional fields the caller supplied.
    pub fn from_parts(
        method: &str,
        bank_bsb: Option<&str>,
        bank_account_number: Option<&str>,
        pay_id: Option<&str>,
    ) -> Result<Self> {
        match method {
            "BankTransfer" => {
                let bsb = bank_bsb.map(str::trim).filter(|v| !v.is_empty()).ok_or_else(|| {
                    Error::Validation("BSB is required for bank transfer".to_string())
                })?;
                let account_number = bank_account_number
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| {
                        Error::Validation("Account number is required for bank transfer".to_string())
                    })?;
                Ok(Self::BankTransfer {
                    bsb: bsb.to_string(),
                    account_number: account_number.to_string(),
                })
            }
            "PayId" => {
                let pay_id = pay_id.map(str::trim).filter(|v| !v.is_empty()).ok_or_else(|| {
                    Error::Validation("PayId is required when payment method is PayId".to_string())
                })?;
                Ok(Self::PayId(pay_id.to_string()))
            }
            _ => Err(Error::Validation(
                "Payment method must be BankTransfer or PayId".to_string(),
            )),
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::BankTransfer { .. } => "BankTransfer",
            Self::PayId(_) => "PayId",
        }
    }

    pub fn bank_bsb(&self) -> Option<&str> {
        match self {
            Self::BankTransfer { bsb, .. } => Some(bsb),
            Self::PayId(_) => None,
        }
    }

    pub fn bank_account_number(&self) -> Option<&str> {
        match self {
            Self::BankTransfer { account_number, .. } => Some(account_number),
            Self::PayId(_) => None,
        }
    }

    pub fn pay_id(&self) -> Option<&str> {
        match self {
            Self::BankTransfer { .. } => None,
            Self::PayId(pay_id) => Some(pay_id),
        }
    }
}

/// The full replaceable field set of a profile. Create and update share it:
/// an upsert always supplies everything, never a partial patch.
#[derive(Debug, Clone)]
pub struct ProfileDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub postal_location: String,
    pub website: Option<String>,
    pub abn: String,
    pub payment: PaymentDetails,
}

impl ProfileDetails {
    fn normalized(mut self) -> Result<Self> {
        require_non_empty(&self.name, "Name cannot be empty")?;
        require_non_empty(&self.email, "Email cannot be empty")?;
        require_non_empty(&self.phone, "Phone cannot be empty")?;
        require_non_empty(&self.postal_location, "Postal location cannot be empty")?;
        require_non_empty(&self.abn, "ABN cannot be empty")?;
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.postal_location = self.postal_location.trim().to_string();
        self.website = normalize_optional(self.website);
        self.abn = self.abn.trim().to_string();
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct BusinessProfile {
    id: Uuid,
    tenant_id: TenantId,
    details: ProfileDetails,
}

impl BusinessProfile {
    pub fn create(tenant_id: TenantId, details: ProfileDetails) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            details: details.normalized()?,
        })
    }

    /// Full in-place replacement; same validation path as `create`.
    pub fn update(&mut self, details: ProfileDetails) -> Result<()> {
        self.details = details.normalized()?;
        Ok(())
    }

    pub(crate) fn hydrate(id: Uuid, tenant_id: TenantId, details: ProfileDetails) -> Self {
        Self {
            id,
            tenant_id,
            details,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn email(&self) -> &str {
        &self.details.email
    }

    pub fn phone(&self) -> &str {
        &self.details.phone
    }

    pub fn postal_location(&self) -> &str {
        &self.details.postal_location
    }

    pub fn website(&self) -> Option<&str> {
        self.details.website.as_deref()
    }

    pub fn abn(&self) -> &str {
        &self.details.abn
    }

    pub fn payment(&self) -> &PaymentDetails {
        &self.details.payment
    }
}
