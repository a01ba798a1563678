//! Billable counterparty owned by a tenant.

use uuid::Uuid;

use super::{normalize_optional, require_non_empty, TenantId};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Client {
    id: Uuid,
    tenant_id: TenantId,
    abn: String,
    name: String,
    phone: String,
    email: Option<String>,
    comment: Option<String>,
}

impl Client {
    pub fn create(
        tenant_id: TenantId,
        abn: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: Option<String>,
        comment: Option<String>,
    ) -> Result<Self> {
        let abn = abn.into();
        let name = name.into();
        let phone = phone.into();
        require_non_empty(&abn, "ABN cannot be empty")?;
        require_non_empty(&name, "Name cannot be empty")?;
        require_non_empty(&phone, "Phone Number cannot be empty")?;
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            abn,
            name,
            phone,
            email: normalize_optional(email),
            comment: normalize_optional(comment),
        })
    }

    pub(crate) fn hydrate(
        id: Uuid,
        tenant_id: TenantId,
        abn: String,
        name: String,
        phone: String,
        email: Option<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            abn,
            name,
            phone,
            email,
            comment,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn abn(&self) -> &str {
        &self.abn
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// ABN and tenant are immutable after creation; only contact details move.
    pub fn update_contact_info(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        let phone = phone.into();
        require_non_empty(&name, "Name cannot be empty")?;
        require_non_empty(&phone, "Phone Number cannot be empty")?;
        self.name = name;
        self.phone = phone;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> TenantId {
        TenantId::new("tenant-1").unwrap()
    }

    #[test]
    fn create_keeps_required_fields_verbatim() {
        let client = Client::create(tenant(), "123456789", "Acme", "0400111222", None, None).unwrap();
        assert_eq!(client.abn(), "123456789");
        assert_eq!(client.name(), "Acme");
        assert_eq!(client.phone(), "0400111222");
    }

    #[test]
    fn create_rejects_any_empty_required_field() {
        for (abn, name, phone) in [("", "Acme", "0400"), ("123", "", "0400"), ("123", "Acme", " ")] {
            assert!(Client::create(tenant(), abn, name, phone, None, None).is_err());
        }
    }

    #[test]
    fn optional_fields_normalize_blank_to_absent() {
        let client = Client::create(
            tenant(),
            "123",
            "Acme",
            "0400",
            Some("  ".to_string()),
            Some(" wholesale account ".to_string()),
        )
        .unwrap();
        assert_eq!(client.email(), None);
        assert_eq!(client.comment(), Some("wholesale account"));
    }

    #[test]
    fn update_contact_info_replaces_name_and_phone() {
        let mut client = Client::create(tenant(), "123", "Acme", "0400", None, None).unwrap();
        client.update_contact_info("Acme Pty Ltd", "0400999888").unwrap();
        assert_eq!(client.name(), "Acme Pty Ltd");
        assert_eq!(client.phone(), "0400999888");
        assert_eq!(client.abn(), "123");
    }

    #[test]
    fn update_contact_info_rejects_empty_fields() {
        let mut client = Client::create(tenant(), "123", "Acme", "0400", None, None).unwrap();
        assert!(client.update_contact_info("", "0400").is_err());
        assert!(client.update_contact_info("Acme", "").is_err());
    }
}
