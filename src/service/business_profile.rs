use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use super::check;
use crate::domain::{BusinessProfile, PaymentDetails, ProfileDetails, TenantId};
use crate::error::Result;
use crate::repository::BusinessProfileRepository;

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertProfile {
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    pub phone: String,
    pub postal_location: String,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    pub abn: String,
    pub payment_method: String,
    pub bank_bsb: Option<String>,
    pub bank_account_number: Option<String>,
    pub pay_id: Option<String>,
}

#[derive(Clone)]
pub struct BusinessProfileService {
    repository: Arc<dyn BusinessProfileRepository>,
}

impl BusinessProfileService {
    pub fn new(repository: Arc<dyn BusinessProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, tenant: &TenantId) -> Result<Option<BusinessProfile>> {
        self.repository.get_by_tenant(tenant).await
    }

    /// Creates the tenant's profile when absent, otherwise replaces every
    /// field in place. There is no partial update.
    pub async fn upsert(&self, tenant: &TenantId, mut input: UpsertProfile) -> Result<BusinessProfile> {
        input.website = input.website.filter(|w| !w.trim().is_empty());
        check(&input)?;

        let payment = PaymentDetails::from_parts(
            &input.payment_method,
            input.bank_bsb.as_deref(),
            input.bank_account_number.as_deref(),
            input.pay_id.as_deref(),
        )?;
        let details = ProfileDetails {
            name: input.name,
            email: input.email,
            phone: input.phone,
            postal_location: input.postal_location,
            website: input.website,
            abn: input.abn,
            payment,
        };

        match self.repository.get_by_tenant(tenant).await? {
            None => {
                let profile = BusinessProfile::create(tenant.clone(), details)?;
                self.repository.add(&profile).await?;
                tracing::info!(tenant = %tenant, "business profile created");
                Ok(profile)
            }
            Some(mut profile) => {
                profile.update(details)?;
                self.repository.update(&profile).await?;
                tracing::info!(tenant = %tenant, "business profile replaced");
                Ok(profile)
            }
        }
    }
}
