use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::check;
use crate::domain::{Client, TenantId};
use crate::error::Result;
use crate::repository::ClientRepository;

#[derive(Debug, Deserialize, Validate)]
pub struct NewClient {
    pub abn: String,
    pub name: String,
    pub phone: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub phone: String,
}

#[derive(Clone)]
pub struct ClientService {
    repository: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, tenant: &TenantId, mut input: NewClient) -> Result<Client> {
        // A blank email means "none", not an address to validate.
        input.email = input.email.filter(|e| !e.trim().is_empty());
        check(&input)?;
        let client = Client::create(
            tenant.clone(),
            input.abn,
            input.name,
            input.phone,
            input.email,
            input.comment,
        )?;
        self.repository.add(&client).await?;
        tracing::info!(client_id = %client.id(), tenant = %tenant, "client registered");
        Ok(client)
    }

    pub async fn get(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Client>> {
        self.repository.get_by_id(tenant, id).await
    }

    pub async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>> {
        self.repository.list(tenant).await
    }

    /// Contact-info update. An unknown id is a silent no-op.
    pub async fn update(&self, tenant: &TenantId, id: Uuid, input: UpdateClient) -> Result<()> {
        if let Some(mut client) = self.repository.get_by_id(tenant, id).await? {
            client.update_contact_info(input.name, input.phone)?;
            self.repository.update(&client).await?;
        }
        Ok(())
    }
}
