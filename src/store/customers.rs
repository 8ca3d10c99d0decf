use crate::core::Storage;
use crate::domain::model::Customer;
use crate::store::JsonStore;
use crate::utils::error::{BatchError, Result};

const KIND: &str = "Customer";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerChanges {
    pub fn from_assignments(assignments: &[(String, String)]) -> Self {
        let mut changes = Self::default();
        for (key, value) in assignments {
            match key.as_str() {
                "name" => changes.name = Some(value.clone()),
                "email" => changes.email = Some(value.clone()),
                "phone" => changes.phone = Some(value.clone()),
                other => tracing::warn!("Field '{}' is not modifiable", other),
            }
        }
        changes
    }

    fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(phone) = self.phone {
            customer.phone = phone;
        }
    }
}

pub fn render_customer(customer: &Customer) -> String {
    format!(
        "Customer : {}\nName     : {}\nEmail    : {}\nPhone    : {}",
        customer.customer_id, customer.name, customer.email, customer.phone
    )
}

fn not_found(customer_id: &str) -> BatchError {
    BatchError::NotFound {
        kind: KIND,
        id: customer_id.to_string(),
    }
}

impl<S: Storage> JsonStore<S> {
    pub async fn create_customer(&self, customer: Customer) -> Result<()> {
        let mut data = self.load().await?;
        if data.customers.contains_key(&customer.customer_id) {
            return Err(BatchError::DuplicateId {
                kind: KIND,
                id: customer.customer_id,
            });
        }

        tracing::info!("Registering customer {}", customer.customer_id);
        data.customers.insert(customer.customer_id.clone(), customer);
        self.save(&data).await
    }

    pub async fn delete_customer(&self, customer_id: &str) -> Result<()> {
        let mut data = self.load().await?;
        if data.customers.remove(customer_id).is_none() {
            return Err(not_found(customer_id));
        }

        tracing::info!("Deleted customer {}", customer_id);
        self.save(&data).await
    }

    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let data = self.load().await?;
        data.customers
            .get(customer_id)
            .cloned()
            .ok_or_else(|| not_found(customer_id))
    }

    pub async fn display_customer(&self, customer_id: &str) -> Result<String> {
        Ok(render_customer(&self.get_customer(customer_id).await?))
    }

    pub async fn modify_customer(
        &self,
        customer_id: &str,
        changes: CustomerChanges,
    ) -> Result<Customer> {
        let mut data = self.load().await?;
        let customer = data
            .customers
            .get_mut(customer_id)
            .ok_or_else(|| not_found(customer_id))?;
        changes.apply(customer);
        let updated = customer.clone();

        self.save(&data).await?;
        Ok(updated)
    }
}
