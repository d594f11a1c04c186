// ── Inventory controller ──
//
// Facade owning the API client and one ResourceList per resource.
// Reads refresh a store through the fetch state machine; writes call
// the accessor, then merge the server's returned representation into
// the local list -- no refetch after a successful write, no mutation
// after a failed one.

use tracing::debug;

use stillage_api::ApiClient;

use crate::convert;
use crate::error::CoreError;
use crate::model::{
    Container, ContainerInput, ContainerStatus, ContainerType, ContainerTypeInput, HistoryRecord,
    Product, ProductInput, ProductType, Role, Unit, User, UserInput,
};
use crate::select::{
    self, TypeConstraints, validate_container, validate_container_type, validate_product,
    validate_user,
};
use crate::store::ResourceList;

/// The main entry point for presentation layers.
///
/// Owns one transient list per resource; every screen's list state is
/// private to its controller instance. Nothing here persists across
/// instances -- a new controller always starts with empty stores and
/// refetches on first use.
pub struct Inventory {
    client: ApiClient,
    containers: ResourceList<Container>,
    container_types: ResourceList<ContainerType>,
    products: ResourceList<Product>,
    product_types: ResourceList<ProductType>,
    units: ResourceList<Unit>,
    users: ResourceList<User>,
    roles: ResourceList<Role>,
    history: ResourceList<HistoryRecord>,
}

impl Inventory {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            containers: ResourceList::new(),
            container_types: ResourceList::new(),
            products: ResourceList::new(),
            product_types: ResourceList::new(),
            units: ResourceList::new(),
            users: ResourceList::new(),
            roles: ResourceList::new(),
            history: ResourceList::new(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // ── Store accessors ──────────────────────────────────────────────

    pub fn containers(&self) -> &ResourceList<Container> {
        &self.containers
    }

    pub fn container_types(&self) -> &ResourceList<ContainerType> {
        &self.container_types
    }

    pub fn products(&self) -> &ResourceList<Product> {
        &self.products
    }

    pub fn product_types(&self) -> &ResourceList<ProductType> {
        &self.product_types
    }

    pub fn units(&self) -> &ResourceList<Unit> {
        &self.units
    }

    pub fn users(&self) -> &ResourceList<User> {
        &self.users
    }

    pub fn roles(&self) -> &ResourceList<Role> {
        &self.roles
    }

    pub fn history(&self) -> &ResourceList<HistoryRecord> {
        &self.history
    }

    // ── Auth ─────────────────────────────────────────────────────────

    /// Exchange an identity token for a service token. The session
    /// store is updated; the raw token is returned for persistence.
    pub async fn login(&self, id_token: &str) -> Result<String, CoreError> {
        let resp = self.client.login(id_token).await?;
        self.client
            .session()
            .set(secret_from(resp.token.clone()));
        debug!("login successful");
        Ok(resp.token)
    }

    /// First-user registration; same token exchange as login.
    pub async fn register(&self, id_token: &str) -> Result<String, CoreError> {
        let resp = self.client.register(id_token).await?;
        self.client
            .session()
            .set(secret_from(resp.token.clone()));
        debug!("registration successful");
        Ok(resp.token)
    }

    /// Drop the in-process session. Persisted-token cleanup is the
    /// caller's concern.
    pub fn logout(&self) {
        self.client.session().clear();
    }

    pub async fn current_user(&self) -> Result<User, CoreError> {
        Ok(self.client.current_user().await?.into())
    }

    // ── Containers ───────────────────────────────────────────────────

    pub async fn refresh_containers(&mut self) -> Result<(), CoreError> {
        let ticket = self.containers.begin_load();
        match self.client.list_containers().await {
            Ok(dtos) => {
                self.containers
                    .resolve(ticket, dtos.into_iter().map(Container::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.containers.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    /// Constraints for a type id, resolved from the local reference
    /// stores. `None` until the reference data has been loaded.
    pub fn constraints_for_type(&self, type_id: i64) -> Option<TypeConstraints> {
        let container_type = self.container_types.get(type_id)?;
        Some(TypeConstraints::for_type(
            container_type,
            self.units.items(),
        ))
    }

    /// Validate and create a container. The unit id is denormalized
    /// from the selected type when the form did not carry one.
    pub async fn create_container(
        &mut self,
        mut input: ContainerInput,
    ) -> Result<Container, CoreError> {
        let constraints = self.constraints_for_type(input.type_id);
        validate_container(&input, constraints.as_ref())?;
        if input.unit_id.is_none() {
            input.unit_id = constraints.as_ref().and_then(|c| c.unit_id);
        }

        let dto = self
            .client
            .create_container(&convert::container_create(&input))
            .await?;
        let created = Container::from(dto);
        self.containers.apply_created(created.clone());
        Ok(created)
    }

    pub async fn update_container(
        &mut self,
        id: i64,
        mut input: ContainerInput,
    ) -> Result<Container, CoreError> {
        let constraints = self.constraints_for_type(input.type_id);
        validate_container(&input, constraints.as_ref())?;
        if input.unit_id.is_none() {
            input.unit_id = constraints.as_ref().and_then(|c| c.unit_id);
        }

        let dto = self
            .client
            .update_container(&convert::container_update(id, &input))
            .await?;
        let updated = Container::from(dto);
        self.containers.apply_updated(updated.clone());
        Ok(updated)
    }

    /// Delete by id. No confirmation here -- prompting is the
    /// presentation layer's responsibility.
    pub async fn delete_container(&mut self, id: i64) -> Result<(), CoreError> {
        self.client.delete_container(id).await?;
        self.containers.apply_removed(id);
        Ok(())
    }

    // Ad-hoc lookups that bypass the store.

    pub async fn container_by_id(&self, id: i64) -> Result<Container, CoreError> {
        Ok(self.client.get_container(id).await?.into())
    }

    pub async fn container_by_code(&self, code: &str) -> Result<Container, CoreError> {
        Ok(self.client.get_container_by_code(code).await?.into())
    }

    pub async fn container_by_name(&self, name: &str) -> Result<Container, CoreError> {
        Ok(self.client.get_container_by_name(name).await?.into())
    }

    pub async fn containers_by_status(
        &self,
        status: ContainerStatus,
    ) -> Result<Vec<Container>, CoreError> {
        let dtos = self
            .client
            .list_containers_by_status(&status.to_string())
            .await?;
        Ok(dtos.into_iter().map(Container::from).collect())
    }

    pub async fn containers_by_type(&self, type_id: i64) -> Result<Vec<Container>, CoreError> {
        let dtos = self.client.list_containers_by_type(type_id).await?;
        Ok(dtos.into_iter().map(Container::from).collect())
    }

    pub async fn containers_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<Container>, CoreError> {
        let dtos = self.client.list_containers_by_product(product_id).await?;
        Ok(dtos.into_iter().map(Container::from).collect())
    }

    /// Constraint drift report for one container (type edited after
    /// the container was filled).
    pub fn container_violations(&self, container: &Container) -> Vec<String> {
        match self.constraints_for_type(container.type_id) {
            Some(constraints) => select::container_violations(
                container,
                &constraints,
                self.products.items(),
            ),
            None => Vec::new(),
        }
    }

    // ── Container types ──────────────────────────────────────────────

    pub async fn refresh_container_types(&mut self) -> Result<(), CoreError> {
        let ticket = self.container_types.begin_load();
        match self.client.list_container_types().await {
            Ok(dtos) => {
                self.container_types
                    .resolve(ticket, dtos.into_iter().map(ContainerType::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.container_types.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create_container_type(
        &mut self,
        input: ContainerTypeInput,
    ) -> Result<ContainerType, CoreError> {
        validate_container_type(&input)?;
        let Some(unit_id) = input.unit_id else {
            return Err(CoreError::validation("Select unit."));
        };

        let dto = self
            .client
            .create_container_type(&convert::container_type_create(&input, unit_id))
            .await?;
        let created = ContainerType::from(dto);
        self.container_types.apply_created(created.clone());
        Ok(created)
    }

    pub async fn update_container_type(
        &mut self,
        id: i64,
        input: ContainerTypeInput,
    ) -> Result<ContainerType, CoreError> {
        validate_container_type(&input)?;
        let Some(unit_id) = input.unit_id else {
            return Err(CoreError::validation("Select unit."));
        };

        let dto = self
            .client
            .update_container_type(&convert::container_type_update(id, &input, unit_id))
            .await?;
        let updated = ContainerType::from(dto);
        self.container_types.apply_updated(updated.clone());
        Ok(updated)
    }

    pub async fn delete_container_type(&mut self, id: i64) -> Result<(), CoreError> {
        self.client.delete_container_type(id).await?;
        self.container_types.apply_removed(id);
        Ok(())
    }

    // ── Products ─────────────────────────────────────────────────────

    pub async fn refresh_products(&mut self) -> Result<(), CoreError> {
        let ticket = self.products.begin_load();
        match self.client.list_products().await {
            Ok(dtos) => {
                self.products
                    .resolve(ticket, dtos.into_iter().map(Product::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.products.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create_product(&mut self, input: ProductInput) -> Result<Product, CoreError> {
        validate_product(&input)?;
        let dto = self
            .client
            .create_product(&convert::product_create(&input))
            .await?;
        let created = Product::from(dto);
        self.products.apply_created(created.clone());
        Ok(created)
    }

    pub async fn update_product(
        &mut self,
        id: i64,
        input: ProductInput,
    ) -> Result<Product, CoreError> {
        validate_product(&input)?;
        let dto = self
            .client
            .update_product(&convert::product_update(id, &input))
            .await?;
        let updated = Product::from(dto);
        self.products.apply_updated(updated.clone());
        Ok(updated)
    }

    pub async fn delete_product(&mut self, id: i64) -> Result<(), CoreError> {
        self.client.delete_product(id).await?;
        self.products.apply_removed(id);
        Ok(())
    }

    pub async fn expired_products(&self) -> Result<Vec<Product>, CoreError> {
        let dtos = self.client.list_expired_products().await?;
        Ok(dtos.into_iter().map(Product::from).collect())
    }

    // ── Product types ────────────────────────────────────────────────

    pub async fn refresh_product_types(&mut self) -> Result<(), CoreError> {
        let ticket = self.product_types.begin_load();
        match self.client.list_product_types().await {
            Ok(dtos) => {
                self.product_types
                    .resolve(ticket, dtos.into_iter().map(ProductType::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.product_types.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create_product_type(&mut self, title: &str) -> Result<ProductType, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::validation("Enter type title."));
        }
        let dto = self
            .client
            .create_product_type(&stillage_api::types::ProductTypeCreate {
                title: title.to_owned(),
            })
            .await?;
        let created = ProductType::from(dto);
        self.product_types.apply_created(created.clone());
        Ok(created)
    }

    pub async fn update_product_type(
        &mut self,
        id: i64,
        title: &str,
    ) -> Result<ProductType, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::validation("Enter type title."));
        }
        let dto = self
            .client
            .update_product_type(&stillage_api::types::ProductTypeUpdate {
                id,
                title: title.to_owned(),
            })
            .await?;
        let updated = ProductType::from(dto);
        self.product_types.apply_updated(updated.clone());
        Ok(updated)
    }

    pub async fn delete_product_type(&mut self, id: i64) -> Result<(), CoreError> {
        self.client.delete_product_type(id).await?;
        self.product_types.apply_removed(id);
        Ok(())
    }

    // ── Units ────────────────────────────────────────────────────────

    pub async fn refresh_units(&mut self) -> Result<(), CoreError> {
        let ticket = self.units.begin_load();
        match self.client.list_units().await {
            Ok(dtos) => {
                self.units
                    .resolve(ticket, dtos.into_iter().map(Unit::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.units.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create_unit(
        &mut self,
        title: &str,
        kind: crate::model::UnitKind,
    ) -> Result<Unit, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::validation("Enter unit title."));
        }
        let dto = self
            .client
            .create_unit(&stillage_api::types::UnitCreate {
                title: title.to_owned(),
                unit_type: kind.code(),
            })
            .await?;
        let created = Unit::from(dto);
        self.units.apply_created(created.clone());
        Ok(created)
    }

    pub async fn update_unit(
        &mut self,
        id: i64,
        title: &str,
        kind: crate::model::UnitKind,
    ) -> Result<Unit, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::validation("Enter unit title."));
        }
        let dto = self
            .client
            .update_unit(&stillage_api::types::UnitUpdate {
                id,
                title: title.to_owned(),
                unit_type: kind.code(),
            })
            .await?;
        let updated = Unit::from(dto);
        self.units.apply_updated(updated.clone());
        Ok(updated)
    }

    pub async fn delete_unit(&mut self, id: i64) -> Result<(), CoreError> {
        self.client.delete_unit(id).await?;
        self.units.apply_removed(id);
        Ok(())
    }

    // ── Users & roles ────────────────────────────────────────────────

    pub async fn refresh_users(&mut self) -> Result<(), CoreError> {
        let ticket = self.users.begin_load();
        match self.client.list_users().await {
            Ok(dtos) => {
                self.users
                    .resolve(ticket, dtos.into_iter().map(User::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.users.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn refresh_roles(&mut self) -> Result<(), CoreError> {
        let ticket = self.roles.begin_load();
        match self.client.list_roles().await {
            Ok(dtos) => {
                self.roles
                    .resolve(ticket, dtos.into_iter().map(Role::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.roles.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create_user(&mut self, input: UserInput) -> Result<User, CoreError> {
        validate_user(&input)?;
        let dto = self.client.create_user(&convert::user_create(&input)).await?;
        let created = User::from(dto);
        self.users.apply_created(created.clone());
        Ok(created)
    }

    pub async fn update_user(&mut self, id: i64, input: UserInput) -> Result<User, CoreError> {
        validate_user(&input)?;
        let dto = self
            .client
            .update_user(&convert::user_update(id, &input))
            .await?;
        let updated = User::from(dto);
        self.users.apply_updated(updated.clone());
        Ok(updated)
    }

    pub async fn confirm_user(&mut self, id: i64) -> Result<User, CoreError> {
        let dto = self.client.confirm_user(id).await?;
        let confirmed = User::from(dto);
        self.users.apply_updated(confirmed.clone());
        Ok(confirmed)
    }

    pub async fn set_user_role(&mut self, id: i64, role_id: i64) -> Result<(), CoreError> {
        self.client.set_user_role(id, role_id).await?;
        // Role-only endpoint returns no body; patch the local record.
        if let Some(user) = self.users.get(id) {
            let mut user = user.clone();
            user.role_id = Some(role_id);
            self.users.apply_updated(user);
        }
        Ok(())
    }

    pub async fn delete_user(&mut self, id: i64) -> Result<(), CoreError> {
        self.client.delete_user(id).await?;
        self.users.apply_removed(id);
        Ok(())
    }

    pub async fn user_by_email(&self, email: &str) -> Result<User, CoreError> {
        Ok(self.client.get_user_by_email(email).await?.into())
    }

    // ── Container history (read-only) ────────────────────────────────

    pub async fn refresh_history(&mut self) -> Result<(), CoreError> {
        let ticket = self.history.begin_load();
        match self.client.list_history().await {
            Ok(dtos) => {
                self.history
                    .resolve(ticket, dtos.into_iter().map(HistoryRecord::from).collect());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.history.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    pub async fn history_for_container(
        &self,
        container_id: i64,
    ) -> Result<Vec<HistoryRecord>, CoreError> {
        let dtos = self.client.list_history_by_container(container_id).await?;
        Ok(dtos.into_iter().map(HistoryRecord::from).collect())
    }

    pub async fn history_for_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<HistoryRecord>, CoreError> {
        let dtos = self.client.list_history_by_product(product_id).await?;
        Ok(dtos.into_iter().map(HistoryRecord::from).collect())
    }

    pub async fn history_for_user(&self, user_id: i64) -> Result<Vec<HistoryRecord>, CoreError> {
        let dtos = self.client.list_history_by_user(user_id).await?;
        Ok(dtos.into_iter().map(HistoryRecord::from).collect())
    }

    pub async fn history_by_action(
        &self,
        action_type: &str,
    ) -> Result<Vec<HistoryRecord>, CoreError> {
        let dtos = self.client.list_history_by_action_type(action_type).await?;
        Ok(dtos.into_iter().map(HistoryRecord::from).collect())
    }

    pub async fn recent_history(&self, count: u32) -> Result<Vec<HistoryRecord>, CoreError> {
        let dtos = self.client.list_recent_history(count).await?;
        Ok(dtos.into_iter().map(HistoryRecord::from).collect())
    }

    // ── Reference data ───────────────────────────────────────────────

    /// Load the container form's reference data (types, products,
    /// units) concurrently. Each store records its own phase; the
    /// first failure is returned after all three settle.
    pub async fn refresh_reference_data(&mut self) -> Result<(), CoreError> {
        let t_types = self.container_types.begin_load();
        let t_products = self.products.begin_load();
        let t_units = self.units.begin_load();

        let (types_res, products_res, units_res) = tokio::join!(
            self.client.list_container_types(),
            self.client.list_products(),
            self.client.list_units(),
        );

        let mut first_error = None;

        match types_res {
            Ok(dtos) => {
                self.container_types
                    .resolve(t_types, dtos.into_iter().map(ContainerType::from).collect());
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.container_types.fail(t_types, err.to_string());
                first_error.get_or_insert(err);
            }
        }
        match products_res {
            Ok(dtos) => {
                self.products
                    .resolve(t_products, dtos.into_iter().map(Product::from).collect());
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.products.fail(t_products, err.to_string());
                first_error.get_or_insert(err);
            }
        }
        match units_res {
            Ok(dtos) => {
                self.units
                    .resolve(t_units, dtos.into_iter().map(Unit::from).collect());
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.units.fail(t_units, err.to_string());
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn secret_from(token: String) -> secrecy::SecretString {
    secrecy::SecretString::from(token)
}
