use crate::entities::donor_entity as donors;
use crate::error::{integrity, AppError, AppResult};
use crate::models::{
    CreateDonorRequest, DonorQuery, DonorResponse, PaginatedResponse, PaginationParams,
    UpdateDonorRequest,
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct DonorService {
    pool: DatabaseConnection,
}

impl DonorService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_donors(
        &self,
        query: &DonorQuery,
    ) -> AppResult<PaginatedResponse<DonorResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let total = donors::Entity::find().count(&self.pool).await? as i64;

        let list = donors::Entity::find()
            .order_by_asc(donors::Column::LastName)
            .order_by_asc(donors::Column::FirstName)
            .order_by_asc(donors::Column::Email)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<DonorResponse> = list.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get_donor(&self, id: i64) -> AppResult<DonorResponse> {
        let model = self.find_donor(id).await?;
        Ok(model.into())
    }

    pub async fn create_donor(&self, req: CreateDonorRequest) -> AppResult<DonorResponse> {
        let model = donors::ActiveModel {
            email: Set(req.email),
            alias: Set(req.alias),
            first_name: Set(req.first_name.unwrap_or_default()),
            last_name: Set(req.last_name.unwrap_or_default()),
            anonymous: Set(req.anonymous.unwrap_or(false)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Donor email or alias"))?;

        Ok(model.into())
    }

    pub async fn update_donor(&self, id: i64, req: UpdateDonorRequest) -> AppResult<DonorResponse> {
        let model = self.find_donor(id).await?;

        let mut am = model.into_active_model();
        if let Some(email) = req.email {
            am.email = Set(email);
        }
        if let Some(alias) = req.alias {
            am.alias = Set(Some(alias));
        }
        if let Some(first_name) = req.first_name {
            am.first_name = Set(first_name);
        }
        if let Some(last_name) = req.last_name {
            am.last_name = Set(last_name);
        }
        if let Some(anonymous) = req.anonymous {
            am.anonymous = Set(anonymous);
        }
        let updated = am
            .update(&self.pool)
            .await
            .map_err(|e| integrity(e, "Donor email or alias"))?;
        Ok(updated.into())
    }

    pub async fn delete_donor(&self, id: i64) -> AppResult<()> {
        let model = self.find_donor(id).await?;
        donors::Entity::delete_by_id(model.id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_donor(&self, id: i64) -> AppResult<donors::Model> {
        donors::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donor {id} not found")))
    }
}
