use crate::entities::{event_entity as events, speed_run_entity as runs};
use crate::error::{integrity, AppError, AppResult};
use crate::models::{CreateSpeedRunRequest, SpeedRunResponse, UpdateSpeedRunRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct SpeedRunService {
    pool: DatabaseConnection,
}

impl SpeedRunService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Event schedule in canonical order (sort key, then start time).
    pub async fn list_runs_for_event(&self, event_id: i64) -> AppResult<Vec<SpeedRunResponse>> {
        let list = runs::Entity::find()
            .filter(runs::Column::EventId.eq(event_id))
            .order_by_asc(runs::Column::SortKey)
            .order_by_asc(runs::Column::StartTime)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_run(&self, id: i64) -> AppResult<SpeedRunResponse> {
        let model = self.find_run(id).await?;
        Ok(model.into())
    }

    pub async fn create_run(&self, req: CreateSpeedRunRequest) -> AppResult<SpeedRunResponse> {
        events::Entity::find_by_id(req.event_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", req.event_id)))?;

        let model = runs::ActiveModel {
            event_id: Set(req.event_id),
            name: Set(req.name),
            runners: Set(req.runners.unwrap_or_default()),
            sort_key: Set(req.sort_key),
            description: Set(req.description.unwrap_or_default()),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Run name within event"))?;

        Ok(model.into())
    }

    pub async fn update_run(&self, id: i64, req: UpdateSpeedRunRequest) -> AppResult<SpeedRunResponse> {
        let model = self.find_run(id).await?;

        let mut am = model.into_active_model();
        if let Some(name) = req.name {
            am.name = Set(name);
        }
        if let Some(runners) = req.runners {
            am.runners = Set(runners);
        }
        if let Some(sort_key) = req.sort_key {
            am.sort_key = Set(sort_key);
        }
        if let Some(description) = req.description {
            am.description = Set(description);
        }
        if let Some(start_time) = req.start_time {
            am.start_time = Set(start_time);
        }
        if let Some(end_time) = req.end_time {
            am.end_time = Set(end_time);
        }
        let updated = am
            .update(&self.pool)
            .await
            .map_err(|e| integrity(e, "Run name within event"))?;
        Ok(updated.into())
    }

    pub async fn delete_run(&self, id: i64) -> AppResult<()> {
        let model = self.find_run(id).await?;
        runs::Entity::delete_by_id(model.id).exec(&self.pool).await?;
        Ok(())
    }

    async fn find_run(&self, id: i64) -> AppResult<runs::Model> {
        runs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Run {id} not found")))
    }
}
