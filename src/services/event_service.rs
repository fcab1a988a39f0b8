use crate::domain::validators;
use crate::entities::event_entity as events;
use crate::error::{integrity, AppError, AppResult};
use crate::models::{CreateEventRequest, EventResponse, UpdateEventRequest};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

#[derive(Clone)]
pub struct EventService {
    pool: DatabaseConnection,
}

impl EventService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_events(&self) -> AppResult<Vec<EventResponse>> {
        let list = events::Entity::find()
            .order_by_asc(events::Column::Date)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_event(&self, id: i64) -> AppResult<EventResponse> {
        let model = self.find_event(id).await?;
        Ok(model.into())
    }

    pub async fn create_event(&self, req: CreateEventRequest) -> AppResult<EventResponse> {
        let model = events::ActiveModel {
            short: Set(req.short),
            name: Set(req.name),
            receiver_name: Set(req.receiver_name.unwrap_or_default()),
            use_paypal_sandbox: Set(req.use_paypal_sandbox.unwrap_or(false)),
            paypal_email: Set(req.paypal_email),
            schedule_id: Set(req.schedule_id),
            schedule_datetime_field: Set(req.schedule_datetime_field.unwrap_or_default()),
            schedule_game_field: Set(req.schedule_game_field.unwrap_or_default()),
            schedule_runners_field: Set(req.schedule_runners_field.unwrap_or_default()),
            schedule_estimate_field: Set(req.schedule_estimate_field.unwrap_or_default()),
            schedule_setup_field: Set(req.schedule_setup_field.unwrap_or_default()),
            schedule_commentators_field: Set(req.schedule_commentators_field.unwrap_or_default()),
            schedule_comments_field: Set(req.schedule_comments_field.unwrap_or_default()),
            date: Set(req.date),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Event short code or schedule id"))?;

        Ok(model.into())
    }

    pub async fn update_event(&self, id: i64, req: UpdateEventRequest) -> AppResult<EventResponse> {
        validators::positive_id(id)?;
        let model = self.find_event(id).await?;

        let mut am = model.into_active_model();
        if let Some(name) = req.name {
            am.name = Set(name);
        }
        if let Some(receiver_name) = req.receiver_name {
            am.receiver_name = Set(receiver_name);
        }
        if let Some(sandbox) = req.use_paypal_sandbox {
            am.use_paypal_sandbox = Set(sandbox);
        }
        if let Some(email) = req.paypal_email {
            am.paypal_email = Set(email);
        }
        if let Some(date) = req.date {
            am.date = Set(date);
        }
        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }

    pub async fn delete_event(&self, id: i64) -> AppResult<()> {
        let model = self.find_event(id).await?;
        events::Entity::delete_by_id(model.id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_event(&self, id: i64) -> AppResult<events::Model> {
        events::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))
    }
}
