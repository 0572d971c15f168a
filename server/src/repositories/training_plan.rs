//! TrainingPlanRepository - Repository per i piani di allenamento

use super::{Create, Delete, Read, like_pattern};
use crate::dtos::ListFilter;
use crate::entities::{Status, TrainingPlan};
use chrono::NaiveDate;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info, instrument};

const PLAN_COLUMNS: &str = "plan_id, name, objective, duration_weeks, start_date, end_date, status, client_id, trainer_id";

/// Dati per l'inserimento di un piano (trainer_id preso dal token)
#[derive(Debug, Clone)]
pub struct NewTrainingPlan {
    pub name: String,
    pub objective: Option<String>,
    pub duration_weeks: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<i32>,
    pub trainer_id: i32,
}

pub struct TrainingPlanRepository {
    connection_pool: SqlitePool,
}

impl TrainingPlanRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Lista amministrativa: `search` su nome e obiettivo, `status` esatto
    #[instrument(skip(self), fields(search = ?filter.search, status = ?filter.status))]
    pub async fn find_many(&self, filter: &ListFilter) -> Result<Vec<TrainingPlan>, Error> {
        let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM training_plans WHERE 1 = 1",
            PLAN_COLUMNS
        ));

        if let Some(ref search) = filter.search {
            let pattern = like_pattern(search);
            query_builder.push(" AND (name LIKE ");
            query_builder.push_bind(pattern.clone());
            query_builder.push(" ESCAPE '\\' OR objective LIKE ");
            query_builder.push_bind(pattern);
            query_builder.push(" ESCAPE '\\')");
        }
        if let Some(status) = filter.status {
            query_builder.push(" AND status = ");
            query_builder.push_bind(status);
        }
        query_builder.push(" ORDER BY name COLLATE NOCASE, plan_id");

        let plans = query_builder
            .build_query_as::<TrainingPlan>()
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} plans", plans.len());
        Ok(plans)
    }

    /// Piani creati da un trainer
    #[instrument(skip(self), fields(trainer_id = %trainer_id))]
    pub async fn find_by_trainer(&self, trainer_id: &i32) -> Result<Vec<TrainingPlan>, Error> {
        sqlx::query_as::<_, TrainingPlan>(&format!(
            "SELECT {} FROM training_plans WHERE trainer_id = ? ORDER BY plan_id DESC",
            PLAN_COLUMNS
        ))
        .bind(trainer_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Piani assegnati a un client, dal più recente
    #[instrument(skip(self), fields(client_id = %client_id))]
    pub async fn find_by_client(&self, client_id: &i32) -> Result<Vec<TrainingPlan>, Error> {
        sqlx::query_as::<_, TrainingPlan>(&format!(
            "SELECT {} FROM training_plans WHERE client_id = ? ORDER BY start_date DESC, plan_id DESC",
            PLAN_COLUMNS
        ))
        .bind(client_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Il piano corrente di un client: il piano attivo iniziato più di recente
    /// (a parità, id più alto). `None` se il client non ha piani attivi.
    #[instrument(skip(self), fields(client_id = %client_id))]
    pub async fn find_current_for_client(
        &self,
        client_id: &i32,
    ) -> Result<Option<TrainingPlan>, Error> {
        let plan = sqlx::query_as::<_, TrainingPlan>(&format!(
            r#"
            SELECT {} FROM training_plans
            WHERE client_id = ? AND status = ?
            ORDER BY start_date IS NULL, start_date DESC, plan_id DESC
            LIMIT 1
            "#,
            PLAN_COLUMNS
        ))
        .bind(client_id)
        .bind(Status::Active)
        .fetch_optional(&self.connection_pool)
        .await?;

        if plan.is_none() {
            debug!("Client has no active plan");
        }
        Ok(plan)
    }

    /// Assegna il piano a un client
    #[instrument(skip(self), fields(plan_id = %plan_id, client_id = %client_id))]
    pub async fn assign_to_client(&self, plan_id: &i32, client_id: &i32) -> Result<(), Error> {
        let result = sqlx::query("UPDATE training_plans SET client_id = ? WHERE plan_id = ?")
            .bind(client_id)
            .bind(plan_id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        info!("Plan assigned to client");
        Ok(())
    }

    #[instrument(skip(self), fields(plan_id = %id, status = %status))]
    pub async fn set_status(&self, id: &i32, status: Status) -> Result<(), Error> {
        let result = sqlx::query("UPDATE training_plans SET status = ? WHERE plan_id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        info!("Plan status updated");
        Ok(())
    }
}

impl Create<TrainingPlan, NewTrainingPlan> for TrainingPlanRepository {
    #[instrument(skip(self, data), fields(name = %data.name, trainer_id = %data.trainer_id))]
    async fn create(&self, data: &NewTrainingPlan) -> Result<TrainingPlan, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO training_plans
                (name, objective, duration_weeks, start_date, end_date, status, client_id, trainer_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.objective)
        .bind(data.duration_weeks)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(Status::Active)
        .bind(data.client_id)
        .bind(data.trainer_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("Plan created with id {}", new_id);

        Ok(TrainingPlan {
            plan_id: new_id,
            name: data.name.clone(),
            objective: data.objective.clone(),
            duration_weeks: data.duration_weeks,
            start_date: data.start_date,
            end_date: data.end_date,
            status: Status::Active,
            client_id: data.client_id,
            trainer_id: data.trainer_id,
        })
    }
}

impl Read<TrainingPlan, i32> for TrainingPlanRepository {
    #[instrument(skip(self), fields(plan_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<TrainingPlan>, Error> {
        sqlx::query_as::<_, TrainingPlan>(&format!(
            "SELECT {} FROM training_plans WHERE plan_id = ?",
            PLAN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Delete<i32> for TrainingPlanRepository {
    /// ON DELETE CASCADE elimina anche i training_exercises del piano
    #[instrument(skip(self), fields(plan_id = %id))]
    async fn delete(&self, id: &i32) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM training_plans WHERE plan_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "training")))]
    async fn test_find_current_for_client_picks_latest_active(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = TrainingPlanRepository::new(pool);

        // ana (4) ha un piano attivo recente (1) e uno vecchio inattivo (2)
        let plan = repo.find_current_for_client(&4).await?.expect("ana has a plan");
        assert_eq!(plan.plan_id, 1);
        assert_eq!(plan.status, Status::Active);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "training")))]
    async fn test_find_current_for_client_without_plan(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = TrainingPlanRepository::new(pool);

        // bruno (5) non ha piani assegnati
        assert!(repo.find_current_for_client(&5).await?.is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "training")))]
    async fn test_find_many_filters(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = TrainingPlanRepository::new(pool);

        let all = repo.find_many(&ListFilter::default()).await?;
        assert_eq!(all.len(), 4);

        let inactive = repo
            .find_many(&ListFilter {
                search: None,
                status: Some(Status::Inactive),
            })
            .await?;
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].plan_id, 2);

        // "fuerza" compare nel nome e nell'obiettivo del solo piano 1
        let by_search = repo
            .find_many(&ListFilter {
                search: Some("FUERZA".to_string()),
                status: None,
            })
            .await?;
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].plan_id, 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "training")))]
    async fn test_delete_cascades_to_training_exercises(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = TrainingPlanRepository::new(pool.clone());

        assert!(repo.delete(&1).await?);

        let (remaining,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM training_exercises WHERE plan_id = ?")
                .bind(1)
                .fetch_one(&pool)
                .await?;
        assert_eq!(remaining, 0, "I training_exercises dovrebbero essere eliminati (CASCADE)");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "training")))]
    async fn test_assign_to_client(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = TrainingPlanRepository::new(pool);

        // il piano 3 di coach_maria non è assegnato
        repo.assign_to_client(&3, &5).await?;
        let plan = repo.read(&3).await?.expect("plan 3 exists");
        assert_eq!(plan.client_id, Some(5));

        let result = repo.assign_to_client(&999, &5).await;
        assert!(matches!(result, Err(Error::RowNotFound)));
        Ok(())
    }
}
