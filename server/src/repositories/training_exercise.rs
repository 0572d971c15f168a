//! TrainingExerciseRepository - Repository per gli esercizi dentro i piani

use super::{Create, Read};
use crate::entities::{DayOfWeek, Status, TrainingExercise, TrainingExerciseWithExercise};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

const JOINED_SELECT: &str = r#"
    SELECT
        te.training_exercise_id,
        te.plan_id,
        te.exercise_id,
        e.name AS exercise_name,
        e.muscle_group,
        e.difficulty,
        te.day_of_week,
        te.sets,
        te.reps,
        te.rest_seconds,
        te.notes,
        te.status,
        te.position
    FROM training_exercises te
    INNER JOIN exercises e ON e.exercise_id = te.exercise_id
"#;

/// Dati per l'inserimento: la posizione viene assegnata in coda dall'INSERT
#[derive(Debug, Clone)]
pub struct NewTrainingExercise {
    pub plan_id: i32,
    pub exercise_id: i32,
    pub day_of_week: Option<DayOfWeek>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
}

pub struct TrainingExerciseRepository {
    connection_pool: SqlitePool,
}

impl TrainingExerciseRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Esercizi di un piano in ordine di posizione, uniti al catalogo
    #[instrument(skip(self), fields(plan_id = %plan_id))]
    pub async fn find_by_plan(
        &self,
        plan_id: &i32,
    ) -> Result<Vec<TrainingExerciseWithExercise>, Error> {
        let exercises = sqlx::query_as::<_, TrainingExerciseWithExercise>(&format!(
            "{} WHERE te.plan_id = ? ORDER BY te.position, te.training_exercise_id",
            JOINED_SELECT
        ))
        .bind(plan_id)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} exercises in plan", exercises.len());
        Ok(exercises)
    }

    /// Singola riga unita al catalogo
    #[instrument(skip(self), fields(training_exercise_id = %id))]
    pub async fn read_with_exercise(
        &self,
        id: &i32,
    ) -> Result<Option<TrainingExerciseWithExercise>, Error> {
        sqlx::query_as::<_, TrainingExerciseWithExercise>(&format!(
            "{} WHERE te.training_exercise_id = ?",
            JOINED_SELECT
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }

    #[instrument(skip(self), fields(training_exercise_id = %id, status = %status))]
    pub async fn set_status(&self, id: &i32, status: Status) -> Result<(), Error> {
        let result =
            sqlx::query("UPDATE training_exercises SET status = ? WHERE training_exercise_id = ?")
                .bind(status)
                .bind(id)
                .execute(&self.connection_pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        info!("Training exercise status updated");
        Ok(())
    }
}

impl Create<TrainingExercise, NewTrainingExercise> for TrainingExerciseRepository {
    #[instrument(skip(self, data), fields(plan_id = %data.plan_id, exercise_id = %data.exercise_id))]
    async fn create(&self, data: &NewTrainingExercise) -> Result<TrainingExercise, Error> {
        // posizione calcolata nella stessa istruzione: due append concorrenti non collidono
        let created = sqlx::query_as::<_, TrainingExercise>(
            r#"
            INSERT INTO training_exercises
                (plan_id, exercise_id, day_of_week, sets, reps, rest_seconds, notes, status, position)
            SELECT ?, ?, ?, ?, ?, ?, ?, ?, COALESCE(MAX(position) + 1, 0)
            FROM training_exercises
            WHERE plan_id = ?
            RETURNING training_exercise_id, plan_id, exercise_id, day_of_week, sets, reps,
                      rest_seconds, notes, status, position
            "#,
        )
        .bind(data.plan_id)
        .bind(data.exercise_id)
        .bind(data.day_of_week)
        .bind(data.sets)
        .bind(data.reps)
        .bind(data.rest_seconds)
        .bind(&data.notes)
        .bind(Status::Active)
        .bind(data.plan_id)
        .fetch_one(&self.connection_pool)
        .await?;

        info!(
            "Training exercise created with id {} at position {}",
            created.training_exercise_id, created.position
        );
        Ok(created)
    }
}

impl Read<TrainingExercise, i32> for TrainingExerciseRepository {
    #[instrument(skip(self), fields(training_exercise_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<TrainingExercise>, Error> {
        sqlx::query_as::<_, TrainingExercise>(
            r#"
            SELECT training_exercise_id, plan_id, exercise_id, day_of_week, sets, reps,
                   rest_seconds, notes, status, position
            FROM training_exercises
            WHERE training_exercise_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
