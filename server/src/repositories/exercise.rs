//! ExerciseRepository - Repository per il catalogo esercizi

use super::{Create, Read};
use crate::entities::{Difficulty, Exercise};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

/// Dati per l'inserimento: il DTO esterno più l'autore preso dal token
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: String,
    pub difficulty: Difficulty,
    pub created_by: Option<i32>,
}

pub struct ExerciseRepository {
    connection_pool: SqlitePool,
}

impl ExerciseRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Catalogo completo ordinato per gruppo muscolare e nome
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Exercise>, Error> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT exercise_id, name, muscle_group, difficulty, created_by
            FROM exercises
            ORDER BY muscle_group, name, exercise_id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} exercises", exercises.len());
        Ok(exercises)
    }
}

impl Create<Exercise, NewExercise> for ExerciseRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &NewExercise) -> Result<Exercise, Error> {
        let result = sqlx::query(
            "INSERT INTO exercises (name, muscle_group, difficulty, created_by) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.muscle_group)
        .bind(data.difficulty)
        .bind(data.created_by)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;
        info!("Exercise created with id {}", new_id);

        Ok(Exercise {
            exercise_id: new_id,
            name: data.name.clone(),
            muscle_group: data.muscle_group.clone(),
            difficulty: data.difficulty,
            created_by: data.created_by,
        })
    }
}

impl Read<Exercise, i32> for ExerciseRepository {
    #[instrument(skip(self), fields(exercise_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Exercise>, Error> {
        let exercise = sqlx::query_as::<_, Exercise>(
            "SELECT exercise_id, name, muscle_group, difficulty, created_by FROM exercises WHERE exercise_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(exercise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "training")))]
    async fn test_create_and_list(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ExerciseRepository::new(pool);
        let before = repo.find_all().await?.len();

        let created = repo
            .create(&NewExercise {
                name: "Face Pull".to_string(),
                muscle_group: "hombros".to_string(),
                difficulty: Difficulty::Beginner,
                created_by: Some(2),
            })
            .await?;

        let all = repo.find_all().await?;
        assert_eq!(all.len(), before + 1);
        assert!(all.iter().any(|e| e.exercise_id == created.exercise_id));
        assert_eq!(
            repo.read(&created.exercise_id).await?.map(|e| e.difficulty),
            Some(Difficulty::Beginner)
        );
        Ok(())
    }
}
