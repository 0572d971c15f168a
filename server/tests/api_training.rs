//! Integration tests per il piano di allenamento corrente
//!
//! Test per:
//! - GET /training/{user_id}
//! - PATCH /training/exercises/{training_exercise_id}/status

mod common;

#[cfg(test)]
mod training_tests {
    use super::common::*;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    // ============================================================
    // Test per GET /training/{user_id} - get_training_plan
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_client_reads_own_plan(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/training/4")
            .add_header("Authorization", bearer(ANA))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        // il piano attivo, non quello inattivo precedente
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Fuerza Base");
        assert_eq!(body["objective"], "Ganar fuerza");

        let exercises = body["exercises"].as_array().unwrap();
        let names: Vec<&str> = exercises
            .iter()
            .map(|e| e["exercise_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Sentadilla", "Press banca", "Peso muerto"]);
        assert_eq!(exercises[0]["day_of_week"], "lunes");
        assert_eq!(exercises[2]["status"], "deshabilitado");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_client_without_plan_gets_null(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/training/5")
            .add_header("Authorization", bearer(BRUNO))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.is_null());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_trainer_and_admin_can_read_client_plan(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .get("/training/4")
            .add_header("Authorization", bearer(MARIA))
            .await
            .assert_status_ok();
        server
            .get("/training/4")
            .add_header("Authorization", bearer(ADMIN))
            .await
            .assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_cannot_read_someone_elses_plan(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // un altro client
        server
            .get("/training/6")
            .add_header("Authorization", bearer(ANA))
            .await
            .assert_status_forbidden();

        // un trainer che non segue il client
        server
            .get("/training/4")
            .add_header("Authorization", bearer(LUIS))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_training_unknown_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .get("/training/99")
            .add_header("Authorization", bearer(ADMIN))
            .await
            .assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per PATCH /training/exercises/{id}/status
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_client_marks_exercise_completed(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .patch("/training/exercises/1/status")
            .add_header("Authorization", bearer(ANA))
            .json(&json!({ "status": "deshabilitado" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 1);
        assert_eq!(body["status"], "deshabilitado");
        assert_eq!(body["exercise_name"], "Sentadilla");

        // il re-fetch del piano riflette il cambiamento
        let plan: Value = server
            .get("/training/4")
            .add_header("Authorization", bearer(ANA))
            .await
            .json();
        assert_eq!(plan["exercises"][0]["status"], "deshabilitado");

        // e si può tornare indietro
        let back: Value = server
            .patch("/training/exercises/1/status")
            .add_header("Authorization", bearer(ANA))
            .json(&json!({ "status": "activo" }))
            .await
            .json();
        assert_eq!(back["status"], "activo");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_plan_trainer_can_mark_exercise(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .patch("/training/exercises/2/status")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "status": "deshabilitado" }))
            .await
            .assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_other_client_cannot_mark_exercise(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .patch("/training/exercises/1/status")
            .add_header("Authorization", bearer(CARLA))
            .json(&json!({ "status": "deshabilitado" }))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_inactive_status_not_allowed_for_exercises(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .patch("/training/exercises/1/status")
            .add_header("Authorization", bearer(ANA))
            .json(&json!({ "status": "inactivo" }))
            .await
            .assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_mark_unknown_exercise(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .patch("/training/exercises/99/status")
            .add_header("Authorization", bearer(ANA))
            .json(&json!({ "status": "activo" }))
            .await
            .assert_status_not_found();
        Ok(())
    }
}
