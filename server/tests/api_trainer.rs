//! Integration tests per le rotte del trainer
//!
//! Test per:
//! - GET /trainer/clients, GET /trainer/clients/{client_id}
//! - POST /trainer/clients/{client_id}/assign-plan
//! - GET/POST /trainer/plans
//! - GET/POST /trainer/plans/{plan_id}/exercises
//! - GET/POST /trainer/exercises

mod common;

#[cfg(test)]
mod trainer_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    fn ids(body: &Value) -> Vec<i64> {
        body.as_array()
            .expect("expected a JSON array")
            .iter()
            .map(|item| item["id"].as_i64().unwrap())
            .collect()
    }

    // ============================================================
    // Roster dei client
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_trainer_lists_own_clients(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/trainer/clients")
            .add_header("Authorization", bearer(MARIA))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), vec![4, 5]);
        assert_eq!(body[0]["full_name"], "Ana Torres");
        assert_eq!(body[0]["email"], "ana@roshifit.test");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_admin_lists_every_client(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/trainer/clients")
            .add_header("Authorization", bearer(ADMIN))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        // anche diego, che non ha un trainer
        assert_eq!(ids(&body), vec![4, 5, 6, 7]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_clients_cannot_use_trainer_routes(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .get("/trainer/clients")
            .add_header("Authorization", bearer(ANA))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_client_detail_lists_plans(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/trainer/clients/4")
            .add_header("Authorization", bearer(MARIA))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["client"]["full_name"], "Ana Torres");
        assert_eq!(ids(&body["plans"]), vec![1, 2]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_client_detail_of_other_trainer(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .get("/trainer/clients/6")
            .add_header("Authorization", bearer(MARIA))
            .await
            .assert_status_forbidden();

        // un trainer non è un client
        server
            .get("/trainer/clients/3")
            .add_header("Authorization", bearer(MARIA))
            .await
            .assert_status_not_found();

        // l'admin vede tutti i client
        server
            .get("/trainer/clients/6")
            .add_header("Authorization", bearer(ADMIN))
            .await
            .assert_status_ok();
        Ok(())
    }

    // ============================================================
    // Assegnazione dei piani
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_assign_plan_to_client(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/trainer/clients/5/assign-plan")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "plan_id": 3 }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["client_id"], 5);

        // Bruno ora vede il piano
        let training: Value = server
            .get("/training/5")
            .add_header("Authorization", bearer(BRUNO))
            .await
            .json();
        assert_eq!(training["id"], 3);
        assert_eq!(training["exercises"].as_array().unwrap().len(), 0);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_assign_foreign_plan_or_client(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // piano creato da un altro trainer
        server
            .post("/trainer/clients/4/assign-plan")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "plan_id": 4 }))
            .await
            .assert_status_forbidden();

        // client di un altro trainer
        server
            .post("/trainer/clients/6/assign-plan")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "plan_id": 3 }))
            .await
            .assert_status_forbidden();

        // client senza trainer
        server
            .post("/trainer/clients/7/assign-plan")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "plan_id": 3 }))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    // ============================================================
    // Piani del trainer
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_list_my_plans(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body: Value = server
            .get("/trainer/plans")
            .add_header("Authorization", bearer(MARIA))
            .await
            .json();

        assert_eq!(ids(&body), vec![3, 2, 1]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_create_plan(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/trainer/plans")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({
                "name": "Potencia",
                "objective": "Saltar mas",
                "duration_weeks": 6,
                "start_date": "2026-11-02",
                "end_date": "2026-12-14",
                "client_id": 5
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["trainer_id"], 2);
        assert_eq!(body["client_id"], 5);
        assert_eq!(body["status"], "activo");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_create_plan_validation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .post("/trainer/plans")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "name": "Corto", "duration_weeks": 0 }))
            .await
            .assert_status_bad_request();

        server
            .post("/trainer/plans")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({
                "name": "Al reves",
                "start_date": "2026-12-01",
                "end_date": "2026-11-01"
            }))
            .await
            .assert_status_bad_request();

        server
            .post("/trainer/plans")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "name": "Ajeno", "client_id": 6 }))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    // ============================================================
    // Esercizi dei piani
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_list_plan_exercises(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let body: Value = server
            .get("/trainer/plans/1/exercises")
            .add_header("Authorization", bearer(MARIA))
            .await
            .json();
        assert_eq!(ids(&body), vec![1, 2, 3]);

        server
            .get("/trainer/plans/1/exercises")
            .add_header("Authorization", bearer(LUIS))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_add_plan_exercise_appends(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/trainer/plans/1/exercises")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({
                "exercise_id": 4,
                "day_of_week": "sabado",
                "sets": 3,
                "reps": 1,
                "rest_seconds": 60,
                "notes": "45 segundos"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["position"], 3);
        assert_eq!(body["exercise_name"], "Plancha");
        assert_eq!(body["status"], "activo");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_add_plan_exercise_rejections(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .post("/trainer/plans/1/exercises")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "exercise_id": 1, "sets": -2 }))
            .await
            .assert_status_bad_request();

        server
            .post("/trainer/plans/1/exercises")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "exercise_id": 99 }))
            .await
            .assert_status_not_found();

        server
            .post("/trainer/plans/99/exercises")
            .add_header("Authorization", bearer(MARIA))
            .json(&json!({ "exercise_id": 1 }))
            .await
            .assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Catalogo esercizi
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "training")))]
    async fn test_exercise_catalogue(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = server
            .post("/trainer/exercises")
            .add_header("Authorization", bearer(LUIS))
            .json(&json!({
                "name": "Dominadas",
                "muscle_group": "espalda",
                "difficulty": "avanzado"
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created: Value = created.json();

        let body: Value = server
            .get("/trainer/exercises")
            .add_header("Authorization", bearer(MARIA))
            .await
            .json();
        // core, espalda (Dominadas, Peso muerto), pecho, piernas
        assert_eq!(
            ids(&body),
            vec![4, created["id"].as_i64().unwrap(), 3, 2, 1]
        );

        server
            .post("/trainer/exercises")
            .add_header("Authorization", bearer(LUIS))
            .json(&json!({ "name": "", "muscle_group": "core", "difficulty": "principiante" }))
            .await
            .assert_status_bad_request();
        Ok(())
    }
}
