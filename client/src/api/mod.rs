//! API client per il backend RoshiFit
//!
//! Ogni metodo corrisponde a una rotta REST. Il token ottenuto dal login viene
//! conservato nella sessione e inviato come `Authorization: Bearer <jwt>`.

use crate::config::ClientConfig;
use crate::models::{
    Client, ClientDetail, Credentials, Exercise, LoginResponse, NewExercise, NewSupplier,
    NewTrainingExercise, NewTrainingPlan, NewUser, Registration, Status, Supplier,
    SupplierDetail, SupplierUpdate, TrainingExercise, TrainingPlan, TrainingPlanDetail, User,
};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

mod error;

pub use error::ApiError;

/// Sessione autenticata: token e utente restituiti dal login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// API client per comunicare con il server RoshiFit
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: RwLock<Option<Session>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            session: RwLock::new(None),
        })
    }

    // ---------- sessione ----------

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        debug!("Logging in as {}", username);
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .send(self.request(Method::POST, "/auth/login").await.json(&credentials))
            .await?;

        let user = response.user.clone();
        *self.session.write().await = Some(Session {
            token: response.token,
            user: response.user,
        });

        info!("Logged in as {} ({:?})", user.username, user.role);
        Ok(user)
    }

    /// Ripristina una sessione salvata in precedenza (token già emesso dal server)
    pub async fn restore_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    pub async fn logout(&self) {
        *self.session.write().await = None;
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.user.clone())
    }

    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.send(self.request(Method::POST, "/auth/register").await.json(registration))
            .await
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.send(self.request(Method::POST, "/admin/users").await.json(new_user))
            .await
    }

    // ---------- fornitori ----------

    /// `status == None` equivale a "tutti"
    pub async fn list_suppliers(
        &self,
        search: &str,
        status: Option<Status>,
    ) -> Result<Vec<Supplier>, ApiError> {
        let estado = status.map(|s| s.as_str()).unwrap_or("");
        self.send(
            self.request(Method::GET, "/suppliers")
                .await
                .query(&[("search", search), ("estado", estado)]),
        )
        .await
    }

    pub async fn get_supplier(&self, id: i32) -> Result<SupplierDetail, ApiError> {
        self.send(self.request(Method::GET, &format!("/suppliers/{}", id)).await)
            .await
    }

    pub async fn create_supplier(&self, supplier: &NewSupplier) -> Result<SupplierDetail, ApiError> {
        self.send(self.request(Method::POST, "/suppliers").await.json(supplier))
            .await
    }

    pub async fn update_supplier(
        &self,
        id: i32,
        update: &SupplierUpdate,
    ) -> Result<SupplierDetail, ApiError> {
        self.send(
            self.request(Method::PATCH, &format!("/suppliers/{}", id))
                .await
                .json(update),
        )
        .await
    }

    pub async fn toggle_supplier_status(&self, id: i32) -> Result<Supplier, ApiError> {
        self.send(
            self.request(Method::POST, &format!("/suppliers/{}/toggle-status", id))
                .await,
        )
        .await
    }

    pub async fn delete_supplier(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/suppliers/{}", id)).await)
            .await
    }

    // ---------- amministrazione piani ----------

    pub async fn list_plans(
        &self,
        search: &str,
        status: Option<Status>,
    ) -> Result<Vec<TrainingPlan>, ApiError> {
        let estado = status.map(|s| s.as_str()).unwrap_or("");
        self.send(
            self.request(Method::GET, "/plans")
                .await
                .query(&[("search", search), ("estado", estado)]),
        )
        .await
    }

    pub async fn toggle_plan_status(&self, id: i32) -> Result<TrainingPlan, ApiError> {
        self.send(
            self.request(Method::POST, &format!("/plans/{}/toggle-status", id))
                .await,
        )
        .await
    }

    pub async fn delete_plan(&self, id: i32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/plans/{}", id)).await)
            .await
    }

    // ---------- piano corrente ----------

    /// `Ok(None)` quando l'utente non ha un piano attivo
    pub async fn get_training_plan(
        &self,
        user_id: i32,
    ) -> Result<Option<TrainingPlanDetail>, ApiError> {
        self.send(self.request(Method::GET, &format!("/training/{}", user_id)).await)
            .await
    }

    pub async fn update_training_exercise_status(
        &self,
        training_exercise_id: i32,
        status: Status,
    ) -> Result<TrainingExercise, ApiError> {
        self.send(
            self.request(
                Method::PATCH,
                &format!("/training/exercises/{}/status", training_exercise_id),
            )
            .await
            .json(&json!({ "status": status })),
        )
        .await
    }

    // ---------- trainer ----------

    pub async fn list_my_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.send(self.request(Method::GET, "/trainer/clients").await)
            .await
    }

    pub async fn get_client_detail(&self, client_id: i32) -> Result<ClientDetail, ApiError> {
        self.send(
            self.request(Method::GET, &format!("/trainer/clients/{}", client_id))
                .await,
        )
        .await
    }

    pub async fn assign_plan(&self, client_id: i32, plan_id: i32) -> Result<TrainingPlan, ApiError> {
        self.send(
            self.request(
                Method::POST,
                &format!("/trainer/clients/{}/assign-plan", client_id),
            )
            .await
            .json(&json!({ "plan_id": plan_id })),
        )
        .await
    }

    pub async fn list_my_plans(&self) -> Result<Vec<TrainingPlan>, ApiError> {
        self.send(self.request(Method::GET, "/trainer/plans").await)
            .await
    }

    pub async fn create_plan(&self, plan: &NewTrainingPlan) -> Result<TrainingPlan, ApiError> {
        self.send(self.request(Method::POST, "/trainer/plans").await.json(plan))
            .await
    }

    pub async fn list_plan_exercises(&self, plan_id: i32) -> Result<Vec<TrainingExercise>, ApiError> {
        self.send(
            self.request(Method::GET, &format!("/trainer/plans/{}/exercises", plan_id))
                .await,
        )
        .await
    }

    pub async fn add_plan_exercise(
        &self,
        plan_id: i32,
        exercise: &NewTrainingExercise,
    ) -> Result<TrainingExercise, ApiError> {
        self.send(
            self.request(Method::POST, &format!("/trainer/plans/{}/exercises", plan_id))
                .await
                .json(exercise),
        )
        .await
    }

    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        self.send(self.request(Method::GET, "/trainer/exercises").await)
            .await
    }

    pub async fn create_exercise(&self, exercise: &NewExercise) -> Result<Exercise, ApiError> {
        self.send(self.request(Method::POST, "/trainer/exercises").await.json(exercise))
            .await
    }

    // ---------- helpers ----------

    /// Prepara la richiesta aggiungendo il bearer token se c'è una sessione
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match self.session.read().await.as_ref() {
            Some(session) => builder.bearer_auth(&session.token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                warn!("Failed to decode response: {}", e);
                ApiError::Decode(e.to_string())
            })
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn error_from(status: StatusCode, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        warn!("Request rejected with {}: {}", status, err);
        err
    }
}
