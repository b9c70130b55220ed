//! Employee API Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::Employee;
use crate::db::repository::EmployeeRepository;
use crate::utils::time::parse_joining_month;
use crate::utils::{AppError, AppResult};
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};

/// Photo payload extracted from the multipart request
pub(crate) struct PhotoUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(
        employees.into_iter().map(Employee::into_response).collect(),
    ))
}

/// Get employee by business identifier
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_employee_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee.into_response()))
}

/// Get all employees with a given job role (empty list when none match)
pub async fn get_by_role(
    State(state): State<ServerState>,
    Path(role): Path<String>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_by_role(&role).await?;
    Ok(Json(
        employees.into_iter().map(Employee::into_response).collect(),
    ))
}

/// Create a new employee from a multipart form (photo + text fields)
pub async fn create(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut photo: Option<PhotoUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            let filename = field.file_name().unwrap_or("photo").to_string();
            let bytes = field.bytes().await?.to_vec();
            if !bytes.is_empty() {
                photo = Some(PhotoUpload { filename, bytes });
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    let data = parse_create_form(&fields)?;
    let employee = create_employee(&state, data, photo).await?;

    Ok((StatusCode::CREATED, Json(employee.into_response())))
}

/// Update an employee; `totalPF` is recomputed and rewritten
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.get_db());
    let today = chrono::Utc::now().date_naive();
    let employee = repo.update(&id, payload, today).await?;
    Ok(Json(employee.into_response()))
}

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = EmployeeRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Employee deleted",
    }))
}

/// Create-employee flow: photo required, id unique, photo uploaded to
/// the media service before the record is inserted with `totalPF = 0`.
pub(crate) async fn create_employee(
    state: &ServerState,
    data: EmployeeCreate,
    photo: Option<PhotoUpload>,
) -> AppResult<Employee> {
    let photo = photo.ok_or_else(|| AppError::validation("No file uploaded"))?;

    let repo = EmployeeRepository::new(state.get_db());
    if repo.find_by_employee_id(&data.employee_id).await?.is_some() {
        return Err(AppError::conflict(format!(
            "Employee ID '{}' already exists",
            data.employee_id
        )));
    }

    let asset = state.media.upload(&photo.filename, photo.bytes).await?;

    match repo.create(data, &asset.url).await {
        Ok(employee) => Ok(employee),
        Err(err) => {
            // The insert failed after the upload succeeded; the remote
            // asset is now orphaned and only the log records it.
            tracing::warn!(
                url = %asset.url,
                error = %err,
                "Employee insert failed after photo upload, asset orphaned"
            );
            Err(err.into())
        }
    }
}

/// Typed parse of the multipart text fields (camelCase keys on the wire)
fn parse_create_form(fields: &HashMap<String, String>) -> AppResult<EmployeeCreate> {
    let field = |name: &str| -> AppResult<String> {
        fields
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::validation(format!("Missing field: {}", name)))
    };

    let age: u32 = field("age")?
        .parse()
        .map_err(|_| AppError::validation("Invalid age"))?;
    let salary: Decimal = field("salary")?
        .parse()
        .map_err(|_| AppError::validation("Invalid salary"))?;
    let joining_month = parse_joining_month(&field("joiningMonth")?)?;

    Ok(EmployeeCreate {
        employee_id: field("employeeId")?,
        name: field("name")?,
        age,
        job_role: field("jobRole")?,
        mobile_no: field("mobileNo")?,
        email: field("email")?,
        address: field("address")?,
        salary,
        joining_month,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use surrealdb::Surreal;
    use surrealdb::engine::local::Mem;
    use tower::ServiceExt;

    use crate::core::{Config, ServerState};
    use crate::core::server::build_app;
    use crate::services::media::{MediaError, MediaStore};
    use shared::models::MediaAsset;

    struct MockMedia {
        uploads: AtomicUsize,
    }

    impl MockMedia {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                uploads: AtomicUsize::new(0),
            })
        }

        fn upload_count(&self) -> usize {
            self.uploads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MediaStore for MockMedia {
        async fn upload(&self, filename: &str, _bytes: Vec<u8>) -> Result<MediaAsset, MediaError> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(MediaAsset {
                url: format!("https://media.test/{}", filename),
            })
        }
    }

    async fn test_state(media: Arc<MockMedia>) -> ServerState {
        let db = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        crate::db::define_schema(&db).await.unwrap();
        ServerState::new(Config::with_overrides("/tmp/staffdir-test", 0), db, media)
    }

    fn sample_create(employee_id: &str) -> EmployeeCreate {
        EmployeeCreate {
            employee_id: employee_id.to_string(),
            name: "Ravi Kumar".to_string(),
            age: 28,
            job_role: "Designer".to_string(),
            mobile_no: "9000000001".to_string(),
            email: "ravi@example.com".to_string(),
            address: "4 Park Lane".to_string(),
            salary: Decimal::from(12_000),
            joining_month: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn sample_photo() -> PhotoUpload {
        PhotoUpload {
            filename: "ravi.jpg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }
    }

    // ========== Service-level flow ==========

    #[tokio::test]
    async fn create_without_photo_fails_before_any_store_mutation() {
        let media = MockMedia::new();
        let state = test_state(media.clone()).await;

        let err = create_employee(&state, sample_create("EMP-1"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let repo = EmployeeRepository::new(state.get_db());
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(media.upload_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_id_conflicts_without_a_second_upload() {
        let media = MockMedia::new();
        let state = test_state(media.clone()).await;

        create_employee(&state, sample_create("EMP-1"), Some(sample_photo()))
            .await
            .unwrap();
        let err = create_employee(&state, sample_create("EMP-1"), Some(sample_photo()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let repo = EmployeeRepository::new(state.get_db());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert_eq!(media.upload_count(), 1);
    }

    #[tokio::test]
    async fn insert_failure_after_upload_surfaces_error_and_orphans_the_asset() {
        let media = MockMedia::new();
        let state = test_state(media.clone()).await;

        // Every insert now fails its field assertion. Reads are
        // unaffected, so the duplicate pre-check passes and the photo
        // upload goes through before the insert is rejected.
        state
            .get_db()
            .query("DEFINE FIELD employee_id ON TABLE employee ASSERT false")
            .await
            .unwrap()
            .check()
            .unwrap();

        let err = create_employee(&state, sample_create("EMP-1"), Some(sample_photo()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(media.upload_count(), 1);

        let repo = EmployeeRepository::new(state.get_db());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_record_carries_uploaded_url_and_zero_pf() {
        let media = MockMedia::new();
        let state = test_state(media.clone()).await;

        let employee = create_employee(&state, sample_create("EMP-1"), Some(sample_photo()))
            .await
            .unwrap();
        assert_eq!(employee.photo, "https://media.test/ravi.jpg");
        assert_eq!(employee.total_pf, Decimal::ZERO);
    }

    // ========== Router-level ==========

    const BOUNDARY: &str = "X-STAFFDIR-TEST-BOUNDARY";

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn employee_fields<'a>() -> Vec<(&'a str, &'a str)> {
        vec![
            ("employeeId", "EMP-7"),
            ("name", "Meera Shah"),
            ("age", "35"),
            ("jobRole", "Manager"),
            ("mobileNo", "9000000002"),
            ("email", "meera@example.com"),
            ("address", "9 Hill Road"),
            ("salary", "15000"),
            ("joiningMonth", "2025-02"),
        ]
    }

    fn add_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/employees/add")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn add_endpoint_returns_201_and_record_round_trips() {
        let state = test_state(MockMedia::new()).await;
        let app = build_app().with_state(state);

        let body = multipart_body(
            &employee_fields(),
            Some(("meera.png", b"not-a-real-png".as_slice())),
        );
        let response = app.clone().oneshot(add_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = json_body(response).await;
        assert_eq!(created["employeeId"], "EMP-7");
        assert_eq!(created["totalPF"], 0.0);
        assert_eq!(created["photo"], "https://media.test/meera.png");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/employees/EMP-7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = json_body(response).await;
        assert_eq!(fetched["name"], "Meera Shah");
        assert_eq!(fetched["salary"], 15000.0);
        assert_eq!(fetched["joiningMonth"], "2025-02-01");
    }

    #[tokio::test]
    async fn add_endpoint_without_file_returns_400() {
        let state = test_state(MockMedia::new()).await;
        let app = build_app().with_state(state);

        let body = multipart_body(&employee_fields(), None);
        let response = app.oneshot(add_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let envelope = json_body(response).await;
        assert_eq!(envelope["code"], "E0002");
        assert_eq!(envelope["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn unknown_employee_returns_404_envelope() {
        let state = test_state(MockMedia::new()).await;
        let app = build_app().with_state(state);

        for request in [
            Request::builder()
                .uri("/api/employees/GHOST")
                .body(Body::empty())
                .unwrap(),
            Request::builder()
                .method("PUT")
                .uri("/api/employees/GHOST")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
            Request::builder()
                .method("DELETE")
                .uri("/api/employees/GHOST")
                .body(Body::empty())
                .unwrap(),
        ] {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            let envelope = json_body(response).await;
            assert_eq!(envelope["code"], "E0003");
        }
    }

    #[tokio::test]
    async fn role_query_with_no_matches_returns_empty_array() {
        let state = test_state(MockMedia::new()).await;
        let app = build_app().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/employees/role/Accountant")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }
}
