use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct SubmitRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ClientRecordDoc {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    #[schema(format = DateTime)]
    pub timestamp: String,
}

#[derive(Serialize, ToSchema)]
pub struct SubmitResponse {
    pub message: String,
    pub data: ClientRecordDoc,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::intake::submit,
        crate::routes::intake::fetch,
    ),
    components(
        schemas(
            HealthResponse,
            SubmitRequest,
            ClientRecordDoc,
            SubmitResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "intake")
    )
)]
pub struct ApiDoc;
