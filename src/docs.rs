use utoipa::OpenApi;

use crate::modules::rosters::model::{
    BatchLimitsResponse, ErrorResponse, Role, RosterPreviewResponse, RosterRequest,
};
use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::rosters::controller::download_roster,
        crate::modules::rosters::controller::preview_roster,
        crate::modules::rosters::controller::get_limits,
        crate::router::health,
    ),
    components(
        schemas(
            RosterRequest,
            RosterPreviewResponse,
            BatchLimitsResponse,
            Role,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Rosters", description = "VANO roster generation"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "VANO Roster API",
        description = "Generates CSV rosters of synthetic user accounts, optionally edited by an AI instruction"
    )
)]
pub struct ApiDoc;
