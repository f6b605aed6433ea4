use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Graph Service API",
        version = "1.0.0",
        description = "Friend graph lookups for a single user.\n\n**Features:**\n- Direct friends\n- Shared-interest recommendations from friends-of-friends\n- Health monitoring and metrics"
    ),
    paths(
        // Social graph
        crate::api::social_graph::get_social_graph,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::GraphResponse,
            crate::models::UserSummary,
            crate::models::RecommendationEntry,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Social Graph", description = "Friends and friend-of-friend recommendations for a user."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
