use actix_web::{web, HttpResponse};

use crate::{
    api::metrics,
    config::GraphOptions,
    database::UserStore,
    services::social_graph_service,
    utils::AppError,
};

/// GET /api/v1/users/{user_id}/social-graph
///
/// Direct friends plus shared-interest recommendations drawn from friends-of-friends.
/// Errors are plain text: 404 "User not found", 500 "Server error".
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/social-graph",
    tag = "Social Graph",
    params(
        ("user_id" = String, Path, description = "Opaque user identifier")
    ),
    responses(
        (status = 200, description = "Social graph for the user", body = crate::models::GraphResponse),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Server error", body = String, content_type = "text/plain")
    )
)]
pub async fn get_social_graph(
    store: web::Data<dyn UserStore>,
    options: web::Data<GraphOptions>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    metrics::increment_request_count();

    log::info!("🕸️  GET /users/{}/social-graph", user_id);

    match social_graph_service::build_social_graph(store.get_ref(), &user_id, *options.get_ref()).await {
        Ok(graph) => {
            log::info!(
                "✅ Social graph for {}: {} friends, {} recommendations",
                user_id,
                graph.direct_friends.len(),
                graph.recommendations.len()
            );
            Ok(HttpResponse::Ok().json(graph))
        }
        Err(AppError::NotFound(detail)) => {
            metrics::increment_not_found_count();
            log::warn!("⚠️ Social graph requested for unknown {}", detail);
            Err(AppError::NotFound(detail))
        }
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Error building social graph for {}: {}", user_id, e);
            Err(e)
        }
    }
}
