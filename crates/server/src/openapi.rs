use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RecipeDoc { pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct StatusBody { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::welcome,
        crate::routes::health,
        crate::routes::recipes::list_recipes,
        crate::routes::recipes::create_recipe,
        crate::routes::recipes::get_recipe,
        crate::routes::recipes::update_recipe,
        crate::routes::recipes::delete_recipe,
    ),
    components(
        schemas(
            HealthResponse,
            RecipeDoc,
            StatusBody,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "recipes")
    )
)]
pub struct ApiDoc;
