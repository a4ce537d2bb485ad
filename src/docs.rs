//! OpenAPI document for the REST API.
//!
//! Registers every route under `/api/v1`, the request/response schemas, and
//! the `bearer_auth` security scheme used by the protected routes. Served as
//! JSON at `/api/v1/openapi.json` and browsable through Swagger UI at
//! `/api/v1/swagger`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::database::models::{NewUser, User, UserUpdate};
use crate::error::ErrorBody;
use crate::handlers::protected::health::HealthStatus;
use crate::handlers::protected::users::DeleteResponse;
use crate::handlers::public::login::{LoginRequest, LoginResponse};

pub const SWAGGER_UI_PATH: &str = "/api/v1/swagger";
pub const OPENAPI_JSON_PATH: &str = "/api/v1/openapi.json";

/// Add the JWT bearer security scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Cost Guardian API",
        version = "1.0",
        description = "User management behind JWT bearer authentication.",
        license(
            name = "Apache 2.0",
            url = "http://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    paths(
        crate::handlers::public::login::login,
        crate::handlers::protected::health::health,
        crate::handlers::protected::users::list::user_list,
        crate::handlers::protected::users::show::user_show,
        crate::handlers::protected::users::create::user_create,
        crate::handlers::protected::users::update::user_update,
        crate::handlers::protected::users::delete::user_delete,
    ),
    components(schemas(
        User,
        NewUser,
        UserUpdate,
        LoginRequest,
        LoginResponse,
        HealthStatus,
        DeleteResponse,
        ErrorBody
    )),
    tags(
        (name = "Auth", description = "Token acquisition"),
        (name = "Users", description = "User records"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it renders.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
