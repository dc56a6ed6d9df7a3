//! OpenAPI document for the REST surface

use super::{dto::*, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Admin Panel API", description = "Read and replace the admin settings document"),
    paths(handlers::get_settings, handlers::update_settings),
    components(schemas(
        SettingsDto,
        GeneralSettingsDto,
        AppearanceSettingsDto,
        MenuPositionDto,
        AdvancedSettingsDto,
        ErrorResponse
    )),
    tags((name = "Settings", description = "Settings document"))
)]
pub struct ApiDoc;
