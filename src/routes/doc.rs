use utoipa::OpenApi;

use crate::routes::{health, hello};

#[derive(OpenApi)]
#[openapi(info(
    title = "hello-server",
    description = "hello-server API",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(hello::HelloApi::openapi());
    root.merge(health::HealthApi::openapi());
    root
}
