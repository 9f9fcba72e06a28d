use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::product::use_cases::search::SearchProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductSearchResponse, parse_product_query};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
}

impl ProductApi {
    pub fn new(search_use_case: Arc<dyn SearchProductsUseCase>) -> Self {
        Self { search_use_case }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Search products
    ///
    /// Returns every product, or only the one whose identifier equals `id`
    /// when the parameter is given. Matches are keyed by identifier.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, id: Query<Option<String>>) -> SearchProductsResponse {
        let query = match parse_product_query(id.0.as_deref()) {
            Ok(query) => query,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return SearchProductsResponse::BadRequest(json);
            }
        };

        match self.search_use_case.execute(query).await {
            Ok(products) => SearchProductsResponse::Ok(Json(products.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductSearchResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
