use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{ResponseError, Result, dev::ServiceResponse};

use crate::utils::error::CustomError;

pub fn not_found<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let new_response =
        CustomError::NotFoundError("Route does not exist".to_string()).error_response();
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}
