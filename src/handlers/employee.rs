use actix_web::{error::InternalError, web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::EmployeeDto;
use crate::services::employee::EmployeeService;

/// Registers the employee routes. Decoding failures on the JSON body are
/// answered with an empty 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected employee payload: {}", err);
        InternalError::from_response(err, HttpResponse::BadRequest().finish()).into()
    });

    cfg.service(
        web::resource("/api/employee/list")
            .route(web::get().to(list_employees)),
    )
    .service(
        web::resource("/api/employee")
            .app_data(json_config)
            .route(web::post().to(create_employee)),
    );
}

pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<EmployeeDto>,
) -> Result<HttpResponse, AppError> {
    service.create_employee(new_employee.into_inner()).await?;
    Ok(HttpResponse::Created().finish())
}
