use std::collections::HashSet;
use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use futures_util::future::join_all;
use serde_json::{json, Value};

use employee_api::db::{EmployeeStore, InMemoryEmployeeStore};
use employee_api::handlers::employee::configure;
use employee_api::services::employee::EmployeeService;

fn employee(i: usize) -> Value {
    json!({
        "name": format!("Employee {}", i),
        "age": 20 + i as i32,
        "cpf": format!("{:011}", i),
        "celullar": null,
        "office": "Clerk",
        "sector": "Operations",
        "wage": 1000.0 + i as f64
    })
}

#[actix_web::test]
async fn sequential_creates_are_all_listed_in_order() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(EmployeeService::new(store.clone())))
            .configure(configure),
    )
    .await;

    for i in 0..10 {
        let req = test::TestRequest::post()
            .uri("/api/employee")
            .set_json(employee(i))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/employee/list").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let expected: Vec<Value> = (0..10).map(employee).collect();
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn negative_numbers_keep_their_sign() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(EmployeeService::new(store)))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/employee")
        .set_json(json!({ "age": -5, "wage": -0.5 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/employee/list").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["age"], -5);
    assert_eq!(body[0]["wage"], -0.5);
    assert_eq!(body[0]["name"], Value::Null);
}

#[actix_web::test]
async fn concurrent_creates_get_distinct_ids() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(EmployeeService::new(store.clone())))
            .configure(configure),
    )
    .await;

    let requests = (0..50).map(|i| {
        let req = test::TestRequest::post()
            .uri("/api/employee")
            .set_json(employee(i))
            .to_request();
        test::call_service(&app, req)
    });
    for resp in join_all(requests).await {
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let records = store.find_all().await.unwrap();
    assert_eq!(records.len(), 50);
    let ids: HashSet<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 50);

    let req = test::TestRequest::get().uri("/api/employee/list").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.len(), 50);
    assert!(body.iter().all(|e| e.get("id").is_none()));
}
