use rust_decimal::Decimal;

use super::models::ConditionCreate;
use super::services;
use crate::test_helpers::{create_test_experiment, setup_test_db};

#[tokio::test]
async fn list_view_joins_experiment_and_groups_by_its_name() {
    let db = setup_test_db().await;
    let warm = create_test_experiment(&db, "Warm cycle", None).await;
    let cold = create_test_experiment(&db, "Cold cycle", None).await;

    services::create_condition(
        &db,
        ConditionCreate {
            experiment_id: warm.id,
            temperature: Some(Decimal::new(2550, 2)),
            ..Default::default()
        },
    )
    .await
    .expect("insert failed");
    services::create_condition(
        &db,
        ConditionCreate {
            experiment_id: cold.id,
            temperature: Some(Decimal::new(-500, 2)),
            illumination: Some("dark".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("insert failed");

    let rows = services::get_all_conditions(&db).await.expect("query failed");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].experiment_name, "Cold cycle");
    assert_eq!(rows[0].temperature, Some(Decimal::new(-500, 2)));
    assert_eq!(rows[0].illumination.as_deref(), Some("dark"));
    assert_eq!(rows[1].experiment_name, "Warm cycle");
    assert_eq!(rows[1].temperature, Some(Decimal::new(2550, 2)));
}
