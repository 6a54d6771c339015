//! Integration tests for repository CRUD against a real database.
//!
//! Covers:
//! - Insert / find / update / delete per entity
//! - Storage form of JSON fields (always text in the database)
//! - Cascade and set-null behaviour on work and user deletion
//! - Unique constraint violations

use buildtrack_core::json_field::JsonField;
use buildtrack_core::normalize::{denormalize, normalize, normalize_all};
use buildtrack_db::models::daily_log::CreateDailyLog;
use buildtrack_db::models::finance::{CreateFinanceCategory, CreateFinanceRecord};
use buildtrack_db::models::material::CreateMaterial;
use buildtrack_db::models::material_order::{CreateMaterialOrder, UpdateMaterialOrder};
use buildtrack_db::models::task::{CreateTask, UpdateTask};
use buildtrack_db::models::task_status::CreateTaskStatus;
use buildtrack_db::models::user::CreateUser;
use buildtrack_db::models::user_profile::CreateUserProfile;
use buildtrack_db::models::work::{CreateWork, UpdateWork};
use buildtrack_db::repositories::{
    DailyLogRepo, FinanceCategoryRepo, FinanceRecordRepo, MaterialOrderRepo, MaterialRepo,
    TaskRepo, TaskStatusRepo, UserProfileRepo, UserRepo, WorkRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_work(name: &str) -> CreateWork {
    CreateWork {
        name: name.to_string(),
        address: None,
        client_name: None,
        status: None,
        start_date: None,
        end_date: None,
        budget: None,
        images: None,
        team_ids: None,
    }
}

fn new_task(work_id: Option<String>, title: &str) -> CreateTask {
    CreateTask {
        work_id,
        status_id: None,
        title: title.to_string(),
        description: None,
        priority: None,
        due_date: None,
        team_ids: None,
        images: None,
    }
}

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Ana".to_string(),
        email: email.to_string(),
        phone: None,
        role: None,
        profile_id: None,
        is_active: None,
        permissions: None,
    }
}

/// Raw column text, bypassing the model.
async fn stored_text(pool: &PgPool, table: &str, column: &str, id: &str) -> Option<String> {
    let (text,): (Option<String>,) =
        sqlx::query_as(&format!("SELECT {column} FROM {table} WHERE id = $1"))
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap();
    text
}

// ---------------------------------------------------------------------------
// Works
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_crud(pool: PgPool) {
    let work = WorkRepo::create(&pool, &new_work("Riverside Tower"))
        .await
        .unwrap();
    assert_eq!(work.name, "Riverside Tower");
    assert_eq!(work.status, "planned"); // default
    assert_eq!(work.id.len(), 36);

    let found = WorkRepo::find_by_id(&pool, &work.id).await.unwrap().unwrap();
    assert_eq!(found.name, work.name);

    let update = UpdateWork {
        name: None,
        address: Some("12 River Rd".into()),
        client_name: None,
        status: Some("active".into()),
        start_date: None,
        end_date: None,
        budget: Some(250_000.0),
        images: None,
        team_ids: None,
    };
    let updated = WorkRepo::update(&pool, &work.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Riverside Tower"); // untouched
    assert_eq!(updated.status, "active");
    assert_eq!(updated.budget, Some(250_000.0));

    assert!(WorkRepo::delete(&pool, &work.id).await.unwrap());
    assert!(!WorkRepo::delete(&pool, &work.id).await.unwrap());
    assert!(WorkRepo::find_by_id(&pool, &work.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_work_returns_none(pool: PgPool) {
    let update = UpdateWork {
        name: Some("Ghost".into()),
        address: None,
        client_name: None,
        status: None,
        start_date: None,
        end_date: None,
        budget: None,
        images: None,
        team_ids: None,
    };
    let result = WorkRepo::update(&pool, "does-not-exist", &update)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// JSON fields: storage form
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_json_fields_stored_as_text(pool: PgPool) {
    let mut input = new_work("Harbor Depot");
    input.images = Some(JsonField::Value(json!(["front.jpg", "plan.pdf"])));
    input.team_ids = Some(JsonField::Value(json!(["u1", "u2"])));
    let work = WorkRepo::create(&pool, &denormalize(input)).await.unwrap();

    assert_eq!(
        stored_text(&pool, "works", "images", &work.id).await.as_deref(),
        Some(r#"["front.jpg","plan.pdf"]"#)
    );

    // Repositories return storage form ...
    assert_eq!(
        work.team_ids,
        Some(JsonField::Text(r#"["u1","u2"]"#.to_string()))
    );

    // ... and normalize decodes it.
    let work = normalize(Some(work)).unwrap();
    assert_eq!(work.team_ids, Some(JsonField::Value(json!(["u1", "u2"]))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_stored_json_is_returned_as_text(pool: PgPool) {
    let task = TaskRepo::create(&pool, &new_task(None, "Pour slab"))
        .await
        .unwrap();
    sqlx::query("UPDATE tasks SET images = 'not valid json' WHERE id = $1")
        .bind(&task.id)
        .execute(&pool)
        .await
        .unwrap();

    let task = normalize(TaskRepo::find_by_id(&pool, &task.id).await.unwrap()).unwrap();
    assert_eq!(task.images, Some(JsonField::Text("not valid json".into())));
    assert_eq!(task.team_ids, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pre_serialized_text_is_not_double_encoded(pool: PgPool) {
    let mut input = new_task(None, "Order rebar");
    input.team_ids = Some(JsonField::from(r#"["u9"]"#));
    let task = TaskRepo::create(&pool, &denormalize(input)).await.unwrap();

    assert_eq!(
        stored_text(&pool, "tasks", "team_ids", &task.id).await.as_deref(),
        Some(r#"["u9"]"#)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_material_order_quotes_round_trip(pool: PgPool) {
    let quotes = json!([{"item": "cement", "qty": 10}, {"item": "sand", "qty": 4.5}]);
    let input = CreateMaterialOrder {
        work_id: None,
        material_id: None,
        supplier: Some("ACME Supply".into()),
        status: None,
        quantity: Some(10.0),
        requested_by: None,
        quotes: Some(JsonField::Value(quotes.clone())),
        images: None,
    };
    let order = MaterialOrderRepo::create(&pool, &denormalize(input))
        .await
        .unwrap();
    assert_eq!(order.status, "requested");

    let update = UpdateMaterialOrder {
        work_id: None,
        material_id: None,
        supplier: None,
        status: Some("quoted".into()),
        quantity: None,
        requested_by: None,
        quotes: None,
        images: Some(JsonField::Value(json!([]))),
    };
    let order = MaterialOrderRepo::update(&pool, &order.id, &denormalize(update))
        .await
        .unwrap();
    let order = normalize(order).unwrap();

    assert_eq!(order.status, "quoted");
    assert_eq!(order.quotes, Some(JsonField::Value(quotes))); // kept by COALESCE
    assert_eq!(order.images, Some(JsonField::Value(json!([]))));
}

// ---------------------------------------------------------------------------
// Work-scoped listing and cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_work_and_cascade_delete(pool: PgPool) {
    let work = WorkRepo::create(&pool, &new_work("School Annex"))
        .await
        .unwrap();
    let other = WorkRepo::create(&pool, &new_work("Bridge")).await.unwrap();

    TaskRepo::create(&pool, &new_task(Some(work.id.clone()), "Excavate"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(Some(work.id.clone()), "Formwork"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(Some(other.id.clone()), "Survey"))
        .await
        .unwrap();

    let log = DailyLogRepo::create(
        &pool,
        &CreateDailyLog {
            work_id: work.id.clone(),
            author_id: None,
            log_date: None,
            weather: Some("sunny".into()),
            content: "Excavation started".into(),
            images: None,
            team_ids: None,
        },
    )
    .await
    .unwrap();

    let tasks = normalize_all(TaskRepo::list_by_work(&pool, &work.id).await.unwrap());
    assert_eq!(tasks.len(), 2);
    assert_eq!(DailyLogRepo::list_by_work(&pool, &work.id).await.unwrap().len(), 1);

    assert!(WorkRepo::delete(&pool, &work.id).await.unwrap());
    assert!(TaskRepo::list_by_work(&pool, &work.id).await.unwrap().is_empty());
    assert!(DailyLogRepo::find_by_id(&pool, &log.id).await.unwrap().is_none());
    assert_eq!(TaskRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_finance_record_defaults_and_category_set_null(pool: PgPool) {
    let category = FinanceCategoryRepo::create(
        &pool,
        &CreateFinanceCategory {
            name: "Concrete".into(),
            kind: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(category.kind, "expense");

    let record = FinanceRecordRepo::create(
        &pool,
        &CreateFinanceRecord {
            work_id: None,
            category_id: Some(category.id.clone()),
            description: "Ready-mix delivery".into(),
            kind: None,
            amount: 1830.5,
            record_date: None,
            images: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(record.kind, "expense");

    assert!(FinanceCategoryRepo::delete(&pool, &category.id).await.unwrap());
    let record = FinanceRecordRepo::find_by_id(&pool, &record.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.category_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_materials_listed_by_name(pool: PgPool) {
    for name in ["Sand", "Cement", "Rebar"] {
        MaterialRepo::create(
            &pool,
            &CreateMaterial {
                work_id: None,
                name: name.into(),
                unit: Some("kg".into()),
                unit_price: None,
                quantity: None,
                images: None,
            },
        )
        .await
        .unwrap();
    }

    let names: Vec<String> = MaterialRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["Cement", "Rebar", "Sand"]);
}

// ---------------------------------------------------------------------------
// Users, profiles, statuses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_with_profile(pool: PgPool) {
    let profile = UserProfileRepo::create(
        &pool,
        &denormalize(CreateUserProfile {
            name: "Site engineer".into(),
            description: None,
            permissions: Some(JsonField::Value(json!(["tasks:write", "logs:write"]))),
        }),
    )
    .await
    .unwrap();

    let mut input = new_user("ana@example.com");
    input.profile_id = Some(profile.id.clone());
    let user = UserRepo::create(&pool, &input).await.unwrap();
    assert_eq!(user.role, "member");
    assert!(user.is_active);

    assert!(UserProfileRepo::delete(&pool, &profile.id).await.unwrap());
    let user = UserRepo::find_by_id(&pool, &user.id).await.unwrap().unwrap();
    assert_eq!(user.profile_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap();
    let result = UserRepo::create(&pool, &new_user("dup@example.com")).await;

    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_statuses_in_board_order(pool: PgPool) {
    for (name, order) in [("Done", 3), ("To do", 1), ("In progress", 2)] {
        TaskStatusRepo::create(
            &pool,
            &CreateTaskStatus {
                name: name.into(),
                color: None,
                sort_order: Some(order),
            },
        )
        .await
        .unwrap();
    }

    let statuses = TaskStatusRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["To do", "In progress", "Done"]);

    let mut input = new_task(None, "Plaster");
    input.status_id = Some(statuses[0].id.clone());
    let task = TaskRepo::create(&pool, &input).await.unwrap();

    let moved = TaskRepo::update(
        &pool,
        &task.id,
        &UpdateTask {
            work_id: None,
            status_id: Some(statuses[2].id.clone()),
            title: None,
            description: None,
            priority: None,
            due_date: None,
            team_ids: None,
            images: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.status_id.as_deref(), Some(statuses[2].id.as_str()));
    assert_eq!(moved.title, "Plaster");
}
