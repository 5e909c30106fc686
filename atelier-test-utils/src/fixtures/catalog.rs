//! Row seeders used across repository, service, and controller tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn seed_company(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::company::Model, DbErr> {
    entity::company::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn seed_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn seed_material(
    db: &DatabaseConnection,
    name: &str,
    material_type: &str,
    company_id: i32,
) -> Result<entity::material::Model, DbErr> {
    entity::material::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        material_type: ActiveValue::Set(material_type.to_string()),
        company_id: ActiveValue::Set(company_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn seed_furniture_model(
    db: &DatabaseConnection,
    name: &str,
    category_id: i32,
) -> Result<entity::furniture_model::Model, DbErr> {
    entity::furniture_model::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        category_id: ActiveValue::Set(category_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn seed_build(
    db: &DatabaseConnection,
    furniture_model_id: i32,
) -> Result<entity::build::Model, DbErr> {
    entity::build::ActiveModel {
        furniture_model_id: ActiveValue::Set(furniture_model_id),
        reference: ActiveValue::Set(None),
        date_creation: ActiveValue::Set(None),
        destination: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn seed_tag(
    db: &DatabaseConnection,
    label: &str,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        label: ActiveValue::Set(label.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
