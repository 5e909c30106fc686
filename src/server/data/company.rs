use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .order_by_asc(entity::company::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        let Some(company) = entity::prelude::Company::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut company: entity::company::ActiveModel = company.into();
        company.name = ActiveValue::Set(name);
        company.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(company.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Company::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Company::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use atelier_test_utils::prelude::*;

    use super::CompanyRepository;

    #[tokio::test]
    async fn test_list_is_ordered_by_name() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = CompanyRepository::new(&test.db);

        fixtures::seed_company(&test.db, "Zebra Wood").await?;
        fixtures::seed_company(&test.db, "Acme").await?;

        let companies = repository.list().await?;

        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Zebra Wood"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = CompanyRepository::new(&test.db);

        repository.create("Acme".to_string()).await?;
        let duplicate = repository.create("Acme".to_string()).await;

        assert!(duplicate.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_company_returns_none() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = CompanyRepository::new(&test.db);

        let updated = repository.update(42, "Acme".to_string()).await?;

        assert!(updated.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        let repository = CompanyRepository::new(&test.db);

        let company = fixtures::seed_company(&test.db, "Acme").await?;

        assert!(repository.delete(company.id).await?);
        assert!(!repository.delete(company.id).await?);

        Ok(())
    }
}
