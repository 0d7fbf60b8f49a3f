use tracing::{instrument, warn};

use crate::domain::{
    academic_semester::{
        entities::AcademicSemester,
        policies::ensure_code_matches_title,
        ports::AcademicSemesterService,
        value_objects::{CreateAcademicSemesterInput, UpdateAcademicSemesterInput},
    },
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{
        ports::DocumentStore,
        value_objects::{Document, document_id},
    },
    query::{
        condition::ConditionExpression,
        pagination::Paginated,
        value_objects::{QuerySpec, RawParameters},
    },
    record::{
        Record,
        services::{create_record, delete_record, get_record, list_records, update_record},
    },
};

/// Rejects a second semester with the same title in the same year.
/// `current` is the id of the semester being updated, if any.
async fn ensure_unique_title_for_year<S: DocumentStore>(
    store: &S,
    title: &str,
    year: &str,
    current: Option<&str>,
) -> Result<(), CoreError> {
    let condition = ConditionExpression::And(vec![
        ConditionExpression::equals("title", title),
        ConditionExpression::equals("year", year),
    ]);
    let existing = store
        .find(AcademicSemester::SCHEMA.name, &condition, &QuerySpec::default())
        .await?;

    if existing.iter().any(|doc| document_id(doc) != current) {
        warn!(title, year, "Academic semester already exists");
        return Err(CoreError::Conflict(format!(
            "academic semester {title} {year} already exists"
        )));
    }

    Ok(())
}

impl<S> AcademicSemesterService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self))]
    async fn create_semester(
        &self,
        input: CreateAcademicSemesterInput,
    ) -> Result<AcademicSemester, CoreError> {
        ensure_code_matches_title(&input.title, &input.code)?;
        ensure_unique_title_for_year(&self.store, &input.title, &input.year, None).await?;

        create_record(&self.store, &AcademicSemester::new(input)).await
    }

    #[instrument(skip(self))]
    async fn get_all_semesters(
        &self,
        params: RawParameters,
    ) -> Result<Paginated<Document>, CoreError> {
        list_records(
            &self.store,
            &self.translator,
            &AcademicSemester::SCHEMA,
            &params,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_single_semester(
        &self,
        id: String,
    ) -> Result<Option<AcademicSemester>, CoreError> {
        get_record(&self.store, &id).await
    }

    #[instrument(skip(self))]
    async fn update_semester(
        &self,
        id: String,
        input: UpdateAcademicSemesterInput,
    ) -> Result<AcademicSemester, CoreError> {
        let current: AcademicSemester = get_record(&self.store, &id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let title = input.title.as_deref().unwrap_or(&current.title);
        let year = input.year.as_deref().unwrap_or(&current.year);
        let code = input.code.as_deref().unwrap_or(&current.code);

        if input.title.is_some() || input.code.is_some() {
            ensure_code_matches_title(title, code)?;
        }
        if input.title.is_some() || input.year.is_some() {
            ensure_unique_title_for_year(&self.store, title, year, Some(id.as_str())).await?;
        }

        update_record(&self.store, &id, &input).await
    }

    #[instrument(skip(self))]
    async fn delete_semester(&self, id: String) -> Result<AcademicSemester, CoreError> {
        delete_record(&self.store, &id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::in_memory_service;

    fn semester(title: &str, year: &str, code: &str) -> CreateAcademicSemesterInput {
        CreateAcademicSemesterInput {
            title: title.to_string(),
            year: year.to_string(),
            code: code.to_string(),
            start_month: "January".to_string(),
            end_month: "May".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_checks_code_against_title() {
        let service = in_memory_service();

        let created = service
            .create_semester(semester("Autumn", "2025", "01"))
            .await
            .unwrap();
        assert_eq!(created.code, "01");

        assert_eq!(
            service.create_semester(semester("Summer", "2025", "03")).await,
            Err(CoreError::InvalidSemesterCode)
        );
        assert_eq!(
            service.create_semester(semester("Winter", "2025", "04")).await,
            Err(CoreError::InvalidSemesterCode)
        );
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_title_and_year() {
        let service = in_memory_service();
        service
            .create_semester(semester("Fall", "2025", "03"))
            .await
            .unwrap();

        assert!(matches!(
            service.create_semester(semester("Fall", "2025", "03")).await,
            Err(CoreError::Conflict(_))
        ));
        assert!(
            service
                .create_semester(semester("Fall", "2026", "03"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_update_applies_rules_to_merged_semester() {
        let service = in_memory_service();
        let autumn = service
            .create_semester(semester("Autumn", "2025", "01"))
            .await
            .unwrap();
        service
            .create_semester(semester("Summer", "2025", "02"))
            .await
            .unwrap();

        let retitled = UpdateAcademicSemesterInput {
            title: Some("Fall".to_string()),
            ..Default::default()
        };
        assert_eq!(
            service.update_semester(autumn.id.clone(), retitled).await,
            Err(CoreError::InvalidSemesterCode)
        );

        let clash = UpdateAcademicSemesterInput {
            title: Some("Summer".to_string()),
            code: Some("02".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update_semester(autumn.id.clone(), clash).await,
            Err(CoreError::Conflict(_))
        ));

        let same_year = UpdateAcademicSemesterInput {
            year: Some("2025".to_string()),
            end_month: Some("June".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_semester(autumn.id.clone(), same_year)
            .await
            .unwrap();
        assert_eq!(updated.end_month, "June");
        assert_eq!(updated.title, "Autumn");
    }

    #[tokio::test]
    async fn test_list_filters_by_year_range() {
        let service = in_memory_service();
        for (title, year, code) in [
            ("Autumn", "2021", "01"),
            ("Autumn", "2023", "01"),
            ("Summer", "2024", "02"),
            ("Fall", "2026", "03"),
        ] {
            service
                .create_semester(semester(title, year, code))
                .await
                .unwrap();
        }

        let page = service
            .get_all_semesters(RawParameters::from_pairs(&[
                ("year[gte]", "2022"),
                ("year[lt]", "2026"),
                ("sort", "year"),
                ("fields", "year"),
            ]))
            .await
            .unwrap();

        let years: Vec<&str> = page
            .data
            .iter()
            .filter_map(|doc| doc["year"].as_str())
            .collect();
        assert_eq!(years, vec!["2023", "2024"]);
        assert_eq!(page.meta.total, 2);
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let service = in_memory_service();
        let created = service
            .create_semester(semester("Summer", "2025", "02"))
            .await
            .unwrap();

        assert_eq!(
            service.get_single_semester(created.id.clone()).await.unwrap(),
            Some(created.clone())
        );
        assert_eq!(
            service.delete_semester(created.id.clone()).await.unwrap(),
            created
        );
        assert_eq!(service.get_single_semester(created.id).await.unwrap(), None);
    }
}
