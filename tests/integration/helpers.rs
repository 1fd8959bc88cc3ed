use catalog::{
    application::{
        create_category::use_case::CreateCategoryUseCase,
        get_category::use_case::GetCategoryUseCase,
        update_category::use_case::UpdateCategoryUseCase,
    },
    infrastructure::persistence::in_memory::InMemoryCatalog,
};
use std::sync::Arc;

pub struct TestCatalog {
    pub catalog: InMemoryCatalog,
    pub create: CreateCategoryUseCase,
    pub get: GetCategoryUseCase,
    pub update: UpdateCategoryUseCase,
}

pub fn setup() -> TestCatalog {
    let catalog = InMemoryCatalog::new();
    TestCatalog {
        create: CreateCategoryUseCase::new(
            Arc::new(catalog.repository()),
            Arc::new(catalog.unit_of_work()),
        ),
        get: GetCategoryUseCase::new(Arc::new(catalog.repository())),
        update: UpdateCategoryUseCase::new(
            Arc::new(catalog.repository()),
            Arc::new(catalog.unit_of_work()),
        ),
        catalog,
    }
}
