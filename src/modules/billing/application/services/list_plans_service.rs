use crate::modules::billing::application::domain::{PlanCatalog, PlanListing};
use crate::modules::billing::application::ports::incoming::use_cases::ListPlansUseCase;

pub struct ListPlansService {
    catalog: PlanCatalog,
}

impl ListPlansService {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self { catalog }
    }
}

impl ListPlansUseCase for ListPlansService {
    fn execute(&self) -> PlanListing {
        self.catalog.listing()
    }
}
