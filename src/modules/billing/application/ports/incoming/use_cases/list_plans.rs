use crate::modules::billing::application::domain::PlanListing;

pub trait ListPlansUseCase: Send + Sync {
    fn execute(&self) -> PlanListing;
}
