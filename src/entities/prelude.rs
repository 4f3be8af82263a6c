pub use super::feeding_schedule::Entity as FeedingSchedule;
pub use super::health_record::Entity as HealthRecord;
pub use super::medication::Entity as Medication;
pub use super::pet::Entity as Pet;
pub use super::photo::Entity as Photo;
pub use super::user::Entity as User;
pub use super::vet_visit::Entity as VetVisit;
