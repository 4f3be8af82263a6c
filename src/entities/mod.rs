pub mod feeding_schedule;
pub mod health_record;
pub mod medication;
pub mod pet;
pub mod photo;
pub mod user;
pub mod vet_visit;

pub use feeding_schedule::Entity as FeedingSchedule;
pub use health_record::Entity as HealthRecord;
pub use medication::Entity as Medication;
pub use pet::Entity as Pet;
pub use photo::Entity as Photo;
pub use user::Entity as User;
pub use vet_visit::Entity as VetVisit;

pub mod prelude;
