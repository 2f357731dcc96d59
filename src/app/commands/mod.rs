pub mod doctor;
pub mod fetch;
pub mod index;
pub mod tempo;
