pub mod campaigns;
pub mod health;
pub mod notifications;
pub mod preferences;
pub mod validation;
