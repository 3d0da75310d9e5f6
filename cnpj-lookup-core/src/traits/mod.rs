//! Side-effect abstraction trait definition

mod web_launcher;

pub use cnpj_lookup_provider::RegistryClient;
pub use web_launcher::WebLauncher;
