pub mod glossary;
pub mod home;

pub use glossary::GlossaryPage;
pub use home::HomePage;
