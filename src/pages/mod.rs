mod about;
mod features;
mod home;
mod pricing;
mod showcase;

pub use about::AboutPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use pricing::PricingPage;
pub use showcase::ShowcasePage;
