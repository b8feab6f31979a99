mod carousel;
mod features;
mod footer;
mod header;
mod hero;
mod loading;
mod reveal;
mod stats;

pub use carousel::Carousel;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use loading::LoadingScreen;
pub use reveal::Reveal;
pub use stats::StatSection;
