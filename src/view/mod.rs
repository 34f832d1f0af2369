pub mod landing;
pub mod reveal;
pub mod splash;
pub mod state;

pub use landing::LandingView;
pub use splash::SplashSequence;
pub use state::{RevealFlag, RevealedTree, SplashTree, ViewState};
