mod popups;

pub use popups::*;
