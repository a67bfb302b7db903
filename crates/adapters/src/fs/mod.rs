mod folders;
mod scanner;
mod thumbs;

pub use folders::FsFolderTree;
pub use scanner::WalkdirLibraryScanner;
pub use thumbs::{ImageCrateDecoder, THUMBNAIL_SIZE};
