pub mod composer;
pub mod preview;

pub use composer::ComposerPanel;
pub use preview::PreviewPanel;
