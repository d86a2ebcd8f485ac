pub mod chat;
pub mod shared;
pub mod wizard;

pub use chat::ChatView;
pub use wizard::WizardSidebar;
