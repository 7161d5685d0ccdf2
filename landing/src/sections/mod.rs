// Landing page sections

mod advocacy;
mod contact;
mod feedback;
mod footer;
mod hero;
mod icons;
mod nav;
mod resume;
mod services;

pub use advocacy::Advocacy;
pub use contact::Contact;
pub use feedback::FeedbackToast;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use resume::ResumeHighlights;
pub use services::Services;
