pub mod about;
pub mod award;
pub mod contact;
pub mod education;
pub mod experience;
pub mod message;
pub mod project;
pub mod tech_stack;
pub mod testimonial;
pub mod user;

pub use about::About;
pub use award::Award;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use message::Message;
pub use project::{Project, Technology};
pub use tech_stack::{Skill, TechStack};
pub use testimonial::Testimonial;
pub use user::User;
