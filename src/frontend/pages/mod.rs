//! Application pages.

pub mod landing;
pub mod login;
pub mod sections;
pub mod signup;

pub use landing::Landing;
pub use login::Login;
pub use sections::{
    AddEvent, Analytics, Attendance, ChangePassword, Dashboard, EventRegistration, Events,
    Feedback, MyEvents, Notifications, PageNotFound, Profile, TrainerAllocation,
};
pub use signup::Signup;
